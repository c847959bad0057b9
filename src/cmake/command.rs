use std::fmt;

use crate::profile::ProfileDocument;

pub const CMAKE_PROGRAM: &str = "cmake";

/// A cmake invocation: program, ordered arguments and an environment overlay.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CmakeCommand {
    pub program: String,
    pub env: Vec<(String, String)>,
    pub build_dir: Option<String>,
    pub generator: Option<String>,
    pub definitions: Vec<(String, String)>,
    pub extra: Vec<String>,
}

impl CmakeCommand {
    pub fn from_profile(document: &ProfileDocument) -> Self {
        let cmake = document.cmake.clone().unwrap_or_default();

        Self {
            program: CMAKE_PROGRAM.to_string(),
            env: document.env.clone(),
            build_dir: cmake.build_dir.filter(|dir| !dir.is_empty()),
            generator: cmake.generator.filter(|generator| !generator.is_empty()),
            definitions: cmake.args,
            extra: Vec::new(),
        }
    }

    pub fn with_extra_args(mut self, extra: Vec<String>) -> Self {
        self.extra = extra;
        self
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["-S".to_string(), ".".to_string()];

        if let Some(build_dir) = &self.build_dir {
            args.push("-B".to_string());
            args.push(build_dir.clone());
        }

        if let Some(generator) = &self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }

        args.extend(
            self.definitions
                .iter()
                .map(|(key, value)| format!("-D{key}={value}")),
        );
        args.extend(self.extra.iter().cloned());
        args
    }
}

/// Display form used in the "Running" message. The environment overlay is
/// not part of it.
impl fmt::Display for CmakeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -S .", self.program)?;

        if let Some(build_dir) = &self.build_dir {
            write!(f, " -B {build_dir}")?;
        }

        if let Some(generator) = &self.generator {
            write!(f, " -G\"{generator}\"")?;
        }

        for (key, value) in &self.definitions {
            write!(f, " -D{key}={value}")?;
        }

        for arg in &self.extra {
            write!(f, " {arg}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CmakeSettings;

    #[test]
    fn renders_full_section() {
        let document = ProfileDocument {
            env: Vec::new(),
            cmake: Some(CmakeSettings {
                build_dir: Some("build".to_string()),
                generator: Some("Ninja".to_string()),
                args: vec![("FOO".to_string(), "bar".to_string())],
            }),
        };
        let command = CmakeCommand::from_profile(&document);

        assert_eq!(command.to_string(), "cmake -S . -B build -G\"Ninja\" -DFOO=bar");
        assert_eq!(
            command.args(),
            ["-S", ".", "-B", "build", "-G", "Ninja", "-DFOO=bar"]
        );
    }

    #[test]
    fn missing_section_is_minimal() {
        let command = CmakeCommand::from_profile(&ProfileDocument::default());
        assert_eq!(command.to_string(), "cmake -S .");
        assert_eq!(command.args(), ["-S", "."]);
    }

    #[test]
    fn env_stays_out_of_the_command_line() {
        let document = ProfileDocument {
            env: vec![("CC".to_string(), "clang".to_string())],
            cmake: None,
        };
        let command = CmakeCommand::from_profile(&document);
        assert_eq!(command.to_string(), "cmake -S .");
        assert_eq!(command.env, [("CC".to_string(), "clang".to_string())]);
    }

    #[test]
    fn appends_extra_args_last() {
        let command = CmakeCommand::from_profile(&ProfileDocument::default())
            .with_extra_args(vec!["--fresh".to_string()]);
        assert_eq!(command.to_string(), "cmake -S . --fresh");
        assert_eq!(command.args(), ["-S", ".", "--fresh"]);
    }
}
