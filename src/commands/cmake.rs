use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::CmakeArgs;
use crate::cmake::{self, CmakeCommand};
use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

/// JSON view of a dry run. `env` keeps document order.
#[derive(Debug, Serialize)]
pub struct PlannedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub env: Map<String, Value>,
    pub display: String,
}

impl PlannedCommand {
    pub fn new(command: &CmakeCommand) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args(),
            env: command
                .env
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect(),
            display: command.to_string(),
        }
    }
}

/// Resolves the profile and synthesizes its command, extra arguments last.
pub fn plan(ctx: &AppContext, args: &CmakeArgs) -> AppResult<CmakeCommand> {
    let name = config::resolve_profile(&args.sdk)?;
    let (_, document) = ctx.store.load(&name)?;
    Ok(CmakeCommand::from_profile(&document).with_extra_args(args.extra.clone()))
}

/// Runs cmake for the named profile and returns the child's exit code.
pub async fn run(ctx: &AppContext, args: CmakeArgs) -> AppResult<i32> {
    let command = plan(ctx, &args)?;

    if args.dry_run {
        ctx.output
            .emit(&dry_run_lines(&command), &PlannedCommand::new(&command))?;
        return Ok(0);
    }

    if ctx.output.mode() == OutputMode::Text {
        println!("Running `{command}`");
    } else {
        tracing::info!(command = %command, "running cmake");
    }

    cmake::run(&command).await
}

pub fn dry_run_lines(command: &CmakeCommand) -> Vec<String> {
    let mut lines: Vec<String> = command
        .env
        .iter()
        .map(|(key, value)| format!("env {key}={value}"))
        .collect();
    lines.push(command.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CmakeSettings, ProfileDocument};

    #[test]
    fn dry_run_lists_overlay_before_command() {
        let document = ProfileDocument {
            env: vec![("CC".to_string(), "clang".to_string())],
            cmake: Some(CmakeSettings {
                build_dir: Some("out".to_string()),
                ..CmakeSettings::default()
            }),
        };
        let command = CmakeCommand::from_profile(&document);
        assert_eq!(
            dry_run_lines(&command),
            ["env CC=clang", "cmake -S . -B out"]
        );
    }
}
