use std::path::Path;

use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};

use crate::error::{AppError, AppResult};

/// A decoded profile. Mapping entries keep document order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ProfileDocument {
    pub env: Vec<(String, String)>,
    pub cmake: Option<CmakeSettings>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CmakeSettings {
    pub build_dir: Option<String>,
    pub generator: Option<String>,
    pub args: Vec<(String, String)>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    env: Option<Mapping>,
    #[serde(default)]
    cmake: Option<RawCmake>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCmake {
    #[serde(default)]
    build_dir: Option<Value>,
    #[serde(default)]
    generator: Option<Value>,
    #[serde(default)]
    args: Option<Mapping>,
}

impl ProfileDocument {
    /// Decodes profile text. An empty document is an empty profile.
    pub fn parse(path: &Path, raw: &str) -> AppResult<Self> {
        let value: Value = serde_yaml_ng::from_str(raw)?;
        if value.is_null() {
            return Ok(Self::default());
        }

        let raw: RawDocument = serde_yaml_ng::from_value(value)?;
        let invalid = |reason: String| AppError::InvalidProfile {
            path: path.to_path_buf(),
            reason,
        };

        let env = match raw.env {
            Some(mapping) => pairs(&mapping)
                .and_then(check_variable_names)
                .map_err(|reason| invalid(format!("env: {reason}")))?,
            None => Vec::new(),
        };

        let cmake = match raw.cmake {
            Some(section) => Some(CmakeSettings {
                build_dir: optional_scalar(section.build_dir)
                    .map_err(|reason| invalid(format!("cmake.build_dir: {reason}")))?,
                generator: optional_scalar(section.generator)
                    .map_err(|reason| invalid(format!("cmake.generator: {reason}")))?,
                args: match section.args {
                    Some(mapping) => pairs(&mapping)
                        .map_err(|reason| invalid(format!("cmake.args: {reason}")))?,
                    None => Vec::new(),
                },
            }),
            None => None,
        };

        Ok(Self { env, cmake })
    }
}

fn pairs(mapping: &Mapping) -> Result<Vec<(String, String)>, String> {
    mapping
        .iter()
        .map(|(key, value)| {
            let key = scalar(key).ok_or_else(|| "keys must be scalars".to_string())?;
            let value =
                scalar(value).ok_or_else(|| format!("value of `{key}` must be a scalar"))?;
            Ok((key, value))
        })
        .collect()
}

/// Environment names must be non-empty and free of `=` and NUL.
fn check_variable_names(pairs: Vec<(String, String)>) -> Result<Vec<(String, String)>, String> {
    if let Some((name, _)) = pairs
        .iter()
        .find(|(name, _)| name.is_empty() || name.contains(['=', '\0']))
    {
        return Err(format!("invalid variable name `{}`", name.escape_debug()));
    }

    Ok(pairs)
}

fn optional_scalar(value: Option<Value>) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar(&value)
            .map(Some)
            .ok_or_else(|| "expected a scalar".to_string()),
    }
}

/// Text form of a YAML scalar; `null` is the empty string. Numbers use their
/// canonical form, so `1.10` is `1.1` and `0x10` is `16`.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
