use crate::error::{AppError, AppResult};

pub const PROFILE_EXTENSION: &str = ".yaml";

pub fn resolve_profile(requested: &str) -> AppResult<String> {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(
            "profile name must not be empty".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

/// Profile name for a document file name, removing the exact `.yaml` suffix.
pub fn profile_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(PROFILE_EXTENSION)
        .filter(|name| !name.is_empty())
}
