use crate::config::AppPaths;
use crate::error::AppResult;
use crate::output::Output;
use crate::profile::{ProfileLocator, ProfileStore};

#[derive(Debug)]
pub struct AppContext {
    pub store: ProfileStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        Ok(Self::with_paths(paths, json))
    }

    pub fn with_paths(paths: AppPaths, json: bool) -> Self {
        tracing::debug!(
            local = %paths.local_dir().display(),
            user = ?paths.user_dir(),
            "profile search paths"
        );
        let store = ProfileStore::new(ProfileLocator::new(paths));
        let output = Output::new(json);

        Self { store, output }
    }
}
