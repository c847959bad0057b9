use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const LOCAL_DIR: &str = ".edk";
const APP_DIR: &str = "edk";

/// Search locations for profile documents, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppPaths {
    local_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let cwd = env::current_dir().map_err(|err| {
            AppError::Config(format!("unable to resolve working directory: {err}"))
        })?;
        let home = env::var_os("HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir);

        Ok(Self::from_env(cwd, env::var_os("XDG_CONFIG_HOME"), home))
    }

    /// Builds the search paths from explicit inputs. An empty or relative
    /// `XDG_CONFIG_HOME` is ignored, falling back to `<home>/.config`.
    pub fn from_env(cwd: PathBuf, xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Self {
        let config_home = xdg_config_home
            .map(PathBuf::from)
            .filter(|path| path.is_absolute())
            .or_else(|| home.map(|home| home.join(".config")));

        Self::new(cwd, config_home)
    }

    pub fn new(cwd: PathBuf, config_home: Option<PathBuf>) -> Self {
        let local_dir = cwd.join(LOCAL_DIR);
        let user_dir = config_home.map(|root| root.join(APP_DIR));

        Self {
            local_dir,
            user_dir,
        }
    }

    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }

    pub fn user_dir(&self) -> Option<&Path> {
        self.user_dir.as_deref()
    }
}
