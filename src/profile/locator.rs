use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{AppPaths, profile_name};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Local,
    User,
}

impl Tier {
    pub fn heading(self) -> &'static str {
        match self {
            Tier::Local => "Local",
            Tier::User => "User",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ProfileEntry {
    pub name: String,
    pub tier: Tier,
    pub path: PathBuf,
}

/// Enumerates profile documents in the local and user directories.
#[derive(Debug, Clone)]
pub struct ProfileLocator {
    paths: AppPaths,
}

impl ProfileLocator {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    /// Configured tiers in precedence order.
    pub fn tiers(&self) -> Vec<(Tier, &Path)> {
        let mut tiers = vec![(Tier::Local, self.paths.local_dir())];
        if let Some(user_dir) = self.paths.user_dir() {
            tiers.push((Tier::User, user_dir));
        }
        tiers
    }

    pub fn has_tier(&self, tier: Tier) -> bool {
        self.tiers().iter().any(|(candidate, _)| *candidate == tier)
    }

    pub fn scan(&self, tier: Tier) -> AppResult<Vec<ProfileEntry>> {
        match self.tiers().into_iter().find(|(candidate, _)| *candidate == tier) {
            Some((_, dir)) => scan_dir(dir, tier),
            None => Ok(Vec::new()),
        }
    }
}

fn scan_dir(dir: &Path, tier: Tier) -> AppResult<Vec<ProfileEntry>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), ?tier, "profile directory missing");
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for item in fs::read_dir(dir)? {
        let item = item?;
        let path = item.path();
        if !path.is_file() {
            continue;
        }

        let file_name = item.file_name();
        let Some(name) = file_name.to_str().and_then(profile_name) else {
            continue;
        };

        entries.push(ProfileEntry {
            name: name.to_string(),
            tier,
            path,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), ?tier, count = entries.len(), "scanned profile directory");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_only_yaml_files() {
        let root = tempfile::tempdir().unwrap();
        let local = root.path().join(".edk");
        fs::create_dir_all(local.join("nested.yaml")).unwrap();
        fs::write(local.join("b.yaml"), "").unwrap();
        fs::write(local.join("a.yaml"), "").unwrap();
        fs::write(local.join("notes.txt"), "").unwrap();
        fs::write(local.join("old.yml"), "").unwrap();

        let locator = ProfileLocator::new(AppPaths::new(root.path().to_path_buf(), None));
        let names: Vec<_> = locator
            .scan(Tier::Local)
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let locator = ProfileLocator::new(AppPaths::new(
            root.path().to_path_buf(),
            Some(root.path().join("config")),
        ));
        assert!(locator.scan(Tier::Local).unwrap().is_empty());
        assert!(locator.scan(Tier::User).unwrap().is_empty());
    }

    #[test]
    fn user_tier_is_optional() {
        let root = tempfile::tempdir().unwrap();
        let locator = ProfileLocator::new(AppPaths::new(root.path().to_path_buf(), None));
        assert!(!locator.has_tier(Tier::User));
        assert_eq!(locator.tiers().len(), 1);
    }
}
