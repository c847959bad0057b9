use std::fs;

use crate::error::{AppError, AppResult};

use super::document::ProfileDocument;
use super::locator::{ProfileEntry, ProfileLocator, Tier};

#[derive(Debug, Clone, Default)]
pub struct ProfileListing {
    pub local: Vec<ProfileEntry>,
    /// `None` when no user configuration directory could be determined.
    pub user: Option<Vec<ProfileEntry>>,
}

impl ProfileListing {
    /// A user profile is shadowed when a local profile has the same name.
    pub fn is_shadowed(&self, entry: &ProfileEntry) -> bool {
        entry.tier == Tier::User && self.local.iter().any(|local| local.name == entry.name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ProfileEntry> {
        self.local.iter().chain(self.user.iter().flatten())
    }
}

#[derive(Debug, Clone)]
pub struct ShownProfile {
    pub entry: ProfileEntry,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    locator: ProfileLocator,
}

impl ProfileStore {
    pub fn new(locator: ProfileLocator) -> Self {
        Self { locator }
    }

    pub fn list(&self) -> AppResult<ProfileListing> {
        let local = self.locator.scan(Tier::Local)?;
        let user = if self.locator.has_tier(Tier::User) {
            Some(self.locator.scan(Tier::User)?)
        } else {
            None
        };

        Ok(ProfileListing { local, user })
    }

    /// Finds `name`, checking the local tier before the user tier.
    pub fn resolve(&self, name: &str) -> AppResult<ProfileEntry> {
        for (tier, _) in self.locator.tiers() {
            if let Some(entry) = self
                .locator
                .scan(tier)?
                .into_iter()
                .find(|entry| entry.name == name)
            {
                tracing::info!(name, ?tier, path = %entry.path.display(), "resolved profile");
                return Ok(entry);
            }
        }

        Err(AppError::ProfileNotFound(name.to_string()))
    }

    pub fn show(&self, name: &str) -> AppResult<ShownProfile> {
        let entry = self.resolve(name)?;
        let content = fs::read(&entry.path)?;
        Ok(ShownProfile { entry, content })
    }

    pub fn load(&self, name: &str) -> AppResult<(ProfileEntry, ProfileDocument)> {
        let entry = self.resolve(name)?;
        let raw = fs::read_to_string(&entry.path)?;
        let document = ProfileDocument::parse(&entry.path, &raw)?;
        Ok((entry, document))
    }
}
