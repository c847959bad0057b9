pub mod document;
pub mod locator;
pub mod store;

pub use document::{CmakeSettings, ProfileDocument};
pub use locator::{ProfileEntry, ProfileLocator, Tier};
pub use store::{ProfileListing, ProfileStore, ShownProfile};
