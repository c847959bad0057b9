pub mod paths;
pub mod profile;

pub use paths::AppPaths;
pub use profile::{profile_name, resolve_profile};
