use std::path::PathBuf;

use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::{ProfileEntry, ProfileListing, Tier};

#[derive(Debug, Serialize)]
struct ListedProfile {
    name: String,
    tier: Tier,
    path: PathBuf,
    shadowed: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let listing = ctx.store.list()?;
    let profiles: Vec<ListedProfile> = listing
        .entries()
        .map(|entry| ListedProfile {
            name: entry.name.clone(),
            tier: entry.tier,
            path: entry.path.clone(),
            shadowed: listing.is_shadowed(entry),
        })
        .collect();

    ctx.output.emit(&format_listing(&listing), &profiles)
}

fn format_listing(listing: &ProfileListing) -> Vec<String> {
    let mut lines = Vec::new();
    push_tier(&mut lines, listing, Tier::Local, &listing.local);
    if let Some(user) = &listing.user {
        push_tier(&mut lines, listing, Tier::User, user);
    }
    lines
}

fn push_tier(
    lines: &mut Vec<String>,
    listing: &ProfileListing,
    tier: Tier,
    entries: &[ProfileEntry],
) {
    lines.push(format!("{}:", tier.heading()));
    for entry in entries {
        if listing.is_shadowed(entry) {
            lines.push(format!("  {} (shadowed by local)", entry.name));
        } else {
            lines.push(format!("  {}", entry.name));
        }
    }
}
