use std::path::PathBuf;

use serde::Serialize;

use crate::cli::ShowArgs;
use crate::config;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{OutputMode, text};
use crate::profile::{ShownProfile, Tier};

/// JSON view of a shown profile.
#[derive(Debug, Serialize)]
pub struct ShownDocument {
    pub name: String,
    pub tier: Tier,
    pub path: PathBuf,
    pub content: String,
}

impl ShownDocument {
    /// Fails on content that is not UTF-8 instead of replacing bytes.
    pub fn from_shown(shown: ShownProfile) -> AppResult<Self> {
        let ShownProfile { entry, content } = shown;
        let content = String::from_utf8(content).map_err(|_| AppError::InvalidProfile {
            path: entry.path.clone(),
            reason: "content is not valid UTF-8".to_string(),
        })?;

        Ok(Self {
            name: entry.name,
            tier: entry.tier,
            path: entry.path,
            content,
        })
    }
}

pub fn run(ctx: &AppContext, args: ShowArgs) -> AppResult<()> {
    let name = config::resolve_profile(&args.sdk)?;
    let shown = ctx.store.show(&name)?;

    if ctx.output.mode() == OutputMode::Text {
        return text::print_raw(&shown.content);
    }

    let document = ShownDocument::from_shown(shown)?;
    ctx.output.emit(&[], &document)
}
