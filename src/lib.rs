pub mod app;
pub mod cli;
pub mod cmake;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod profile;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<i32> {
    app::run(cli).await
}
