use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

/// Dispatches the parsed command line and returns the process exit code.
pub async fn run(cli: Cli) -> AppResult<i32> {
    let Cli {
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(json)?;

    match command {
        Command::List => commands::list::run(&ctx).map(|()| 0),
        Command::Show(args) => commands::show::run(&ctx, args).map(|()| 0),
        Command::Cmake(args) => commands::cmake::run(&ctx, args).await,
    }
}
