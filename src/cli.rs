use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "edk",
    version,
    about = "Resolve SDK profiles and run CMake with them"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List profiles from the local and user directories.
    List,
    /// Print a profile document verbatim.
    Show(ShowArgs),
    /// Configure the current directory with CMake using a profile.
    Cmake(CmakeArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Profile name")]
    pub sdk: String,
}

#[derive(Debug, Args)]
pub struct CmakeArgs {
    #[arg(help = "Profile name")]
    pub sdk: String,
    #[arg(long, help = "Print the command without running it")]
    pub dry_run: bool,
    #[arg(last = true, help = "Extra arguments passed to cmake")]
    pub extra: Vec<String>,
}
