pub mod command;
pub mod runner;

pub use command::CmakeCommand;
pub use runner::run;
