use std::process::ExitStatus;

use tokio::process::Command;

use crate::error::AppResult;

use super::CmakeCommand;

/// Runs cmake with the inherited environment overlaid by the profile's `env`
/// entries and returns the child's exit code.
pub async fn run(command: &CmakeCommand) -> AppResult<i32> {
    let args = command.args();
    tracing::debug!(
        program = %command.program,
        ?args,
        overlay = command.env.len(),
        "spawning cmake"
    );

    let code = spawn(&command.program, &args, &command.env).await?;
    tracing::info!(code, "cmake exited");
    Ok(code)
}

async fn spawn(program: &str, args: &[String], env: &[(String, String)]) -> AppResult<i32> {
    let status = Command::new(program)
        .args(args)
        .envs(env.iter().map(|(key, value)| (key, value)))
        .status()
        .await?;

    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
