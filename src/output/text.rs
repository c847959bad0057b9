use std::io::{self, Write};

use crate::error::AppResult;

pub fn print_lines(lines: &[String]) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Writes `bytes` exactly as given, without a trailing newline.
pub fn print_raw(bytes: &[u8]) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}
