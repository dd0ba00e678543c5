// ABOUTME: Interactive prompts for missing SCM credentials.
// ABOUTME: Reads plain fields from stdin and the password without echo.

use crate::error::Result;
use std::io::{self, IsTerminal, Write};

pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt without echo when attached to a terminal. When stdin is piped
/// (tests, scripting) there is nothing to suppress, so read a plain line.
pub fn read_password(prompt: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        Ok(rpassword::prompt_password(prompt)?)
    } else {
        read_line(prompt)
    }
}
