//! Interactive prompts for credentials

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Prompt on stderr and read one line from stdin
///
/// Input is echoed; pass --password to skip the prompt in scripts.
pub fn read_line(prompt: &str) -> Result<String> {
    eprint!("{}", prompt);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Resolve a password given on the command line, or prompt once
pub fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => read_line("Password: "),
    }
}

/// Resolve a password given on the command line, or prompt twice and
/// return both attempts for the signup confirmation check
pub fn password_or_prompt_twice(password: Option<String>) -> Result<(String, String)> {
    match password {
        Some(p) => Ok((p.clone(), p)),
        None => {
            let first = read_line("Password: ")?;
            let second = read_line("Confirm password: ")?;
            Ok((first, second))
        }
    }
}
