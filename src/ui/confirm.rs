//! User prompts for destructive operations and secret input

use dialoguer::{theme::ColorfulTheme, Confirm, Password};
use std::io::{self, BufRead, IsTerminal};

/// Ask the user to confirm an action; anything but an explicit yes declines
pub fn confirm_action(prompt: &str) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Read a secret value: hidden prompt on a terminal, first line of stdin otherwise
pub fn prompt_secret(prompt: &str) -> io::Result<String> {
    if io::stdin().is_terminal() {
        return Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()
            .map_err(io::Error::other);
    }

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(strip_line_ending(&input).to_string())
}

/// Drop a single trailing `\n` or `\r\n`
fn strip_line_ending(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
