use std::io::IsTerminal;

use anyhow::{Result, bail};
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

/// Whether we can ask the user anything.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Use the flag value if given, otherwise ask for it.
pub fn text_or_prompt(value: Option<String>, label: &str, flag: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }

    if !is_interactive() {
        bail!("Missing required --{}", flag);
    }

    let input: String = Input::new()
        .with_prompt(format!("  {}", label))
        .interact_text()?;
    Ok(input)
}

/// Like [`text_or_prompt`] but keeps asking until `check` accepts the input.
pub fn checked_or_prompt<F>(value: Option<String>, label: &str, flag: &str, check: F) -> Result<String>
where
    F: Fn(&str) -> Result<()>,
{
    if let Some(v) = value {
        return Ok(v);
    }

    if !is_interactive() {
        bail!("Missing required --{}", flag);
    }

    loop {
        let input: String = Input::new()
            .with_prompt(format!("  {}", label))
            .interact_text()?;
        match check(&input) {
            Ok(()) => return Ok(input),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Use the flag value if given, otherwise pick one of `options`.
///
/// Falls back to free text when there is nothing to pick from.
pub fn choice_or_prompt(
    value: Option<String>,
    label: &str,
    flag: &str,
    options: &[String],
) -> Result<String> {
    if value.is_some() || options.is_empty() {
        return text_or_prompt(value, label, flag);
    }

    if !is_interactive() {
        bail!("Missing required --{}", flag);
    }

    let selection = Select::new()
        .with_prompt(format!("  {}", label))
        .items(options)
        .default(0)
        .interact()?;
    Ok(options[selection].clone())
}

/// Optional text; empty input means "skip".
pub fn optional_or_prompt(value: Option<String>, label: &str, ask: bool) -> Result<Option<String>> {
    if value.is_some() || !ask {
        return Ok(value);
    }

    let input: String = Input::new()
        .with_prompt(format!("  {} (skip)", label))
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(if input.is_empty() { None } else { Some(input) })
}

pub fn confirm(prompt: &str) -> Result<bool> {
    if !is_interactive() {
        return Ok(false);
    }

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
