use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};

use super::THEME;

/// Interactive prompt collaborator.
///
/// Workflows talk to the terminal through this trait only, so they can
/// run against a scripted implementation in tests.
pub trait Prompt {
    /// Ask a yes/no question, blocking until the user answers.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Ask for a free-text value, blocking until the user answers.
    ///
    /// The answer cannot be empty, no other validation is performed.
    fn text(&mut self, message: &str) -> Result<String>;
}

/// Prompt over the controlling terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&*THEME)
            .with_prompt(message)
            .default(true)
            .report(false)
            .interact_opt()
            .context("cannot get confirmation from user")?;

        // Esc counts as a plain no.
        Ok(matches!(answer, Some(true)))
    }

    fn text(&mut self, message: &str) -> Result<String> {
        Input::with_theme(&*THEME)
            .with_prompt(message)
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("this cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact()
            .context("cannot get input from user")
    }
}
