use crate::error::{InstallerError, Result};
use inquire::{Confirm, Text};
use std::io::IsTerminal;

pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Operator input used by the installer: free-text answers and yes/no confirmations.
pub trait Prompter {
    /// Reads one line. `default` is offered to the operator and returned for an empty answer.
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by `inquire`.
pub struct InquirePrompter {
    interactive: bool,
}

impl InquirePrompter {
    pub fn new() -> Self {
        Self {
            interactive: is_interactive(),
        }
    }

    fn ensure_interactive(&self, message: &str) -> Result<()> {
        if self.interactive {
            Ok(())
        } else {
            Err(InstallerError::NotInteractive {
                what: message.to_string(),
            })
        }
    }
}

impl Default for InquirePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        self.ensure_interactive(message)?;
        let mut prompt = Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        Ok(prompt.prompt()?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.ensure_interactive(message)?;
        Ok(Confirm::new(message).with_default(default).prompt()?)
    }
}
