//! Dialoguer-based implementations of prompt interfaces

use super::interface::{ConfirmationConfig, TextPromptConfig};
use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let input = Input::<String>::new().with_prompt(&config.prompt);

        let answer = match &config.required {
            Some(message) => input
                .validate_with(|value: &String| -> std::result::Result<(), String> {
                    if value.trim().is_empty() {
                        Err(message.clone())
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?,
            None => input.allow_empty(true).interact_text()?,
        };

        Ok(answer.trim().to_string())
    }
}

impl super::interface::ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}
