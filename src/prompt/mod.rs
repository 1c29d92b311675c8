//! Interactive collection of an application configuration
//!
//! - `interface`: UI-independent prompt traits
//! - `dialoguer`: Terminal implementation of those traits

pub mod dialoguer;
pub mod interface;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::{
    ConfirmationConfig, ConfirmationPrompter, PromptProvider, TextPromptConfig, TextPrompter,
};

use crate::{
    config::{parse_modules, AppConfig},
    constants::MANIFEST_FILENAME,
    error::Result,
};

fn ask_text(prompter: &dyn PromptProvider, prompt: &str, required: Option<&str>) -> Result<String> {
    prompter.prompt_text(&TextPromptConfig {
        prompt: prompt.to_string(),
        required: required.map(String::from),
    })
}

fn ask_yes_no(prompter: &dyn PromptProvider, prompt: &str, default: bool) -> Result<bool> {
    prompter.prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default })
}

/// Asks for every field of a new application configuration.
///
/// Database defaults to yes; cache, messaging and observability default to no.
pub fn collect_config(prompter: &dyn PromptProvider) -> Result<AppConfig> {
    let name = ask_text(
        prompter,
        "Enter the name of the application",
        Some("Application name is required."),
    )?;
    let package = ask_text(
        prompter,
        "Enter the application package",
        Some("Package name is required."),
    )?;
    let modules = ask_text(
        prompter,
        "Enter the application modules (comma-separated, no spaces)",
        None,
    )?;

    let config = AppConfig {
        modules: parse_modules(&modules),
        database: ask_yes_no(prompter, "Do you need a database?", true)?,
        cache: ask_yes_no(prompter, "Do you need a cache?", false)?,
        messaging: ask_yes_no(prompter, "Do you need messaging?", false)?,
        observability: ask_yes_no(prompter, "Do you need observability?", false)?,
        ..AppConfig::new(name, package)
    };
    config.validate()?;
    Ok(config)
}

/// Asks whether an existing manifest should be replaced. Defaults to yes.
pub fn confirm_overwrite(prompter: &dyn PromptProvider, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    ask_yes_no(prompter, &format!("Overwrite existing configuration ({MANIFEST_FILENAME})?"), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers and records the prompts it was asked.
    #[derive(Default)]
    struct ScriptedPrompter {
        texts: RefCell<VecDeque<String>>,
        confirms: RefCell<VecDeque<bool>>,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(texts: &[&str], confirms: &[bool]) -> Self {
            Self {
                texts: RefCell::new(texts.iter().map(|s| s.to_string()).collect()),
                confirms: RefCell::new(confirms.iter().copied().collect()),
                asked: RefCell::default(),
            }
        }
    }

    impl TextPrompter for ScriptedPrompter {
        fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
            self.asked.borrow_mut().push(config.prompt.clone());
            Ok(self.texts.borrow_mut().pop_front().expect("unexpected text prompt"))
        }
    }

    impl ConfirmationPrompter for ScriptedPrompter {
        fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
            self.asked.borrow_mut().push(config.prompt.clone());
            Ok(self.confirms.borrow_mut().pop_front().unwrap_or(config.default))
        }
    }

    #[test]
    fn collects_full_config() {
        let prompter = ScriptedPrompter::new(
            &["demo", "github.com/x/demo", "auth,billing"],
            &[true, false, true, true],
        );
        let config = collect_config(&prompter).unwrap();
        assert_eq!(config.name, "demo");
        assert_eq!(config.package, "github.com/x/demo");
        assert_eq!(config.modules, vec!["auth", "billing"]);
        assert!(config.database);
        assert!(!config.cache);
        assert!(config.messaging);
        assert!(config.observability);
        assert_eq!(config.version, crate::constants::EBRICK_VERSION);
        assert_eq!(prompter.asked.borrow().len(), 7);
    }

    #[test]
    fn flag_defaults_follow_the_prompts() {
        let prompter = ScriptedPrompter::new(&["demo", "github.com/x/demo", ""], &[]);
        let config = collect_config(&prompter).unwrap();
        assert!(config.modules.is_empty());
        assert!(config.database);
        assert!(!config.cache && !config.messaging && !config.observability);
    }

    #[test]
    fn module_with_inner_space_is_rejected() {
        let prompter = ScriptedPrompter::new(&["demo", "github.com/x/demo", "user auth"], &[]);
        assert!(matches!(collect_config(&prompter), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn overwrite_can_be_skipped() {
        let prompter = ScriptedPrompter::new(&[], &[false]);
        assert!(confirm_overwrite(&prompter, true).unwrap());
        assert!(prompter.asked.borrow().is_empty());
        assert!(!confirm_overwrite(&prompter, false).unwrap());
    }
}
