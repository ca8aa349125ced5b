use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use crate::error::{CommandError, Result};

/// Interactive input primitives
pub trait Prompter {
    fn confirm(&mut self, question: &str) -> Result<bool>;

    fn ask(&mut self, question: &str) -> Result<String>;

    fn secret(&mut self, question: &str) -> Result<String>;

    fn choice(&mut self, question: &str, choices: &[String]) -> Result<String>;
}

/// Prompter reading from the terminal with dialoguer
pub struct DialogPrompter {
    theme: ColorfulTheme,
}

impl DialogPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialogPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialogPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(false)
            .interact()?;
        Ok(answer)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn secret(&mut self, question: &str) -> Result<String> {
        let answer = Password::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty_password(true)
            .interact()?;
        Ok(answer)
    }

    fn choice(&mut self, question: &str, choices: &[String]) -> Result<String> {
        if choices.is_empty() {
            return Err(CommandError::Prompt(format!(
                "No choices available for '{}'",
                question
            )));
        }

        let index = Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(choices)
            .default(0)
            .interact()?;
        Ok(choices[index].clone())
    }
}
