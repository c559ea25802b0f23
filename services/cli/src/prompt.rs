use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use sorting_hat::quiz::{PromptError, Respondent};

/// Arrow-key selection list on the controlling terminal. Esc or `q` cancels.
pub(crate) struct TerminalRespondent {
    theme: ColorfulTheme,
}

impl Default for TerminalRespondent {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Respondent for TerminalRespondent {
    fn choose(&mut self, prompt: &str, choices: &[String]) -> Result<Option<usize>, PromptError> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact_opt()
            .map_err(|err| PromptError::Terminal(err.to_string()))?;

        if selection.is_some() {
            println!();
        }

        Ok(selection)
    }
}
