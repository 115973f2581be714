use dialoguer::{Confirm, theme::ColorfulTheme};
use std::path::Path;

/// Abstraction over a boolean (yes/no) confirmation prompt.
///
/// Lets the confirmation step be mocked in tests.
pub trait ConfirmPrompter {
    /// Prompt the user for a yes/no confirmation.
    ///
    /// # Returns
    /// `Ok(true)` if confirmed, `Ok(false)` if declined, or `Err(String)` on input failure.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String>;
}

/// `ConfirmPrompter` backed by `dialoguer::Confirm` with `ColorfulTheme`.
pub struct DialoguerConfirmPrompter;

impl ConfirmPrompter for DialoguerConfirmPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
        let theme = ColorfulTheme::default();
        let confirm = Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default);
        match confirm.interact() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Ask the user to confirm rewriting files under `root`. Defaults to yes.
pub fn confirm_start<P: ConfirmPrompter>(prompter: &mut P, root: &Path) -> Result<bool, String> {
    let prompt = format!("Rewrite brand names under {} now?", root.display());
    prompter.confirm(&prompt, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockConfirmPrompter {
        pub response: Result<bool, String>,
        pub expected_prompt: String,
        pub expected_default: bool,
    }

    impl ConfirmPrompter for MockConfirmPrompter {
        fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
            assert_eq!(prompt, self.expected_prompt);
            assert_eq!(default, self.expected_default);
            self.response.clone()
        }
    }

    fn mock(response: Result<bool, String>) -> MockConfirmPrompter {
        MockConfirmPrompter {
            response,
            expected_prompt: "Rewrite brand names under /srv/app now?".to_string(),
            expected_default: true,
        }
    }

    #[test]
    fn test_confirm_start_true() {
        let mut prompter = mock(Ok(true));
        let result = confirm_start(&mut prompter, Path::new("/srv/app"));
        assert_eq!(result.unwrap(), true);
    }

    #[test]
    fn test_confirm_start_false() {
        let mut prompter = mock(Ok(false));
        let result = confirm_start(&mut prompter, Path::new("/srv/app"));
        assert_eq!(result.unwrap(), false);
    }

    #[test]
    fn test_confirm_start_error() {
        let mut prompter = mock(Err("confirm failed".to_string()));
        let result = confirm_start(&mut prompter, Path::new("/srv/app"));
        assert!(result.is_err());
    }
}
