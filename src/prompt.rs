//! User Prompts
//!
//! Blocking yes/no confirmations and notifications.

/// Blocking dialogs shown to the user
pub trait UserPrompt {
    /// Ask a yes/no question; `true` means the user agreed
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

/// `window.confirm` / `window.alert`
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::UserPrompt;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers confirmations from a script (declining once it runs out)
    /// and records every message shown.
    #[derive(Default)]
    pub struct ScriptedPrompt {
        answers: RefCell<VecDeque<bool>>,
        pub confirms: RefCell<Vec<String>>,
        pub notices: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                ..Default::default()
            }
        }
    }

    impl UserPrompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }
}
