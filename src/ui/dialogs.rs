//! Blocking dialog capabilities
//!
//! Everything that would pop up a modal goes through [`Dialogs`], so the
//! rest of the crate never talks to the terminal directly.

use dialoguer::{theme::ColorfulTheme, Confirm};
use log::{debug, warn};
use std::io::{self, Write};
use std::sync::Arc;

use crate::error::Result;

/// Modal dialog service
pub trait Dialogs: Send + Sync {
    /// Ask the user to accept or decline; blocks until answered
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge
    fn notify(&self, message: &str);
}

/// Interactive dialogs on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalDialogs;

impl TerminalDialogs {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, message: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(answer)
    }

    fn write_notice(&self, message: &str) -> Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "\x1b[1;31m{}\x1b[0m", message)?;
        stderr.flush()?;
        Ok(())
    }
}

impl Dialogs for TerminalDialogs {
    fn confirm(&self, message: &str) -> bool {
        match self.prompt(message) {
            Ok(answer) => {
                debug!("Confirmation '{}' answered: {}", message, answer);
                answer
            }
            Err(e) => {
                warn!("Confirmation prompt failed, treating as declined: {}", e);
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.write_notice(message) {
            warn!("Could not show notification '{}': {}", message, e);
        }
    }
}

/// Non-interactive dialogs for batch runs
///
/// Confirmations are always declined so nothing destructive happens
/// unattended.
#[derive(Debug, Default)]
pub struct BatchDialogs;

impl BatchDialogs {
    pub fn new() -> Self {
        Self
    }
}

impl Dialogs for BatchDialogs {
    fn confirm(&self, message: &str) -> bool {
        warn!("Batch mode: declining confirmation '{}'", message);
        false
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Select the dialog service for the run mode
pub fn dialogs_for(batch_mode: bool) -> Arc<dyn Dialogs> {
    if batch_mode {
        Arc::new(BatchDialogs::new())
    } else {
        Arc::new(TerminalDialogs::new())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Dialogs;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted dialogs that record every prompt
    #[derive(Default)]
    pub struct RecordingDialogs {
        answers: Mutex<VecDeque<bool>>,
        confirmations: Mutex<Vec<String>>,
        notifications: Mutex<Vec<String>>,
    }

    impl RecordingDialogs {
        pub fn answering(answers: &[bool]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().copied().collect()),
                ..Self::default()
            }
        }

        pub fn confirmations(&self) -> Vec<String> {
            self.confirmations.lock().unwrap().clone()
        }

        pub fn notifications(&self) -> Vec<String> {
            self.notifications.lock().unwrap().clone()
        }
    }

    impl Dialogs for RecordingDialogs {
        fn confirm(&self, message: &str) -> bool {
            self.confirmations.lock().unwrap().push(message.to_string());
            self.answers.lock().unwrap().pop_front().unwrap_or(false)
        }

        fn notify(&self, message: &str) {
            self.notifications.lock().unwrap().push(message.to_string());
        }
    }
}
