//! UI utilities for terminal output
//!
//! This module provides the dialog service, confirmation prompts for
//! destructive actions and the loading spinner overlay.

mod confirm;
pub(crate) mod dialogs;
mod spinner;

pub use confirm::{confirm_click, ClickOutcome, Control};
pub use dialogs::{dialogs_for, BatchDialogs, Dialogs, TerminalDialogs};
pub use spinner::SpinnerOverlay;
