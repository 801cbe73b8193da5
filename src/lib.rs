//! backup-ui - UI helpers for the Google Sheets backup service
//!
//! Small conveniences shared by the service's front ends.
//!
//! # Features
//!
//! - Loading spinner overlay, created once and toggled afterwards
//! - Confirmation prompts in front of destructive actions
//! - User-facing reporting of API errors (`detail` field or a default)
//! - ru-RU formatting of timestamps and byte sizes
//!
//! # Example
//!
//! ```bash
//! # Byte sizes
//! backup-ui size 1536
//!
//! # Timestamps
//! backup-ui date 2024-01-05T10:30:00Z
//!
//! # Ask before deleting (exit code 1 when declined)
//! backup-ui confirm "Удалить резервную копию?"
//!
//! # Fetch from the API, showing the spinner and reporting errors
//! backup-ui fetch /backups --api-url http://localhost:8000/api/v1
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod page;
pub mod ui;

pub use api::{handle_api_error, ApiClient, ApiError};
pub use cli::{Cli, Command};
pub use commands::run_command;
pub use error::{Result, UiError};
pub use format::{format_date_time, format_date_time_in, format_file_size};
pub use page::Page;
pub use ui::{
    dialogs_for, BatchDialogs, ClickOutcome, Control, Dialogs, SpinnerOverlay, TerminalDialogs,
};
