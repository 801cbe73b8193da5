//! Command handlers for the CLI

use log::{debug, info};
use std::process::ExitCode;

use crate::api::ApiClient;
use crate::format::{format_date_time, format_file_size};
use crate::ui::{ClickOutcome, Control};
use crate::{Command, Page};

/// Id of the control the `confirm` command clicks
const CONFIRM_CONTROL_ID: &str = "cli-confirm";

/// Dispatch a parsed command against an initialised page
pub async fn run_command(
    page: &mut Page,
    command: &Command,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Command::Size { bytes } => {
            for line in size_lines(bytes) {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Date { value } => {
            println!("{}", format_date_time(value.as_deref()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Confirm { message } => Ok(exit_code(run_confirm_command(page, message))),
        Command::Fetch {
            path,
            api_url,
            message,
        } => {
            let fetched = run_fetch_command(page, api_url, path, message.as_deref()).await?;
            Ok(exit_code(fetched))
        }
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn size_lines(bytes: &[u64]) -> Vec<String> {
    bytes.iter().map(|b| format_file_size(Some(*b))).collect()
}

/// Returns whether the user confirmed
fn run_confirm_command(page: &mut Page, message: &str) -> bool {
    page.register(Control::new(CONFIRM_CONTROL_ID).with_confirm(message));

    match page.click(CONFIRM_CONTROL_ID, || println!("confirmed")) {
        ClickOutcome::Proceeded(()) => true,
        ClickOutcome::Cancelled => {
            eprintln!("cancelled");
            false
        }
    }
}

async fn run_fetch_command(
    page: &Page,
    api_url: &str,
    path: &str,
    default_message: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let client = ApiClient::new(api_url)?;

    page.show_spinner(true);
    let result = client.get_json(path).await;
    page.show_spinner(false);

    match result {
        Ok(value) => {
            debug!("Fetched {}", client.url(path));
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(true)
        }
        Err(e) => {
            if let Some(pending) = page.handle_api_error(e, default_message) {
                pending.await?;
            }
            info!("Fetch of '{}' failed", path);
            Ok(false)
        }
    }
}
