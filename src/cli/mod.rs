//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::config::{defaults, http};

/// Backup UI helpers CLI
#[derive(Parser, Debug)]
#[command(name = "backup-ui")]
#[command(version)]
#[command(about = "UI helpers for the Google Sheets backup service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Never prompt; confirmations are declined and the spinner stays hidden
    #[arg(long, global = true, env = defaults::BATCH_ENV)]
    pub batch: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL, env = defaults::LOG_ENV)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format byte counts (e.g. 1536 -> 1.5 КБ)
    Size {
        /// Byte counts
        #[arg(required = true)]
        bytes: Vec<u64>,
    },

    /// Format a timestamp in local time
    Date {
        /// ISO 8601 timestamp or date; prints Н/Д when omitted
        value: Option<String>,
    },

    /// Ask for confirmation; exits non-zero when declined
    Confirm {
        /// Prompt text
        message: String,
    },

    /// GET an API path, reporting failures like the web UI does
    Fetch {
        /// Path below the API root, or an absolute URL
        path: String,

        /// API root URL
        #[arg(long, env = http::API_URL_ENV, default_value = http::API_URL)]
        api_url: String,

        /// Message shown when the error response has no detail
        #[arg(short, long)]
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["backup-ui", "date"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        match cli.command {
            Command::Date { value } => assert!(value.is_none()),
            _ => panic!("Expected Command::Date"),
        }
    }

    #[test]
    fn test_cli_size_multiple() {
        let cli = Cli::parse_from(["backup-ui", "size", "0", "1024", "1536"]);
        match cli.command {
            Command::Size { bytes } => assert_eq!(bytes, vec![0, 1024, 1536]),
            _ => panic!("Expected Command::Size"),
        }
    }

    #[test]
    fn test_cli_size_rejects_negative() {
        assert!(Cli::try_parse_from(["backup-ui", "size", "-5"]).is_err());
    }

    #[test]
    fn test_cli_size_requires_value() {
        assert!(Cli::try_parse_from(["backup-ui", "size"]).is_err());
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["backup-ui", "confirm", "Удалить?", "--batch", "-l", "debug"]);
        assert!(cli.batch);
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Command::Confirm { message } => assert_eq!(message, "Удалить?"),
            _ => panic!("Expected Command::Confirm"),
        }
    }

    #[test]
    fn test_cli_fetch_options() {
        let cli = Cli::parse_from([
            "backup-ui",
            "fetch",
            "/backups",
            "--api-url",
            "http://backup.local/api/v1",
            "-m",
            "Не удалось загрузить список",
        ]);
        match cli.command {
            Command::Fetch {
                path,
                api_url,
                message,
            } => {
                assert_eq!(path, "/backups");
                assert_eq!(api_url, "http://backup.local/api/v1");
                assert_eq!(message.as_deref(), Some("Не удалось загрузить список"));
            }
            _ => panic!("Expected Command::Fetch"),
        }
    }
}
