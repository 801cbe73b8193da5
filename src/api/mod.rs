//! Backend API access and error reporting

mod client;
mod error;

pub use client::ApiClient;
pub use error::{handle_api_error, message_from_response, ApiError};
