//! Locale-aware formatting of dates and byte sizes

mod datetime;
mod size;

pub use datetime::{format_date_time, format_date_time_in};
pub use size::format_file_size;
