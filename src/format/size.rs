//! Human-readable byte sizes

use crate::config::size::{BASE, UNITS};

/// Format a byte count with base-1024 units (`Б`, `КБ`, `МБ`, `ГБ`, `ТБ`)
///
/// `None` and `0` both render as `0 Б`. The scaled value is rounded to two
/// decimals with trailing zeros dropped, so `1024` is `1 КБ` and `1536` is
/// `1.5 КБ`. Sizes past the largest unit stay in `ТБ`.
pub fn format_file_size(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        None | Some(0) => return format!("0 {}", UNITS[0]),
        Some(b) => b,
    };

    let exponent = unit_exponent(bytes);
    let scaled = bytes as f64 / BASE.powi(exponent as i32);

    format!("{} {}", round_two_places(scaled), UNITS[exponent])
}

/// floor(log1024(bytes)), clamped to the last unit
///
/// Computed on integers so exact powers of 1024 never land one unit low.
fn unit_exponent(bytes: u64) -> usize {
    let mut exponent = 0;
    let mut rest = bytes;
    while rest >= BASE as u64 && exponent < UNITS.len() - 1 {
        rest /= BASE as u64;
        exponent += 1;
    }
    exponent
}

/// Round half away from zero to two decimals; `Display` drops trailing zeros
fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
