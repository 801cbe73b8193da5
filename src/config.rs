/// User-facing labels (ru-RU)
pub mod labels {
    /// Placeholder for a missing date
    pub const NOT_AVAILABLE: &str = "Н/Д";

    /// Rendering of an unparseable date
    pub const INVALID_DATE: &str = "Invalid Date";

    /// Accessibility label shown next to the spinner
    pub const LOADING: &str = "Загрузка...";
}

/// Default user-facing messages
pub mod messages {
    /// Shown when an API error carries no usable detail
    pub const DEFAULT_API_ERROR: &str = "Произошла ошибка при выполнении запроса";
}

/// Byte size formatting
pub mod size {
    /// Unit base
    pub const BASE: f64 = 1024.0;

    /// Unit labels, smallest first
    pub const UNITS: &[&str] = &["Б", "КБ", "МБ", "ГБ", "ТБ"];
}

/// Date formatting
pub mod date {
    /// Short month names as rendered by ru-RU with a day present (genitive)
    pub const MONTHS_SHORT: [&str; 12] = [
        "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.",
        "нояб.", "дек.",
    ];
}

/// Markup contract shared with page stylesheets and templates
pub mod attributes {
    /// Attribute whose value is the confirmation prompt text
    pub const CONFIRM: &str = "data-confirm";

    /// Stable class name of the spinner overlay
    pub const SPINNER_CLASS: &str = "spinner-overlay";
}

/// HTTP client settings
pub mod http {
    /// Default backend API root
    pub const API_URL: &str = "http://localhost:8000/api/v1";

    /// Environment variable overriding the API root
    pub const API_URL_ENV: &str = "BACKUP_UI_API_URL";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable enabling batch mode
    pub const BATCH_ENV: &str = "BACKUP_UI_BATCH";

    /// Environment variable holding the log level
    pub const LOG_ENV: &str = "BACKUP_UI_LOG";
}
