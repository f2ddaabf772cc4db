use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("MediaWiki API error: {message}")]
    Api { message: String },

    #[error("No wikitable elements found; the page layout may have changed")]
    NoTables,

    #[error("Extracted 0 patch rows; the table format may have changed")]
    NoRows,
}

pub type Result<T> = std::result::Result<T, TimelineError>;
