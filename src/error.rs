use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Fatal configuration problem, reported before any network activity.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("fetch failed for {url} after {attempts} attempt(s): {reason}")]
    Fetch {
        url: String,
        attempts: u32,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl ScrapeError {
    pub fn config(msg: impl Into<String>) -> Self {
        ScrapeError::Config(msg.into())
    }

    pub fn fetch_error(url: &str, attempts: u32, reason: &str) -> Self {
        ScrapeError::Fetch {
            url: url.to_string(),
            attempts,
            reason: reason.to_string(),
        }
    }

    /// True for errors the CLI should report as configuration problems.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ScrapeError::Config(_) | ScrapeError::InvalidUrl(_) | ScrapeError::UnsupportedFormat(_)
        )
    }
}
