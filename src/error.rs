//! Application error types.
//!
//! [`AppError`] covers every failure a single request or file operation can
//! produce. [`SearchError`] is the user-facing result of a search: only the
//! primary lookup can fail a search, everything after it degrades instead.

use thiserror::Error;

/// Application-level errors for dexcard.
#[derive(Error, Debug)]
pub enum AppError {
    // Transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    // Local data errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Returns true if the upstream answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Status { status: 404, .. })
    }
}

/// Message shown when the primary lookup fails.
pub const NOT_FOUND_MESSAGE: &str = "포켓몬을 찾을 수 없습니다.";

/// Guidance appended to the not-found message.
pub const NOT_FOUND_GUIDANCE: &str =
    "포켓몬 이름(한글/영어)이나 번호를 정확히 입력했는지 확인해주세요.";

/// Hint shown when the search term is blank.
pub const EMPTY_TERM_GUIDANCE: &str = "포켓몬 이름(한글/영어)이나 번호를 입력해주세요.";

/// Fatal search failures.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("검색어를 입력해주세요.")]
    EmptyTerm,

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound {
        term: String,
        #[source]
        source: AppError,
    },
}

impl SearchError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::EmptyTerm => "EMPTY_TERM",
            SearchError::NotFound { .. } => "NOT_FOUND",
        }
    }

    /// Follow-up hint for the user.
    pub fn guidance(&self) -> &'static str {
        match self {
            SearchError::EmptyTerm => EMPTY_TERM_GUIDANCE,
            SearchError::NotFound { .. } => NOT_FOUND_GUIDANCE,
        }
    }
}
