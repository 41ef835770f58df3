//! Error types for mounting and driving the page widgets.
//!
//! Only `mount` surfaces errors to the caller. Once the widgets exist,
//! browser failures (style writes, timer scheduling) are logged and absorbed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Grepable error code for errors crossing the JS boundary.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("document has no body")]
    NoBody,
    #[error("failed to set style property {property}: {message}")]
    Style { property: String, message: String },
    #[error("failed to schedule timer: {0}")]
    Schedule(String),
    #[error("invalid widget config: {0}")]
    Config(String),
}

impl ErrorCode for UiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::NoDocumentElement => "E_NO_DOCUMENT_ELEMENT",
            Self::NoBody => "E_NO_BODY",
            Self::Style { .. } => "E_STYLE",
            Self::Schedule(_) => "E_SCHEDULE",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
