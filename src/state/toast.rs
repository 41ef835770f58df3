//! Toast display state and severity classes.
//!
//! The visible state of the toast is fully described by its CSS class and its
//! text. There is no queue: showing a toast replaces whatever is on screen.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;

pub const HIDDEN_CLASS: &str = "toast hidden-toast";

/// Toast severity. Any unrecognized status is kept verbatim in `Custom` and
/// rendered as `{raw}-toast`, which the stylesheet simply does not style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ToastStatus {
    #[default]
    Default,
    Information,
    Success,
    Warning,
    Error,
    Custom(String),
}

impl ToastStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "default" => Self::Default,
            "information" => Self::Information,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            other => Self::Custom(other.to_owned()),
        }
    }

    /// Status for an optional argument: absent means `Default`. JS `null` and
    /// `undefined` both arrive as `None`, so a literal `"null"` status must be
    /// passed as a string.
    #[must_use]
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map_or(Self::Default, Self::parse)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Information => "information",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Custom(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for ToastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ToastStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// What the toast surface currently shows. `status == None` means hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub status: Option<ToastStatus>,
    pub message: String,
}

impl ToastState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.status.is_some()
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        match &self.status {
            Some(status) => format!("toast {status}-toast"),
            None => HIDDEN_CLASS.to_owned(),
        }
    }

    pub fn show(&mut self, message: &str, status: ToastStatus) {
        self.status = Some(status);
        message.clone_into(&mut self.message);
    }

    /// Hide the toast. The last message text is left in place, matching what
    /// the span keeps once its container is hidden.
    pub fn hide(&mut self) {
        self.status = None;
    }
}
