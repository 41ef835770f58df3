//! Leptos components mounted onto the host page.

pub mod theme_toggle;
pub mod toast_display;
