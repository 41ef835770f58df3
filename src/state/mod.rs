//! Presentation state for the page widgets.
//!
//! DESIGN
//! ======
//! State types are plain data with no browser dependency so the toggle and
//! toast rules can be tested natively.

pub mod theme;
pub mod toast;
