//! Browser helpers kept apart from widget logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Timer and style access live here so the controller and components can be
//! exercised natively with test doubles.

pub mod css_vars;
#[cfg(test)]
pub mod manual_scheduler;
pub mod schedule;
