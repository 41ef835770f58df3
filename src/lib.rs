//! # rosas-ui
//!
//! Leptos + WASM page chrome for the documentation site: a light/dark theme
//! toggle and a single auto-dismissing toast.
//!
//! The host page mounts the widgets explicitly (`mountBody()` from JS, or
//! `app::mount` from Rust) and raises toasts through the returned handle.
//! Browser access is gated behind the `csr` feature; everything else builds
//! and tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and mount entry points |
//! | [`components`] | Theme toggle and toast display |
//! | [`controller`] | Toast controller owning state and the dismiss timer |
//! | [`state`] | Plain theme and toast state |
//! | [`util`] | Timers and CSS custom property writes |
//! | [`config`] | Host-supplied widget configuration |
//! | [`error`] | Mount and browser errors |

pub mod app;
#[cfg(feature = "csr")]
pub mod bindings;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod util;
