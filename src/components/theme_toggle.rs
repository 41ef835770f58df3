//! Light/dark theme toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::theme::{Theme, ThemeState};
use crate::util::css_vars;

/// Flip `state` and write the new palette. The flip happens even if the
/// style write fails, so the next click still alternates.
pub fn toggle_theme(state: &mut ThemeState, config: &WidgetConfig) -> Theme {
    let next = state.toggle();
    match css_vars::apply(next.palette(config)) {
        Ok(()) => log::debug!("theme switched to {next:?}"),
        Err(err) => log::warn!("theme switch to {next:?} not applied: {err}"),
    }
    next
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let theme = RwSignal::new(ThemeState::default());

    let on_click = move |_| {
        let mut state = theme.get_untracked();
        config.with_value(|cfg| toggle_theme(&mut state, cfg));
        theme.set(state);
    };

    view! { <div class="theme-toggle" id="theme-toggle" on:click=on_click></div> }
}
