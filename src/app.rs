//! Root widget component and the explicit mount entry point.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::{theme_toggle::ThemeToggle, toast_display::ToastDisplay};
use crate::config::WidgetConfig;
use crate::controller::ToastController;

/// Theme toggle and toast surface, in that document order.
///
/// Provides the config, the toast state signal, and the controller as
/// context for the child components.
#[component]
pub fn Widgets(config: WidgetConfig, controller: ToastController) -> impl IntoView {
    let toast = RwSignal::new(controller.state());
    controller.set_listener(move |state| toast.set(state.clone()));

    provide_context(StoredValue::new(config));
    provide_context(toast);
    provide_context(StoredValue::new_local(controller));

    view! {
        <ThemeToggle/>
        <ToastDisplay/>
    }
}

/// Mount both widgets under `root` and return the page's toast controller.
///
/// Call once, after `root` is attached to the document. The returned
/// controller is the handle the rest of the page uses to raise toasts.
#[cfg(feature = "csr")]
pub fn mount(root: web_sys::HtmlElement, config: WidgetConfig) -> Result<ToastController, crate::error::UiError> {
    use std::rc::Rc;

    use crate::util::schedule::BrowserScheduler;

    config.validate()?;
    let controller = ToastController::new(Rc::new(BrowserScheduler), config.dismiss_delay());
    let handle = controller.clone();
    leptos::mount::mount_to(root, move || view! { <Widgets config=config controller=handle/> }).forget();
    log::info!("page widgets mounted");
    Ok(controller)
}

/// Mount under `document.body`.
#[cfg(feature = "csr")]
pub fn mount_body(config: WidgetConfig) -> Result<ToastController, crate::error::UiError> {
    use crate::error::UiError;

    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoDocument)?;
    let body = document.body().ok_or(UiError::NoBody)?;
    mount(body, config)
}
