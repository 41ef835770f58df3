//! JavaScript surface exported through `wasm-bindgen`.
//!
//! The page calls `mountBody()` (or `mount(root)`) once and keeps the returned
//! `Rosas` handle; toasts are raised through that handle instead of globals.

use wasm_bindgen::prelude::*;

use crate::config::WidgetConfig;
use crate::controller::ToastController;
use crate::error::{ErrorCode, UiError};
use crate::state::toast::ToastStatus;

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized when mounted more than once.
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
}

fn to_js_error(err: UiError) -> JsError {
    JsError::new(&format!("{}: {err}", err.error_code()))
}

fn parse_config(config_json: Option<String>) -> Result<WidgetConfig, JsError> {
    WidgetConfig::from_json(config_json.as_deref().unwrap_or_default()).map_err(to_js_error)
}

/// Handle to the mounted widgets.
#[wasm_bindgen]
pub struct Rosas {
    toasts: ToastController,
}

#[wasm_bindgen]
impl Rosas {
    /// Show `message`; `status` defaults to `"default"`. Both `undefined` and
    /// `null` count as missing, so `toast(m, null)` renders `default-toast`.
    pub fn toast(&self, message: &str, status: Option<String>) {
        self.toasts.toast(message, ToastStatus::from_optional(status.as_deref()));
    }

    #[wasm_bindgen(js_name = showInformationToast)]
    pub fn show_information_toast(&self, message: &str) {
        self.toasts.show_information_toast(message);
    }

    #[wasm_bindgen(js_name = showSuccessToast)]
    pub fn show_success_toast(&self, message: &str) {
        self.toasts.show_success_toast(message);
    }

    #[wasm_bindgen(js_name = showWarningToast)]
    pub fn show_warning_toast(&self, message: &str) {
        self.toasts.show_warning_toast(message);
    }

    #[wasm_bindgen(js_name = showErrorToast)]
    pub fn show_error_toast(&self, message: &str) {
        self.toasts.show_error_toast(message);
    }

    pub fn close(&self) {
        self.toasts.close();
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.toasts.is_visible()
    }
}

/// Mount the widgets under `root`. `config_json` is an optional JSON object.
#[wasm_bindgen]
pub fn mount(root: web_sys::HtmlElement, config_json: Option<String>) -> Result<Rosas, JsError> {
    init_logging();
    let config = parse_config(config_json)?;
    let toasts = crate::app::mount(root, config).map_err(to_js_error)?;
    Ok(Rosas { toasts })
}

/// Mount the widgets under `document.body`.
#[wasm_bindgen(js_name = mountBody)]
pub fn mount_body(config_json: Option<String>) -> Result<Rosas, JsError> {
    init_logging();
    let config = parse_config(config_json)?;
    let toasts = crate::app::mount_body(config).map_err(to_js_error)?;
    Ok(Rosas { toasts })
}
