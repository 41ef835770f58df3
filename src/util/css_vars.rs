//! Writes theme palettes to the document's CSS custom properties.
//!
//! Properties are set inline on `<html>` so every rule reading `--color` or
//! `--background-color` picks them up. Requires a browser environment; native
//! builds record nothing and succeed.

#[cfg(test)]
#[path = "css_vars_test.rs"]
mod css_vars_test;

use crate::error::UiError;
use crate::state::theme::ThemePalette;

/// Apply both palette properties to `document.documentElement`.
pub fn apply(palette: &ThemePalette) -> Result<(), UiError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        let root = document
            .document_element()
            .ok_or(UiError::NoDocumentElement)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| UiError::NoDocumentElement)?;
        let style = root.style();
        for (property, value) in palette.properties() {
            style
                .set_property(property, value)
                .map_err(|err| UiError::Style { property: property.to_owned(), message: format!("{err:?}") })?;
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no browser, skipped {} theme properties", palette.properties().len());
        Ok(())
    }
}
