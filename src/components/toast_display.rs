//! Toast notification surface with a close button.
//!
//! Class and text are driven by the `RwSignal<ToastState>` the controller's
//! listener writes to. The close button goes through the controller so the
//! pending dismiss is cancelled along with the hide.

use leptos::prelude::*;

use crate::controller::ToastController;
use crate::state::toast::ToastState;

#[component]
pub fn ToastDisplay() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let controller = expect_context::<StoredValue<ToastController, LocalStorage>>();

    let class = move || toast.with(ToastState::class_name);
    let text = move || toast.with(|t| t.message.clone());
    let on_close = move |_| controller.with_value(ToastController::close);

    view! {
        <div class=class id="toast-display">
            <span id="toast-text-span">{text}</span>
            <div class="toast-close-button" id="toast-close-button" on:click=on_close>
                "×"
            </div>
        </div>
    }
}
