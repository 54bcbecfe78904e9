//! Modal frame container (overlay + positioned surface).

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus surface. Renders no header or buttons of its own; the
/// hosted screen brings its own chrome so it looks the same in a modal and
/// in a tab.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click, Escape via host).
    on_close: Callback<()>,
    /// z-index for overlay stacking (default 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra style for the modal surface.
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release landed on the overlay itself, so
    // selecting text inside the modal and releasing outside does not close.
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer to the next tick: removing the overlay synchronously
            // during its own click dispatch drops a live handler.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_style = move || {
        let extra = modal_style.clone().unwrap_or_default();
        if extra.is_empty() {
            "position: relative;".to_string()
        } else {
            format!("position: relative; {extra}")
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=move || format!("z-index: {z_index};")
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div class="modal" style=surface_style on:click=move |ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
