//! Request cancellation tied to component lifetime.
//!
//! A screen creates one `RequestScope` in its body; every read it issues
//! carries the scope's current `AbortSignal`. Starting a new read aborts
//! the previous one, and component cleanup aborts whatever is still in
//! flight, so a resolution can never land on unmounted state.

use leptos::prelude::*;
use web_sys::{AbortController, AbortSignal};

#[derive(Clone, Copy)]
pub struct RequestScope {
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl RequestScope {
    /// Must be called in a component body so cleanup registration works.
    pub fn new() -> Self {
        let controller = StoredValue::new_local(None::<AbortController>);
        on_cleanup(move || abort_current(controller));
        Self { controller }
    }

    /// Abort the previous request (if any) and hand out a fresh signal.
    pub fn begin(&self) -> Option<AbortSignal> {
        abort_current(self.controller);
        match AbortController::new() {
            Ok(ctrl) => {
                let signal = ctrl.signal();
                self.controller.set_value(Some(ctrl));
                Some(signal)
            }
            Err(_) => None,
        }
    }
}

fn abort_current(controller: StoredValue<Option<AbortController>, LocalStorage>) {
    if let Some(ctrl) = controller.get_value() {
        ctrl.abort();
    }
}
