//! Centralized modal stack.
//!
//! Lists open their create/edit forms through this service; `ModalHost`
//! renders the stack at the application root. Escape closes only the
//! topmost modal. Closes are deferred to the next tick to avoid invoking a
//! handler that was dropped while its own DOM event was still dispatching.

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    surface_style: Option<String>,
}

/// Handle given to a modal's builder so the content can close itself.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.stack.get().is_empty()
    }

    /// Push a modal; `surface_style` sizes the surface (the content renders
    /// its own header and actions).
    pub fn push<F>(&self, surface_style: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        self.stack.update(|stack| {
            stack.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                surface_style,
            });
        });
        handle
    }

    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|stack| stack.retain(|e| e.id != id));
        });
    }

    pub fn pop_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|stack| {
                stack.pop();
            });
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack. Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    // Global Escape handler for the topmost modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost lives for the whole app; keep the closure alive.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let handle = ModalHandle { id, svc };
                    let content = (entry.builder)(handle);

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=entry.surface_style.clone().unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
