use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::session::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab store, modal stack, and toast service live at the root so every
    // screen reaches them via context. The hosts are mounted exactly once,
    // outside the auth gate.
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ModalHost />
            <ToastHost />
        </SessionProvider>
    }
}
