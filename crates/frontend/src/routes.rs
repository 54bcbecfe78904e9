use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::session::use_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Runs once when the shell is created: restores the ?active= tab and
    // keeps the URL in sync afterwards.
    ctx.init_router_integration();

    // Land on the dashboard when nothing was restored.
    if ctx.opened.with_untracked(|tabs| tabs.is_empty()) {
        ctx.open_tab("home", "Dashboard");
    }

    view! { <Shell /> }
}

/// Route guard: without a persisted token nothing admin-shaped renders,
/// only the login screen.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
