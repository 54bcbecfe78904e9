use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::session::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="icon-button"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__brand">"Site Back Office"</span>
            </div>
            <div class="top-header__right">
                <button
                    class="icon-button"
                    title="Log out"
                    on:click=move |_| session.expire()
                >
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
