//! Tab strip plus page container.
//!
//! Pages stay mounted while their tab is open; the inactive ones are just
//! hidden, so list state survives switching tabs.

use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::layout::registry::render_tab_content;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn TabPage(tab: Tab) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let key_for_active = tab.key.clone();
    let is_active = move || ctx.active.get().as_deref() == Some(key_for_active.as_str());

    let content = render_tab_content(&tab.key);

    view! {
        <div
            class="tabs__page"
            style:display=move || if is_active() { "block" } else { "none" }
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key_for_active = tab.key.clone();
                        let key_for_click = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=move || {
                                    ctx.active.get().as_deref() == Some(key_for_active.as_str())
                                }
                                on:click=move |_| ctx.activate_tab(&key_for_click)
                            >
                                <span class="tabs__title">{tab.title.clone()}</span>
                                <button
                                    class="tabs__close"
                                    title="Close tab"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.close_tab(&key_for_close);
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tabs__pages">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab /> }
                />
            </div>
        </div>
    }
}
