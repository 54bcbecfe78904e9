pub mod global_context;
pub mod registry;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use tabs::Tabs;
use top_header::TopHeader;

/// Application shell:
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  Sidebar  |        Tabbed content        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <aside class="app-sidebar">
                        <Sidebar />
                    </aside>
                </Show>
                <div class="app-main">
                    <Tabs />
                </div>
            </div>
        </div>
    }
}
