//! Dashboard landing page: one total-count card per managed entity.

use crate::shared::api::{self, RequestScope};
use crate::shared::components::stat_card::StatCard;
use crate::system::auth::session::use_session;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let counts = RwSignal::new(HashMap::<&'static str, usize>::new());
    let scope = RequestScope::new();
    let session = use_session();

    // One shared abort signal for the whole burst of count reads.
    let signal = scope.begin();
    for d in contracts::domain::all_descriptors() {
        let key = d.key;
        let signal = signal.clone();
        spawn_local(async move {
            match api::count_records(d, signal.as_ref()).await {
                Ok(total) => counts.update(|map| {
                    map.insert(key, total);
                }),
                Err(err) if err.aborted() => {}
                Err(err) => {
                    if err.unauthorized() {
                        session.expire();
                    } else {
                        log::warn!("count for {key} failed: {}", err.message);
                    }
                }
            }
        });
    }

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                </div>
            </div>

            <div class="stat-grid">
                {contracts::domain::all_descriptors().iter().map(|d| {
                    let key = d.key;
                    view! {
                        <StatCard
                            label=d.list_name.to_string()
                            icon_name=d.icon.to_string()
                            value=Signal::derive(move || counts.get().get(key).copied())
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
