//! Generic list screen: fetch on mount, client-side search, edit/create in
//! a modal, delete behind a confirmation gate.

use crate::shared::api::{self, RequestScope};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::resource::form::resource_form;
use crate::shared::single_flight::InFlight;
use crate::shared::toast::ToastService;
use contracts::shared::descriptor::AdminResource;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Visible lifecycle of the collection. While `Loading`, every mutating
/// control is disabled; `Errored` renders the banner over an empty list.
#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// Generic list screen for one resource type.
pub fn resource_list<T: AdminResource>() -> impl IntoView {
    let d = T::descriptor();

    let (items, set_items) = signal(Vec::<T>::new());
    let (filter, set_filter) = signal(String::new());
    let (state, set_state) = signal(LoadState::Idle);
    let pending_delete = RwSignal::new(None::<T>);
    let deleting = InFlight::new();
    let scope = RequestScope::new();

    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let session = crate::system::auth::session::use_session();

    let fetch = move || {
        set_state.set(LoadState::Loading);
        let signal = scope.begin();
        spawn_local(async move {
            match api::fetch_collection::<T>(signal.as_ref()).await {
                Ok(rows) => {
                    set_items.set(rows);
                    set_state.set(LoadState::Loaded);
                }
                Err(err) if err.aborted() => {}
                Err(err) => {
                    if err.unauthorized() {
                        session.expire();
                        return;
                    }
                    set_items.set(Vec::new());
                    set_state.set(LoadState::Errored(format!(
                        "Failed to fetch {} data",
                        d.element_name.to_lowercase()
                    )));
                    log::error!("fetch {} failed: {}", d.resource, err.message);
                }
            }
        });
    };

    let refetch = Callback::new(move |_| fetch());

    // Create/edit open in a modal; on save the modal closes and the list
    // re-fetches.
    let open_form = move |id: Option<i64>| {
        modal_stack.clear();
        modal_stack.push(
            Some("max-width: min(860px, 95vw); width: min(860px, 95vw);".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        refetch.run(());
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                resource_form::<T>(id, on_saved, on_cancel).into_any()
            },
        );
    };

    // Confirmed delete: single-flight guarded; success removes the row by
    // id match without re-fetching, failure leaves the list unchanged.
    let confirm_delete = move |_| {
        let Some(record) = pending_delete.get_untracked() else {
            return;
        };
        if !deleting.try_begin() {
            return;
        }
        let id = record.id();
        let name = record.display_name();
        spawn_local(async move {
            match api::delete_record::<T>(id).await {
                Ok(()) => {
                    set_items.update(|rows| rows.retain(|row| row.id() != id));
                    toasts.success(format!("{name} deleted successfully."));
                }
                Err(err) => {
                    if err.unauthorized() {
                        session.expire();
                    } else {
                        toasts.error(format!(
                            "Failed to delete {}.",
                            d.element_name.to_lowercase()
                        ));
                        log::error!("delete {}/{} failed: {}", d.resource, id, err.message);
                    }
                }
            }
            pending_delete.set(None);
            deleting.finish();
        });
    };

    let is_loading = move || state.get() == LoadState::Loading;

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    {icon(d.icon)}
                    <h1 class="header__title">{format!("{} Management", d.element_name)}</h1>
                    <button
                        class="icon-button"
                        title="Refresh data"
                        disabled=move || is_loading()
                        on:click=move |_| fetch()
                    >
                        {icon("refresh")}
                    </button>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        disabled=move || is_loading()
                        on:click=move |_| open_form(None)
                    >
                        {icon("plus")}
                        <span>{format!("Add {}", d.element_name)}</span>
                    </button>
                </div>
            </div>

            {move || match state.get() {
                LoadState::Errored(message) => Some(view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert-circle")}</span>
                        <span class="warning-box__text">{message}</span>
                    </div>
                }),
                _ => None,
            }}

            <div class="list-toolbar">
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |value| set_filter.set(value))
                    placeholder=format!("Search {}...", d.list_name.to_lowercase())
                    disabled=Signal::derive(is_loading)
                />
            </div>

            {move || match state.get() {
                LoadState::Loading | LoadState::Idle => view! {
                    <div class="panel panel--loading">
                        <div class="spinner"></div>
                        <p>{format!("Loading {}...", d.list_name.to_lowercase())}</p>
                    </div>
                }
                .into_any(),
                _ => {
                    let rows = filter_list(items.get(), &filter.get());
                    if rows.is_empty() {
                        let searching = !filter.get().trim().is_empty();
                        view! {
                            <div class="panel panel--empty">
                                {icon(d.icon)}
                                <h3>{if searching {
                                    format!("No {} found", d.list_name.to_lowercase())
                                } else {
                                    format!("No {} yet", d.list_name.to_lowercase())
                                }}</h3>
                                <p>{if searching {
                                    "Try adjusting your search terms".to_string()
                                } else {
                                    format!("Start by adding your first {}", d.element_name.to_lowercase())
                                }}</p>
                                {(!searching).then(|| view! {
                                    <button class="button button--primary" on:click=move |_| open_form(None)>
                                        <span>{format!("Add {}", d.element_name)}</span>
                                    </button>
                                })}
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="table">
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            {d.media.is_some().then(|| view! {
                                                <th class="table__header-cell table__header-cell--media"></th>
                                            })}
                                            {d.columns.iter().map(|col| view! {
                                                <th class="table__header-cell">{col.label}</th>
                                            }).collect_view()}
                                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows.into_iter().map(|record| {
                                            let id = record.id();
                                            let media = record.media_url();
                                            let cells: Vec<AnyView> = d.columns.iter().map(|col| {
                                                let text = record.cell(col.key);
                                                view! { <td class="table__cell">{text}</td> }.into_any()
                                            }).collect();
                                            view! {
                                                <tr class="table__row">
                                                    {d.media.is_some().then(|| view! {
                                                        <td class="table__cell table__cell--media">
                                                            {match media.clone() {
                                                                Some(url) => view! {
                                                                    <img class="table__thumb" src=url alt=""/>
                                                                }.into_any(),
                                                                None => view! {
                                                                    <span class="table__thumb table__thumb--placeholder">
                                                                        {icon("image")}
                                                                    </span>
                                                                }.into_any(),
                                                            }}
                                                        </td>
                                                    })}
                                                    {cells}
                                                    <td class="table__cell table__cell--actions">
                                                        <button
                                                            class="button button--small"
                                                            disabled=move || is_loading()
                                                            on:click=move |_| open_form(Some(id))
                                                        >
                                                            {icon("edit")}
                                                            <span>"Edit"</span>
                                                        </button>
                                                        <button
                                                            class="button button--small button--danger"
                                                            disabled=move || is_loading()
                                                            on:click=move |_| pending_delete.set(Some(record.clone()))
                                                        >
                                                            {icon("trash")}
                                                            <span>"Delete"</span>
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            <Show when=move || !is_loading()>
                <div class="list-stats">
                    <span>{move || format!("Total {}: {}", d.list_name, items.get().len())}</span>
                    {move || (!filter.get().trim().is_empty()).then(|| view! {
                        <span>{format!(
                            "Showing: {} results",
                            filter_list(items.get(), &filter.get()).len()
                        )}</span>
                    })}
                </div>
            </Show>

            {move || pending_delete.get().map(|record| {
                let name = record.display_name();
                view! {
                    <ConfirmDialog
                        name=name
                        entity=d.element_name.to_lowercase()
                        busy=Signal::derive(move || deleting.running())
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                        on_confirm=Callback::new(confirm_delete)
                    />
                }
            })}
        </div>
    }
}
