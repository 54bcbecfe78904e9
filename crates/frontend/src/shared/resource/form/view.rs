//! Rendered form for one resource, create and edit modes.

use super::view_model::{FormLoad, ResourceFormViewModel};
use crate::shared::icons::icon;
use contracts::shared::descriptor::{AdminResource, FieldKind, FieldSpec};
use leptos::prelude::*;

fn field_view<T: AdminResource>(
    vm: ResourceFormViewModel<T>,
    field: &'static FieldSpec,
) -> AnyView {
    let values = vm.values;
    let options = vm.options;
    let submitting = vm.submitting;
    let label = if field.required.is_some() {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let control = match field.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                id=field.key
                prop:value=move || values.with(|v| v.get(field.key).to_string())
                placeholder=field.placeholder
                disabled=move || submitting.running()
                on:input=move |ev| vm.set_field(field.key, event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=field.key
                prop:value=move || values.with(|v| v.get(field.key).to_string())
                placeholder=field.placeholder
                rows="4"
                disabled=move || submitting.running()
                on:input=move |ev| vm.set_field(field.key, event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Select(_) => view! {
            <select
                id=field.key
                prop:value=move || values.with(|v| v.get(field.key).to_string())
                disabled=move || submitting.running()
                on:change=move |ev| vm.set_field(field.key, event_target_value(&ev))
            >
                <option value="">{field.placeholder}</option>
                {move || {
                    options
                        .with(|map| map.get(field.key).cloned().unwrap_or_default())
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.key>{label}</label>
            {control}
        </div>
    }
    .into_any()
}

/// Generic create/edit form. `id == None` creates; `Some` fetches and
/// overwrites. `on_saved` fires after the backend accepted the submission;
/// `on_cancel` leaves without confirmation.
pub fn resource_form<T: AdminResource>(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let d = T::descriptor();
    let vm = ResourceFormViewModel::<T>::new();
    vm.load_if_needed(id);
    vm.load_options();

    let is_edit = id.is_some();
    let heading = if is_edit {
        format!("Edit {}", d.element_name)
    } else {
        format!("New {}", d.element_name)
    };

    let error = vm.error;
    let load = vm.load;
    let preview = vm.preview;
    let submitting = vm.submitting;
    let upload_id = format!("{}-media-upload", d.key);

    view! {
        <div class="details-container">
            <div class="details-header">
                <div class="details-header__title">
                    {icon(d.icon)}
                    <h3>{heading}</h3>
                </div>
                <button
                    class="icon-button"
                    title="Back"
                    disabled=move || submitting.running()
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("arrow-left")}
                </button>
            </div>

            {move || error.get().map(|message| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">{icon("alert-circle")}</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            })}

            <Show when=move || load.get() == FormLoad::Loading>
                <div class="panel panel--loading">
                    <div class="spinner"></div>
                    <p>{format!("Loading {}...", d.element_name.to_lowercase())}</p>
                </div>
            </Show>

            {move || match load.get() {
                FormLoad::Failed(message) => Some(view! {
                    <div class="panel panel--error">
                        {icon("alert-circle")}
                        <p>{format!("Failed to load {} data", d.element_name.to_lowercase())}</p>
                        <p class="panel__detail">{message}</p>
                    </div>
                }),
                _ => None,
            }}

            <Show when=move || load.get() == FormLoad::Ready>
                <div class="details-form">
                    {d.media.as_ref().map(|media| {
                        let upload_id = upload_id.clone();
                        let upload_id_for_label = upload_id.clone();
                        view! {
                            <div class="form-group">
                                <label>{media.label}</label>
                                <div class="media-upload">
                                    <div class="media-upload__preview">
                                        {move || match preview.get() {
                                            Some(url) => view! {
                                                <img class="media-upload__img" src=url alt="Preview"/>
                                            }.into_any(),
                                            None => view! {
                                                <span class="media-upload__placeholder">{icon("upload")}</span>
                                            }.into_any(),
                                        }}
                                    </div>
                                    <div class="media-upload__controls">
                                        <input
                                            type="file"
                                            accept="image/*"
                                            id=upload_id.clone()
                                            class="media-upload__input"
                                            disabled=move || submitting.running()
                                            on:change=move |ev| {
                                                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                                                    vm.select_file(file);
                                                }
                                                // allow re-picking the same file
                                                input.set_value("");
                                            }
                                        />
                                        <label class="button button--primary" for=upload_id_for_label>
                                            {format!("Choose {}", media.label)}
                                        </label>
                                        <p class="media-upload__hint">
                                            {format!("Upload a new {} if you want to change (max 5MB)", media.label.to_lowercase())}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        }
                    })}

                    {d.fields.iter().map(|field| field_view(vm, field)).collect_view()}
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || submitting.running()
                        on:click=move |_| vm.save(id, on_saved)
                    >
                        {icon("save")}
                        <span>{move || {
                            if submitting.running() {
                                "Saving...".to_string()
                            } else if is_edit {
                                format!("Update {}", d.element_name)
                            } else {
                                format!("Create {}", d.element_name)
                            }
                        }}</span>
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || submitting.running()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </Show>
        </div>
    }
}
