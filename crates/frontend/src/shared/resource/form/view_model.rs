//! ViewModel for the generic resource form.

use crate::shared::api::{self, RequestScope};
use crate::shared::single_flight::InFlight;
use crate::shared::toast::ToastService;
use crate::system::auth::session::{use_session, Session};
use contracts::shared::descriptor::{AdminResource, FieldKind};
use contracts::shared::form::FormValues;
use contracts::shared::media::check_image_selection;
use contracts::shared::validation::first_violation;
use leptos::prelude::*;
use std::collections::HashMap;
use std::marker::PhantomData;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

/// Edit-mode load lifecycle. A failed load replaces the form with a
/// failure panel rather than presenting blank fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FormLoad {
    Ready,
    Loading,
    Failed(String),
}

pub struct ResourceFormViewModel<T: AdminResource> {
    pub values: RwSignal<FormValues>,
    pub error: RwSignal<Option<String>>,
    pub submitting: InFlight,
    pub load: RwSignal<FormLoad>,
    /// Either a persisted URL (edit mode) or a data URL of a fresh pick.
    pub preview: RwSignal<Option<String>>,
    /// Options per select-field key, loaded on mount.
    pub options: RwSignal<HashMap<&'static str, Vec<(String, String)>>>,
    /// Freshly selected file, pending upload. Supersedes the preview but
    /// not the persisted value until the backend accepts it.
    file: RwSignal<Option<File>, LocalStorage>,
    scope: RequestScope,
    session: Session,
    toasts: ToastService,
    marker: PhantomData<fn() -> T>,
}

impl<T: AdminResource> Clone for ResourceFormViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: AdminResource> Copy for ResourceFormViewModel<T> {}

impl<T: AdminResource> ResourceFormViewModel<T> {
    /// Must be constructed in a component body (context + cleanup).
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(FormValues::new()),
            error: RwSignal::new(None),
            submitting: InFlight::new(),
            load: RwSignal::new(FormLoad::Ready),
            preview: RwSignal::new(None),
            options: RwSignal::new(HashMap::new()),
            file: RwSignal::new_local(None),
            scope: RequestScope::new(),
            session: use_session(),
            toasts: use_context::<ToastService>().expect("ToastService not found in context"),
            marker: PhantomData,
        }
    }

    /// Edit mode: fetch the record and pre-populate, converting a persisted
    /// media URL into the preview without re-downloading it.
    pub fn load_if_needed(&self, id: Option<i64>) {
        let Some(existing_id) = id else { return };
        let vm = *self;
        vm.load.set(FormLoad::Loading);
        let signal = vm.scope.begin();
        spawn_local(async move {
            match api::fetch_record::<T>(existing_id, signal.as_ref()).await {
                Ok(record) => {
                    vm.values.set(record.to_form());
                    vm.preview.set(record.media_url());
                    vm.load.set(FormLoad::Ready);
                }
                Err(err) if err.aborted() => {}
                Err(err) => {
                    if err.unauthorized() {
                        vm.session.expire();
                    } else {
                        vm.load.set(FormLoad::Failed(err.message));
                    }
                }
            }
        });
    }

    /// Fetch option lists for every select field.
    pub fn load_options(&self) {
        for field in T::descriptor().fields {
            if let FieldKind::Select(source) = field.kind {
                let vm = *self;
                let key = field.key;
                spawn_local(async move {
                    match api::fetch_select_options(&source, None).await {
                        Ok(pairs) => vm.options.update(|map| {
                            map.insert(key, pairs);
                        }),
                        Err(err) => log::warn!("failed to load options for {key}: {}", err.message),
                    }
                });
            }
        }
    }

    pub fn set_field(&self, key: &'static str, value: String) {
        self.values.update(|values| values.set(key, value));
        if self.error.get_untracked().is_some() {
            self.error.set(None);
        }
    }

    /// Validate and accept a freshly picked file. A rejection sets the
    /// error and changes nothing else: no preview update, no stored file.
    pub fn select_file(&self, file: File) {
        if let Err(rejection) = check_image_selection(&file.type_(), file.size()) {
            self.error.set(Some(rejection.message().to_string()));
            return;
        }
        self.read_preview(&file);
        self.file.set(Some(file));
        self.error.set(None);
    }

    fn read_preview(&self, file: &File) {
        let preview = self.preview;
        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => return,
        };
        let reader_for_load = reader.clone();
        let onload = Closure::once(move |_event: web_sys::Event| {
            if let Ok(result) = reader_for_load.result() {
                if let Some(data_url) = result.as_string() {
                    preview.set(Some(data_url));
                }
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        let _ = reader.read_as_data_url(file);
    }

    fn media_present(&self) -> bool {
        self.preview.with_untracked(|p| p.is_some())
            || self.file.with_untracked(|f| f.is_some())
    }

    /// Validate, then create or overwrite. Guarded against double submits;
    /// a validation failure issues no network call. On backend failure the
    /// entered values stay put for retry.
    pub fn save(&self, id: Option<i64>, on_saved: Callback<()>) {
        if !self.submitting.try_begin() {
            return;
        }
        let descriptor = T::descriptor();
        if let Some(message) = first_violation(
            descriptor,
            &self.values.get_untracked(),
            self.media_present(),
        ) {
            self.error.set(Some(message.to_string()));
            self.submitting.finish();
            return;
        }
        self.error.set(None);

        let vm = *self;
        let values = self.values.get_untracked();
        let file = self.file.get_untracked();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_record::<T>(id, &values, file.as_ref()).await,
                None => api::create_record::<T>(&values, file.as_ref()).await,
            };
            match result {
                Ok(()) => {
                    let verb = if id.is_some() { "updated" } else { "added" };
                    vm.toasts
                        .success(format!("{} {verb} successfully!", descriptor.element_name));
                    vm.submitting.finish();
                    on_saved.run(());
                }
                Err(err) => {
                    if err.unauthorized() {
                        vm.session.expire();
                    } else {
                        vm.error.set(Some(err.message.clone()));
                        vm.toasts.error(err.message);
                    }
                    vm.submitting.finish();
                }
            }
        });
    }
}
