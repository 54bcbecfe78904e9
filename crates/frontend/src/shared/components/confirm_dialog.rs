//! Delete confirmation gate.
//!
//! Holds no state of its own: the owning list keeps `Option<record>` and
//! renders this dialog only while a record is pending confirmation.

use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    /// Display name of the record about to be deleted.
    name: String,
    /// Singular entity label, e.g. "team member".
    entity: String,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame on_close=on_cancel modal_style="max-width: 28rem; width: 28rem;".to_string()>
            <div class="confirm-dialog">
                <h2 class="confirm-dialog__title">{format!("Delete {name}?")}</h2>
                <p class="confirm-dialog__text">
                    {format!("Are you sure you want to delete this {entity}? This action cannot be undone.")}
                </p>
                <div class="confirm-dialog__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </ModalFrame>
    }
}
