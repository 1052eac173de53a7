//! Modal Frame Component
//!
//! Dialog chrome shared by every modal. Visibility follows the store's
//! `modal` field.

use leptos::prelude::*;

use crate::error::FieldError;
use crate::store::{is_open, store_close_modal, use_profile_store, Modal, ProfileStateStoreFields};

#[component]
pub fn ModalFrame(
    modal: Modal,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = use_profile_store();
    let open = move || is_open(&store.modal().get(), &modal);
    let close = move |_| store_close_modal(&store, &modal);

    view! {
        <Show when=open>
            <div class="modal d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-dialog-centered">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || title.get()}</h5>
                            <button type="button" class="btn-close" aria-label="Close" on:click=close></button>
                        </div>
                        <div class="modal-body">{children()}</div>
                    </div>
                </div>
            </div>
            <div class="modal-backdrop show"></div>
        </Show>
    }
}

/// Whether the open form currently reports `error`
pub fn has_field_error(error: FieldError) -> impl Fn() -> bool + Copy + 'static {
    let store = use_profile_store();
    move || store.field_errors().read().contains(&error)
}

/// Inline list of the open form's field errors
#[component]
pub fn FieldErrorList() -> impl IntoView {
    let store = use_profile_store();

    view! {
        <For
            each=move || store.field_errors().get()
            key=|error| error.to_string()
            let:error
        >
            <div class="invalid-feedback d-block">{error.to_string()}</div>
        </For>
    }
}
