//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second confirms.

use leptos::prelude::*;

/// Remove control for rows that are dropped without a confirmation dialog:
/// the skill being edited in the edit-skill modal and the scratch rows of
/// the social links editor. Nothing is removed until the second click, and
/// the click never reaches the row underneath.
///
/// `on_confirm` runs once per confirmation; the row's owner decides whether
/// that sends a request (skills) or only edits the scratch list (links).
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                aria-label="Remove"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                <i class="bi bi-trash"></i>
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text me-1">"Remove?"</span>
                <button
                    type="button"
                    class="btn btn-sm btn-danger me-1"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    <i class="bi bi-check-lg"></i>
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    <i class="bi bi-x-lg"></i>
                </button>
            </span>
        </Show>
    }
}
