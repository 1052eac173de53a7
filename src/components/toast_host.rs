//! Toast Host Component
//!
//! Shows the store's current toast and hides it after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss_toast, store_expire_toast, use_profile_store, ProfileStateStoreFields};

const TOAST_VISIBLE_MS: u32 = 3_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_profile_store();

    // Auto-hide; the countdown is keyed on the sequence number so a
    // repeated message gets its full time on screen
    Effect::new(move |_| {
        let Some(seq) = store.toast().with(|slot| slot.visible_seq()) else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            store_expire_toast(&store, seq);
        });
    });

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            {move || store.toast().with(|slot| slot.current().cloned()).map(|toast| view! {
                <div class=format!("toast show align-items-center border-0 {}", toast.kind.class()) role="alert" aria-live="assertive">
                    <div class="d-flex">
                        <div class="toast-body">{toast.message}</div>
                        <button
                            type="button"
                            class="btn-close btn-close-white me-2 m-auto"
                            aria-label="Close"
                            on:click=move |_| store_dismiss_toast(&store)
                        ></button>
                    </div>
                </div>
            })}
        </div>
    }
}
