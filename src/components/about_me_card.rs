//! About Me Card
//!
//! Inline editor for the profile's free-text description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::about_me::AboutMeEditor;
use crate::commands::AboutMeBackend;
use crate::context::use_app_context;
use crate::store::store_notify;
use crate::toast::Toast;

#[component]
pub fn AboutMeCard(#[prop(into)] initial: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let editor = RwSignal::new(AboutMeEditor::new(initial));
    let (saving, set_saving) = signal(false);

    let save = move |_| {
        if saving.get() {
            return;
        }
        let text = match editor.with(AboutMeEditor::prepare_save) {
            Ok(text) => text,
            Err(e) => {
                store_notify(&store, Toast::error(e.to_string()));
                return;
            }
        };
        let client = ctx.client();
        set_saving.set(true);
        spawn_local(async move {
            let result = client.save_about_me(&text).await;
            let mut toast = None;
            editor.update(|editor| toast = Some(editor.finish_save(result)));
            if let Some(toast) = toast {
                store_notify(&store, toast);
            }
            set_saving.set(false);
        });
    };

    let counter = move || editor.with(|e| e.counter());

    view! {
        <section class="card mb-4" id="about-me">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">"About Me"</h5>
                <Show when=move || !editor.with(AboutMeEditor::is_editing)>
                    <button
                        type="button"
                        class="btn btn-sm btn-link"
                        aria-label="Edit about me"
                        on:click=move |_| editor.update(AboutMeEditor::begin_edit)
                    >
                        <i class="bi bi-pencil"></i>
                    </button>
                </Show>
            </div>
            <div class="card-body">
                <Show
                    when=move || editor.with(AboutMeEditor::is_editing)
                    fallback=move || view! {
                        <p class="mb-0" style="white-space: pre-line;">
                            {move || editor.with(|e| e.display_text().to_string())}
                        </p>
                    }
                >
                    <textarea
                        class="form-control mb-1"
                        rows="5"
                        class:is-invalid=move || counter().is_some_and(|c| c.over_limit())
                        prop:value=move || editor.with(|e| e.draft().unwrap_or_default().to_string())
                        on:input=move |ev| editor.update(|e| e.set_draft(event_target_value(&ev)))
                    ></textarea>
                    <small
                        class="d-block mb-2"
                        class:text-danger=move || counter().is_some_and(|c| c.over_limit())
                        class:text-muted=move || !counter().is_some_and(|c| c.over_limit())
                    >
                        {move || counter().map(|c| c.label()).unwrap_or_default()}
                    </small>
                    <div class="d-flex justify-content-end gap-2">
                        <button
                            type="button"
                            class="btn btn-outline-secondary"
                            on:click=move |_| editor.update(AboutMeEditor::cancel)
                        >
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-primary" disabled=move || saving.get() on:click=save>
                            "Save"
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
