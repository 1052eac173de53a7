//! Social Links Panel
//!
//! Read-only link list. The edit dialog works on a scratch copy that is
//! committed in one batch on save and dropped on close.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modal_frame::{FieldErrorList, ModalFrame};
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{Platform, SocialLink};
use crate::render::social_link_rows;
use crate::store::{store_close_modal, store_open_modal, Modal, ProfileStateStoreFields};

#[component]
pub fn SocialLinksPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="card mb-4" id="social-links-panel">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">"Social Links"</h5>
                <button
                    type="button"
                    class="btn btn-sm btn-link"
                    aria-label="Edit social links"
                    on:click=move |_| store_open_modal(&store, Modal::SocialLinks)
                >
                    <i class="bi bi-pencil"></i>
                </button>
            </div>
            <ul class="list-group list-group-flush">
                <Show
                    when=move || !store.social_links().read().is_empty()
                    fallback=|| view! { <li class="list-group-item text-muted">"No social links added yet."</li> }
                >
                    {move || social_link_rows(&store.social_links().get()).into_iter().map(|row| view! {
                        <li class="list-group-item d-flex align-items-center">
                            <i class=row.icon_class></i>
                            <a href=row.url target="_blank" rel="noopener" title=row.label>
                                {row.name}
                            </a>
                        </li>
                    }).collect_view()}
                </Show>
            </ul>
        </section>
        <SocialLinksModal />
    }
}

#[component]
fn SocialLinksModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let scratch = RwSignal::new(Vec::<SocialLink>::new());
    let (saving, set_saving) = signal(false);

    // Copy the mirror each time the dialog opens
    Effect::new(move |_| {
        if store.modal().get() == Some(Modal::SocialLinks) {
            scratch.set(store.social_links().get_untracked());
        }
    });

    let save = move |_| {
        if saving.get() {
            return;
        }
        let links = ctx.social_links();
        let edited = scratch.get();
        set_saving.set(true);
        spawn_local(async move {
            // Err means nothing was sent; once requests went out the scratch
            // rows are stale and the dialog must not resubmit them
            if links.batch_save(edited).await.is_ok() {
                scratch.set(store.social_links().get_untracked());
                store_close_modal(&store, &Modal::SocialLinks);
            }
            set_saving.set(false);
        });
    };

    view! {
        <ModalFrame modal=Modal::SocialLinks title="Edit Social Links">
            {move || scratch.get().into_iter().enumerate().map(|(index, link)| {
                let platform = link.platform;
                let url_missing = link.url.trim().is_empty();
                let display_name = link.display_name.clone().unwrap_or_default();
                view! {
                    <div class="row g-2 align-items-center mb-2 social-link-row">
                        <div class="col-4">
                            <select
                                class="form-select"
                                on:change=move |ev| {
                                    let name = event_target_value(&ev);
                                    edit_row(scratch, index, |link| link.platform = Platform::from_name(&name));
                                }
                            >
                                {Platform::ALL.into_iter().map(|option| view! {
                                    <option value=option.as_str() selected={option == platform}>
                                        {option.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="col-4">
                            <input
                                type="url"
                                class="form-control"
                                class:is-invalid=url_missing
                                placeholder="https://..."
                                prop:value=link.url
                                on:change=move |ev| {
                                    let url = event_target_value(&ev);
                                    edit_row(scratch, index, |link| link.url = url);
                                }
                            />
                        </div>
                        <div class="col-3">
                            <input
                                type="text"
                                class="form-control"
                                placeholder="Display name"
                                prop:value=display_name
                                on:change=move |ev| {
                                    let name = event_target_value(&ev);
                                    edit_row(scratch, index, |link| {
                                        link.display_name = (!name.trim().is_empty()).then_some(name);
                                    });
                                }
                            />
                        </div>
                        <div class="col-1 text-end">
                            <DeleteConfirmButton
                                button_class="btn btn-sm btn-outline-danger"
                                on_confirm=move |_| scratch.update(|links| {
                                    if index < links.len() {
                                        links.remove(index);
                                    }
                                })
                            />
                        </div>
                    </div>
                }
            }).collect_view()}
            <button
                type="button"
                class="btn btn-sm btn-outline-primary mb-3"
                on:click=move |_| scratch.update(|links| links.push(SocialLink::unsaved()))
            >
                <i class="bi bi-plus-lg me-1"></i>"Add Link"
            </button>
            <FieldErrorList />
            <div class="d-flex justify-content-end gap-2 mt-3">
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    on:click=move |_| store_close_modal(&store, &Modal::SocialLinks)
                >
                    "Cancel"
                </button>
                <button type="button" class="btn btn-primary" disabled=move || saving.get() on:click=save>
                    "Save"
                </button>
            </div>
        </ModalFrame>
    }
}

/// Apply `edit` to scratch row `index`, if it still exists
fn edit_row(scratch: RwSignal<Vec<SocialLink>>, index: usize, edit: impl FnOnce(&mut SocialLink)) {
    scratch.update(|links| {
        if let Some(link) = links.get_mut(index) {
            edit(link);
        }
    });
}
