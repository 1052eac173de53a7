//! Projects Panel
//!
//! Portfolio cards with add/edit dialog and a confirmed delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modal_frame::{has_field_error, FieldErrorList, ModalFrame};
use crate::context::use_app_context;
use crate::error::FieldError;
use crate::models::ProjectDraft;
use crate::render::project_cards;
use crate::store::{store_close_modal, store_open_modal, Modal, ProfileStateStoreFields};
use crate::validation::{CharCounter, PROJECT_DESCRIPTION_MAX, PROJECT_TITLE_MAX};

#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="card mb-4" id="projects-panel">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">"Projects"</h5>
                <button
                    type="button"
                    class="btn btn-sm btn-primary"
                    on:click=move |_| store_open_modal(&store, Modal::AddProject)
                >
                    <i class="bi bi-plus-lg me-1"></i>"Add Project"
                </button>
            </div>
            <div class="card-body">
                <Show
                    when=move || !store.projects().read().is_empty()
                    fallback=|| view! { <p class="text-muted mb-0">"No projects added yet."</p> }
                >
                    <div class="row g-3">
                        {move || project_cards(&store.projects().get()).into_iter().map(|card| {
                            let id = card.id;
                            view! {
                                <div class="col-md-6">
                                    <div class="card h-100 project-card">
                                        <div class="card-body">
                                            <div class="d-flex justify-content-between align-items-start">
                                                <h6 class="card-title">{card.title}</h6>
                                                {id.map(|id| view! {
                                                    <span class="text-nowrap">
                                                        <button
                                                            type="button"
                                                            class="btn btn-sm btn-link p-0 me-2"
                                                            aria-label="Edit project"
                                                            on:click=move |_| store_open_modal(&store, Modal::EditProject(id))
                                                        >
                                                            <i class="bi bi-pencil"></i>
                                                        </button>
                                                        <button
                                                            type="button"
                                                            class="btn btn-sm btn-link text-danger p-0"
                                                            aria-label="Delete project"
                                                            on:click=move |_| store_open_modal(&store, Modal::ConfirmDeleteProject(id))
                                                        >
                                                            <i class="bi bi-trash"></i>
                                                        </button>
                                                    </span>
                                                })}
                                            </div>
                                            <p class="card-text small">{card.description}</p>
                                            <div class="mb-2">
                                                {card.technologies.into_iter().map(|tech| view! {
                                                    <span class="badge bg-secondary me-1">{tech}</span>
                                                }).collect_view()}
                                            </div>
                                            {card.github_link.map(|link| view! {
                                                <a class="btn btn-sm btn-outline-dark me-2" href=link target="_blank" rel="noopener">
                                                    <i class="bi bi-github me-1"></i>"Code"
                                                </a>
                                            })}
                                            {card.demo_link.map(|link| view! {
                                                <a class="btn btn-sm btn-outline-primary" href=link target="_blank" rel="noopener">
                                                    <i class="bi bi-box-arrow-up-right me-1"></i>"Demo"
                                                </a>
                                            })}
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </section>
        <ProjectFormModal />
        <ConfirmDeleteProjectModal />
    }
}

/// Add and edit share one form; the open modal decides which request runs
#[component]
fn ProjectFormModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let draft = RwSignal::new(ProjectDraft::default());
    let tech_input = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    let form_modal = move || match store.modal().get() {
        Some(modal @ (Modal::AddProject | Modal::EditProject(_))) => Some(modal),
        _ => None,
    };

    // Fresh form on every open
    Effect::new(move |_| {
        let seeded = match form_modal() {
            Some(Modal::EditProject(id)) => ctx
                .projects()
                .find(id)
                .map(|project| ProjectDraft::from_project(&project))
                .unwrap_or_default(),
            Some(_) => ProjectDraft::default(),
            None => return,
        };
        draft.set(seeded);
        tech_input.set(String::new());
    });

    let add_technology = move || {
        let raw = tech_input.get();
        let mut added = false;
        draft.update(|d| added = d.add_technology(&raw));
        if added || raw.trim().is_empty() {
            tech_input.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(modal) = form_modal() else {
            return;
        };
        if saving.get() {
            return;
        }
        let projects = ctx.projects();
        let payload = draft.get();
        set_saving.set(true);
        spawn_local(async move {
            let result = match modal {
                Modal::EditProject(id) => projects.update(id, payload).await.map(drop),
                _ => projects.add(payload).await.map(drop),
            };
            if result.is_ok() {
                store_close_modal(&store, &modal);
            }
            set_saving.set(false);
        });
    };

    let title_missing = has_field_error(FieldError::TitleRequired);
    let description_missing = has_field_error(FieldError::DescriptionRequired);
    let title_counter = move || draft.with(|d| CharCounter::new(d.title.trim(), PROJECT_TITLE_MAX));
    let description_counter =
        move || draft.with(|d| CharCounter::new(d.description.trim(), PROJECT_DESCRIPTION_MAX));

    view! {
        {move || form_modal().map(|modal| {
            let heading = if matches!(modal, Modal::EditProject(_)) { "Edit Project" } else { "Add Project" };
            view! {
                <ModalFrame modal=modal title=heading>
                    <form on:submit=on_submit>
                        <div class="mb-3">
                            <label class="form-label" for="project-title">"Title"</label>
                            <input
                                id="project-title"
                                type="text"
                                class="form-control"
                                class:is-invalid=move || title_missing() || title_counter().over_limit()
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            />
                            <small class="text-muted">{move || title_counter().label()}</small>
                        </div>
                        <div class="mb-3">
                            <label class="form-label" for="project-description">"Description"</label>
                            <textarea
                                id="project-description"
                                class="form-control"
                                rows="3"
                                class:is-invalid=move || description_missing() || description_counter().over_limit()
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            ></textarea>
                            <small class="text-muted">{move || description_counter().label()}</small>
                        </div>
                        <div class="mb-3">
                            <label class="form-label" for="project-tech">"Technologies"</label>
                            <div class="input-group">
                                <input
                                    id="project-tech"
                                    type="text"
                                    class="form-control"
                                    placeholder="e.g. Rust"
                                    prop:value=move || tech_input.get()
                                    on:input=move |ev| tech_input.set(event_target_value(&ev))
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            add_technology();
                                        }
                                    }
                                />
                                <button type="button" class="btn btn-outline-secondary" on:click=move |_| add_technology()>
                                    "Add"
                                </button>
                            </div>
                            <div class="mt-2">
                                {move || draft.with(|d| d.technologies.clone()).into_iter().map(|tech| {
                                    let removed = tech.clone();
                                    view! {
                                        <span class="badge bg-secondary me-1">
                                            {tech}
                                            <button
                                                type="button"
                                                class="btn-close btn-close-white ms-1"
                                                style="font-size: 0.6em;"
                                                aria-label="Remove technology"
                                                on:click=move |_| draft.update(|d| d.remove_technology(&removed))
                                            ></button>
                                        </span>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                        <div class="mb-3">
                            <label class="form-label" for="project-github">"GitHub link"</label>
                            <input
                                id="project-github"
                                type="url"
                                class="form-control"
                                placeholder="https://github.com/..."
                                prop:value=move || draft.with(|d| d.github_link.clone())
                                on:input=move |ev| draft.update(|d| d.github_link = event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label" for="project-demo">"Demo link"</label>
                            <input
                                id="project-demo"
                                type="url"
                                class="form-control"
                                placeholder="https://..."
                                prop:value=move || draft.with(|d| d.demo_link.clone())
                                on:input=move |ev| draft.update(|d| d.demo_link = event_target_value(&ev))
                            />
                        </div>
                        <FieldErrorList />
                        <div class="d-flex justify-content-end gap-2 mt-3">
                            <button
                                type="button"
                                class="btn btn-outline-secondary"
                                on:click=move |_| store_close_modal(&store, &modal)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </ModalFrame>
            }
        })}
    }
}

/// Second step of a project delete
#[component]
fn ConfirmDeleteProjectModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let pending = move || match store.modal().get() {
        Some(Modal::ConfirmDeleteProject(id)) => Some(id),
        _ => None,
    };

    let confirm = move |id: u32| {
        let projects = ctx.projects();
        spawn_local(async move {
            // The pending id is dropped whatever the outcome
            let _ = projects.remove(id).await;
            store_close_modal(&store, &Modal::ConfirmDeleteProject(id));
        });
    };

    view! {
        {move || pending().map(|id| {
            let name = ctx
                .projects()
                .find(id)
                .map(|project| project.title)
                .unwrap_or_default();
            view! {
                <ModalFrame modal=Modal::ConfirmDeleteProject(id) title="Delete Project">
                    <p>"Are you sure you want to delete "<strong>{name.clone()}</strong>"?"</p>
                    <div class="d-flex justify-content-end gap-2">
                        <button
                            type="button"
                            class="btn btn-outline-secondary"
                            on:click=move |_| store_close_modal(&store, &Modal::ConfirmDeleteProject(id))
                        >
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-danger" on:click=move |_| confirm(id)>
                            "Delete"
                        </button>
                    </div>
                </ModalFrame>
            }
        })}
    }
}
