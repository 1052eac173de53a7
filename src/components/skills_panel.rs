//! Skills Panel
//!
//! Skill list with level bars, plus the add and edit dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::modal_frame::{has_field_error, FieldErrorList, ModalFrame};
use crate::components::skill_search::SkillSearch;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::error::FieldError;
use crate::models::{CatalogSkill, SkillDraft, SkillLevel};
use crate::render::{level_bars, skill_rows};
use crate::store::{store_close_modal, store_open_modal, store_notify, Modal, ProfileStateStoreFields};
use crate::toast::Toast;

#[component]
pub fn SkillsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="card mb-4" id="skills-panel">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">"Skills"</h5>
                <button
                    type="button"
                    class="btn btn-sm btn-primary"
                    on:click=move |_| store_open_modal(&store, Modal::AddSkill)
                >
                    <i class="bi bi-plus-lg me-1"></i>"Add Skill"
                </button>
            </div>
            <div class="card-body">
                <Show
                    when=move || !store.skills().read().is_empty()
                    fallback=|| view! { <p class="text-muted mb-0">"No skills added yet."</p> }
                >
                    <For
                        each=move || skill_rows(&store.skills().get())
                        key=|row| (row.id, row.level)
                        let:row
                    >
                        <div class="skill-item mb-3" id=row.dom_id.clone()>
                            <div class="d-flex justify-content-between align-items-center mb-1">
                                <span class="fw-semibold">{row.name.clone()}</span>
                                <span class="d-flex align-items-center gap-2">
                                    <small class="text-muted">{row.level_label}</small>
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-link p-0"
                                        aria-label="Edit skill"
                                        on:click=move |_| store_open_modal(&store, Modal::EditSkill(row.id))
                                    >
                                        <i class="bi bi-pencil"></i>
                                    </button>
                                </span>
                            </div>
                            <div class="progress" style="height: 6px;">
                                <div
                                    class=format!("progress-bar {}", row.bar_class)
                                    role="progressbar"
                                    style=format!("width: {}", row.bar_width)
                                ></div>
                            </div>
                        </div>
                    </For>
                </Show>
            </div>
        </section>
        <AddSkillModal />
        <EditSkillModal />
    }
}

/// Three clickable bars selecting a level
#[component]
fn LevelPicker(
    selected: RwSignal<Option<SkillLevel>>,
    #[prop(optional, into)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="level-picker d-flex gap-1" class:is-invalid=move || invalid.get()>
            {move || level_bars(selected.get()).into_iter().map(|(level, class)| view! {
                <button
                    type="button"
                    class=format!("level-bar flex-fill border-0 rounded {}", class)
                    style="height: 12px;"
                    title=level.label()
                    on:click=move |_| selected.set(Some(level))
                ></button>
            }).collect_view()}
        </div>
        <small class="text-muted">
            {move || selected.get().map(SkillLevel::label).unwrap_or("Select a level")}
        </small>
    }
}

#[component]
fn AddSkillModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (catalog, set_catalog) = signal(Vec::<CatalogSkill>::new());
    let query = RwSignal::new(String::new());
    let chosen = RwSignal::new(None::<CatalogSkill>);
    let level = RwSignal::new(None::<SkillLevel>);
    let (saving, set_saving) = signal(false);

    let reset = move || {
        query.set(String::new());
        chosen.set(None);
        level.set(None);
    };

    // Load the catalog the first time the dialog opens
    Effect::new(move |_| {
        if store.modal().get() != Some(Modal::AddSkill) || !catalog.read_untracked().is_empty() {
            return;
        }
        let skills = ctx.skills();
        spawn_local(async move {
            match skills.api().fetch_catalog().await {
                Ok(loaded) => set_catalog.set(loaded),
                Err(e) => {
                    log::error!("Error loading skill catalog: {}", e);
                    store_notify(&store, Toast::error("Failed to load skills"));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let draft = match chosen.get() {
            Some(skill) => SkillDraft {
                skill_id: Some(skill.id),
                name: skill.name,
                level: level.get().map(SkillLevel::value),
            },
            None => SkillDraft {
                skill_id: None,
                name: query.get(),
                level: level.get().map(SkillLevel::value),
            },
        };
        let skills = ctx.skills();
        set_saving.set(true);
        spawn_local(async move {
            if skills.add(draft).await.is_ok() {
                store_close_modal(&store, &Modal::AddSkill);
                reset();
            }
            set_saving.set(false);
        });
    };

    view! {
        <ModalFrame modal=Modal::AddSkill title="Add Skill">
            <form on:submit=on_submit>
                <div class="mb-3">
                    <label class="form-label">"Skill"</label>
                    <SkillSearch
                        catalog=catalog
                        query=query
                        selected=chosen
                        invalid=Signal::derive(has_field_error(FieldError::NameRequired))
                    />
                </div>
                <div class="mb-3">
                    <label class="form-label">"Level"</label>
                    <LevelPicker
                        selected=level
                        invalid=Signal::derive(has_field_error(FieldError::LevelRequired))
                    />
                </div>
                <FieldErrorList />
                <div class="d-flex justify-content-end gap-2 mt-3">
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        on:click=move |_| {
                            store_close_modal(&store, &Modal::AddSkill);
                            reset();
                        }
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        "Add"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn EditSkillModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let level = RwSignal::new(None::<SkillLevel>);
    let editing = move || match store.modal().get() {
        Some(Modal::EditSkill(id)) => Some(id),
        _ => None,
    };

    // Seed the picker from the skill being edited
    Effect::new(move |_| {
        if let Some(id) = editing() {
            level.set(ctx.skills().find(id).map(|skill| skill.level));
        }
    });

    let title = Signal::derive(move || {
        let Some(id) = editing() else {
            return String::new();
        };
        store
            .skills()
            .read()
            .iter()
            .find(|skill| skill.id == id)
            .map(|skill| format!("Edit {}", skill.name))
            .unwrap_or_default()
    });

    let save = move |_| {
        let (Some(id), Some(new_level)) = (editing(), level.get()) else {
            return;
        };
        let skills = ctx.skills();
        spawn_local(async move {
            if skills.update(id, new_level).await.is_ok() {
                store_close_modal(&store, &Modal::EditSkill(id));
            }
        });
    };

    let remove = move |_| {
        let Some(id) = editing() else {
            return;
        };
        let skills = ctx.skills();
        spawn_local(async move {
            if skills.remove(id).await.is_ok() {
                store_close_modal(&store, &Modal::EditSkill(id));
            }
        });
    };

    view! {
        {move || editing().map(|id| view! {
            <ModalFrame modal=Modal::EditSkill(id) title=title>
                <div class="mb-3">
                    <label class="form-label">"Level"</label>
                    <LevelPicker selected=level />
                </div>
                <div class="d-flex justify-content-between align-items-center mt-3">
                    <DeleteConfirmButton button_class="btn btn-outline-danger" on_confirm=remove />
                    <button type="button" class="btn btn-primary" on:click=save>
                        "Save"
                    </button>
                </div>
            </ModalFrame>
        })}
    }
}
