//! Skill Search Component
//!
//! Catalog search with a suggestion list. Arrow keys move the highlight,
//! Enter or Tab picks it.

use leptos::prelude::*;

use crate::models::CatalogSkill;
use crate::render::filter_catalog;

const MAX_SUGGESTIONS: usize = 8;

/// Skill picker over the catalog
///
/// Props:
/// - catalog: all skills that can be added
/// - query: text in the search box, owned by the form so it can reset it
/// - selected: the chosen skill; typing clears it until a suggestion is picked
#[component]
pub fn SkillSearch(
    catalog: ReadSignal<Vec<CatalogSkill>>,
    query: RwSignal<String>,
    selected: RwSignal<Option<CatalogSkill>>,
    #[prop(into)] invalid: Signal<bool>,
) -> impl IntoView {
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || {
        let text = query.get();
        if text.trim().is_empty() || selected.with(|s| s.is_some()) {
            return vec![];
        }
        catalog.with(|all| {
            filter_catalog(all, &text)
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let pick = move |skill: CatalogSkill| {
        query.set(skill.name.clone());
        selected.set(Some(skill));
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Enter" | "Tab" => {
                if let Some(skill) = sugg.get(selected_idx.get()).cloned() {
                    ev.prevent_default();
                    pick(skill);
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="skill-search position-relative">
            <input
                type="text"
                class="form-control"
                class:is-invalid=move || invalid.get()
                placeholder="Search skills..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    selected.set(None);
                    set_selected_idx.set(0);
                }
                on:keydown=on_keydown
            />
            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    return None;
                }
                let highlighted = selected_idx.get();
                Some(view! {
                    <div class="list-group position-absolute w-100 shadow-sm">
                        {sugg.into_iter().enumerate().map(|(i, skill)| {
                            let name = skill.name.clone();
                            view! {
                                <button
                                    type="button"
                                    class=if i == highlighted { "list-group-item list-group-item-action active" } else { "list-group-item list-group-item-action" }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        pick(skill.clone());
                                    }
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
