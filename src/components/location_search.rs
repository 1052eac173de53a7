//! Location Search Component
//!
//! Debounced geocoder lookup; picking a suggestion saves the location.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::LocationBackend;
use crate::context::use_app_context;
use crate::location::LocationSearch;
use crate::store::store_notify;
use crate::toast::Toast;

#[component]
pub fn LocationField(#[prop(into)] initial: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let geocoder = ctx.client().config().geocoder.clone();
    let debounce_ms = geocoder.debounce_ms;

    let search = RwSignal::new(LocationSearch::new(&geocoder));
    search.update(|s| {
        s.input(&initial);
        s.clear_suggestions();
    });

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        let mut ticket = None;
        search.update(|s| ticket = s.input(&raw));
        let Some(ticket) = ticket else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if !search.with_untracked(|s| s.is_current(&ticket)) {
                return;
            }
            match client.search_locations(&ticket.query).await {
                Ok(results) => search.update(|s| {
                    s.accept(&ticket, results);
                }),
                Err(e) => log::warn!("Location search failed for {:?}: {}", ticket.query, e),
            }
        });
    };

    let choose = move |place_id: u64| {
        let mut chosen = None;
        search.update(|s| chosen = s.select(place_id));
        let Some(location) = chosen else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            match client.save_location(&location).await {
                Ok(()) => store_notify(&store, Toast::success("Location updated successfully")),
                Err(e) => {
                    log::error!("Error updating location: {}", e);
                    let message = e.server_message().unwrap_or("Failed to update location").to_string();
                    store_notify(&store, Toast::error(message));
                }
            }
        });
    };

    view! {
        <div class="location-search position-relative mb-3">
            <label class="form-label" for="location-input">"Location"</label>
            <input
                id="location-input"
                type="text"
                class="form-control"
                placeholder="Start typing a city..."
                autocomplete="off"
                prop:value=move || search.with(|s| s.query().to_string())
                on:input=on_input
            />
            {move || {
                let suggestions = search.with(|s| s.suggestions().to_vec());
                if suggestions.is_empty() {
                    return None;
                }
                Some(view! {
                    <div class="list-group position-absolute w-100 shadow-sm">
                        {suggestions.into_iter().map(|place| {
                            let place_id = place.place_id;
                            view! {
                                <button
                                    type="button"
                                    class="list-group-item list-group-item-action"
                                    on:click=move |_| choose(place_id)
                                >
                                    <i class="bi bi-geo-alt me-2"></i>
                                    {place.display_name}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}
        </div>
    }
}
