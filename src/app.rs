//! Profile Page App
//!
//! Builds the store and controllers, loads every collection on mount and
//! lays out the panels.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::ApiClient;
use crate::components::{AboutMeCard, LocationField, ProjectsPanel, SkillsPanel, SocialLinksPanel, ToastHost};
use crate::config::{self, AppConfig};
use crate::context::AppContext;
use crate::models::ProfileSeed;
use crate::store::{ProfileState, ProfileStore};

/// Page global carrying the server-rendered profile data
pub const PROFILE_DATA_GLOBAL: &str = "PROFILE_DATA";

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: ProfileStore = Store::new(ProfileState::default());
    let ctx = AppContext::new(store, ApiClient::new(config));
    provide_context(store);
    provide_context(ctx);

    let seed = config::read_global::<ProfileSeed>(PROFILE_DATA_GLOBAL).unwrap_or_default();

    // Projects embedded in the page skip the first request
    let seeded_projects = match seed.projects {
        Some(projects) => {
            ctx.projects().seed(projects);
            true
        }
        None => false,
    };

    // Load collections on mount
    Effect::new(move |_| {
        let skills = ctx.skills();
        let projects = ctx.projects();
        let social_links = ctx.social_links();
        spawn_local(async move {
            // Failures are logged by the controllers; the panels stay empty
            let _ = skills.load().await;
            if !seeded_projects {
                let _ = projects.load().await;
            }
            let _ = social_links.load().await;
        });
    });

    view! {
        <div class="container py-4 profile-page">
            <div class="row">
                <div class="col-lg-4">
                    <AboutMeCard initial=seed.about_me />
                    <section class="card mb-4">
                        <div class="card-body">
                            <LocationField initial=seed.location />
                        </div>
                    </section>
                    <SocialLinksPanel />
                </div>
                <div class="col-lg-8">
                    <SkillsPanel />
                    <ProjectsPanel />
                </div>
            </div>
            <ToastHost />
        </div>
    }
}
