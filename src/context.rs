//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::{ApiClient, ProjectApi, SkillApi, SocialLinkApi};
use crate::store::{ProfileStore, StorePresenter};
use crate::sync::SyncController;

pub type SkillController = SyncController<SkillApi, StorePresenter>;
pub type ProjectController = SyncController<ProjectApi, StorePresenter>;
pub type SocialLinkController = SyncController<SocialLinkApi, StorePresenter>;

/// Client and collection controllers, shared by every panel.
///
/// The controllers are `!Send`, so they live in local storage; handles are
/// `Copy` and cheap to move into event handlers.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: ProfileStore,
    client: StoredValue<ApiClient, LocalStorage>,
    skills: StoredValue<Rc<SkillController>, LocalStorage>,
    projects: StoredValue<Rc<ProjectController>, LocalStorage>,
    social_links: StoredValue<Rc<SocialLinkController>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: ProfileStore, client: ApiClient) -> Self {
        let presenter = StorePresenter::new(store);
        Self {
            store,
            skills: StoredValue::new_local(Rc::new(SyncController::new(
                SkillApi::new(client.clone()),
                presenter,
            ))),
            projects: StoredValue::new_local(Rc::new(SyncController::new(
                ProjectApi::new(client.clone()),
                presenter,
            ))),
            social_links: StoredValue::new_local(Rc::new(SyncController::new(
                SocialLinkApi::new(client.clone()),
                presenter,
            ))),
            client: StoredValue::new_local(client),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn skills(&self) -> Rc<SkillController> {
        self.skills.get_value()
    }

    pub fn projects(&self) -> Rc<ProjectController> {
        self.projects.get_value()
    }

    pub fn social_links(&self) -> Rc<SocialLinkController> {
        self.social_links.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
