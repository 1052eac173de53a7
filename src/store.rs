//! Profile State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Controllers
//! write their mirrors here through `StorePresenter`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::FieldError;
use crate::models::{ListingSkill, Project, SocialLink};
use crate::sync::Presenter;
use crate::toast::{Toast, ToastSlot};

/// Dialog currently shown. At most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    AddSkill,
    EditSkill(u32),
    AddProject,
    EditProject(u32),
    /// Two-step project delete holding the pending id
    ConfirmDeleteProject(u32),
    SocialLinks,
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ProfileState {
    pub skills: Vec<ListingSkill>,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
    /// Inline errors of the form in the open modal
    pub field_errors: Vec<FieldError>,
    pub toast: ToastSlot,
    pub modal: Option<Modal>,
}

pub type ProfileStore = Store<ProfileState>;

pub fn use_profile_store() -> ProfileStore {
    expect_context::<ProfileStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open `modal`, replacing any other, and clear stale field errors
pub fn store_open_modal(store: &ProfileStore, modal: Modal) {
    store.field_errors().write().clear();
    store.modal().set(Some(modal));
}

/// Close `modal` if it is still the open one
pub fn store_close_modal(store: &ProfileStore, modal: &Modal) {
    let closed = close_if_open(&mut store.modal().write(), modal);
    if closed {
        store.field_errors().write().clear();
    }
}

pub fn store_notify(store: &ProfileStore, toast: Toast) {
    store.toast().write().show(toast);
}

pub fn store_dismiss_toast(store: &ProfileStore) {
    store.toast().write().dismiss();
}

/// Hide the toast shown under `seq`; a newer toast stays
pub fn store_expire_toast(store: &ProfileStore, seq: u64) {
    if store.toast().with_untracked(|slot| slot.is_showing(seq)) {
        store_dismiss_toast(store);
    }
}

/// Whether the current modal is `modal`
pub fn is_open(current: &Option<Modal>, modal: &Modal) -> bool {
    current.as_ref() == Some(modal)
}

/// Close `current` only when it still shows `modal`
fn close_if_open(current: &mut Option<Modal>, modal: &Modal) -> bool {
    if is_open(current, modal) {
        *current = None;
        true
    } else {
        false
    }
}

// ========================
// Presenter
// ========================

/// Renders controller mirrors into the store
#[derive(Clone, Copy)]
pub struct StorePresenter {
    store: ProfileStore,
}

impl StorePresenter {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    fn show_toast(&self, toast: Toast) {
        store_notify(&self.store, toast);
    }

    fn show_field_errors(&self, errors: &[FieldError]) {
        *self.store.field_errors().write() = errors.to_vec();
    }
}

impl Presenter<ListingSkill> for StorePresenter {
    fn render(&self, items: &[ListingSkill]) {
        *self.store.skills().write() = items.to_vec();
    }

    fn notify(&self, toast: Toast) {
        self.show_toast(toast);
    }

    fn field_errors(&self, errors: &[FieldError]) {
        self.show_field_errors(errors);
    }
}

impl Presenter<Project> for StorePresenter {
    fn render(&self, items: &[Project]) {
        *self.store.projects().write() = items.to_vec();
    }

    fn notify(&self, toast: Toast) {
        self.show_toast(toast);
    }

    fn field_errors(&self, errors: &[FieldError]) {
        self.show_field_errors(errors);
    }
}

impl Presenter<SocialLink> for StorePresenter {
    fn render(&self, items: &[SocialLink]) {
        *self.store.social_links().write() = items.to_vec();
    }

    fn notify(&self, toast: Toast) {
        self.show_toast(toast);
    }

    fn field_errors(&self, errors: &[FieldError]) {
        self.show_field_errors(errors);
    }
}
