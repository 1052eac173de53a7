//! Collection Sync
//!
//! Keeps a local mirror of a server-side collection (skills, projects,
//! social links) consistent with the server through create/update/delete
//! requests, re-rendering after every change.
//!
//! The API and the presentation layer are trait seams so the controller can
//! run against the browser (`reqwest` + Leptos store) or an in-memory fake.

mod batch;
mod controller;

use std::fmt;

use async_trait::async_trait;

use crate::error::{ApiResult, FieldError};
use crate::toast::Toast;
use crate::validation::Validate;

pub use batch::BatchReport;
pub use controller::SyncController;

/// Record owned by the server.
///
/// `id()` is `None` until the server has stored the record.
pub trait CollectionItem: Clone {
    type Id: Copy + Eq + fmt::Debug + fmt::Display;

    fn id(&self) -> Option<Self::Id>;

    /// Human-readable name used in notifications
    fn label(&self) -> String;
}

/// Identifier type of an API's items
pub type ItemId<A> = <<A as CollectionApi>::Item as CollectionItem>::Id;

/// REST surface of one collection
#[async_trait(?Send)]
pub trait CollectionApi {
    type Item: CollectionItem;
    /// Input for a create request
    type Draft: Validate;
    /// Input for an update request
    type Patch: Validate;

    /// Singular noun used in notifications, e.g. "skill"
    fn noun(&self) -> &'static str;

    async fn list(&self) -> ApiResult<Vec<Self::Item>>;

    async fn create(&self, draft: &Self::Draft) -> ApiResult<Self::Item>;

    async fn update(&self, current: &Self::Item, patch: &Self::Patch) -> ApiResult<Self::Item>;

    async fn delete(&self, id: ItemId<Self>) -> ApiResult<()>;

    /// Whether `draft` would duplicate an item already in the mirror
    fn is_duplicate(&self, _existing: &Self::Item, _draft: &Self::Draft) -> bool {
        false
    }

    /// Whether applying `patch` would leave `current` unchanged
    fn is_noop(&self, _current: &Self::Item, _patch: &Self::Patch) -> bool {
        false
    }
}

/// Output side of a controller: the view and the notification area
pub trait Presenter<T> {
    /// Re-render the whole collection
    fn render(&self, items: &[T]);

    fn notify(&self, toast: Toast);

    /// Show inline field errors; an empty slice clears them
    fn field_errors(&self, errors: &[FieldError]);
}

// ========================
// Mirror Helpers
// ========================

/// Replace the item with the same id; returns false if none matched
pub fn replace_item<T: CollectionItem>(items: &mut [T], updated: T) -> bool {
    let Some(id) = updated.id() else {
        return false;
    };
    match items.iter_mut().find(|item| item.id() == Some(id)) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove every item with `id`
pub fn remove_item<T: CollectionItem>(items: &mut Vec<T>, id: T::Id) {
    items.retain(|item| item.id() != Some(id));
}

/// Upper-case the first letter of a noun for the start of a message
pub(crate) fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
