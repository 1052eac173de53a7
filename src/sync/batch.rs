//! Batch diffing for scratch-list edits.

use super::CollectionItem;

/// Requests needed to turn the mirror into the scratch list
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlan<T: CollectionItem> {
    /// Ids in the mirror that the scratch list no longer has
    pub deletes: Vec<T::Id>,
    /// Scratch items without an id
    pub creates: Vec<T>,
    /// Scratch items with an id whose contents changed
    pub updates: Vec<T>,
}

impl<T: CollectionItem> BatchPlan<T> {
    pub fn request_count(&self) -> usize {
        self.deletes.len() + self.creates.len() + self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.request_count() == 0
    }
}

/// Outcome of a batch save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub requested: usize,
    pub failed: usize,
    /// Whether the mirror was refreshed from the server afterwards
    pub reloaded: bool,
}

/// Classify every scratch entry against the mirror by id.
///
/// An entry whose id is present in both but whose contents are equal needs
/// no request. An id present only in the scratch list is still sent as an
/// update; the reload afterwards shows what the server kept.
pub fn plan_batch<T>(mirror: &[T], scratch: &[T]) -> BatchPlan<T>
where
    T: CollectionItem + PartialEq,
{
    let deletes = mirror
        .iter()
        .filter_map(T::id)
        .filter(|id| !scratch.iter().any(|item| item.id() == Some(*id)))
        .collect();

    let mut creates = Vec::new();
    let mut updates = Vec::new();
    for item in scratch {
        match item.id() {
            None => creates.push(item.clone()),
            Some(id) => {
                let unchanged = mirror
                    .iter()
                    .any(|existing| existing.id() == Some(id) && existing == item);
                if !unchanged {
                    updates.push(item.clone());
                }
            }
        }
    }

    BatchPlan { deletes, creates, updates }
}
