//! Collection sync controller.

use std::cell::{Cell, RefCell};

use futures::future::{join_all, LocalBoxFuture};
use futures::FutureExt;

use super::batch::{plan_batch, BatchReport};
use super::{capitalize, remove_item, replace_item, CollectionApi, CollectionItem, ItemId, Presenter};
use crate::error::{ApiError, ApiResult, FieldError, SyncError};
use crate::toast::Toast;
use crate::validation::Validate;

/// Owns the local mirror of one collection and drives its view.
///
/// All state sits behind `Cell`/`RefCell` so operations take `&self` and can
/// be shared through an `Rc` by UI callbacks. No borrow is held across an
/// `.await`.
pub struct SyncController<A: CollectionApi, P> {
    api: A,
    presenter: P,
    mirror: RefCell<Vec<A::Item>>,
    /// Newest issued `load()`; older responses are dropped
    load_ticket: Cell<u64>,
}

impl<A, P> SyncController<A, P>
where
    A: CollectionApi,
    P: Presenter<A::Item>,
{
    pub fn new(api: A, presenter: P) -> Self {
        Self {
            api,
            presenter,
            mirror: RefCell::new(Vec::new()),
            load_ticket: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the mirror in display order
    pub fn items(&self) -> Vec<A::Item> {
        self.mirror.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.mirror.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirror.borrow().is_empty()
    }

    pub fn find(&self, id: ItemId<A>) -> Option<A::Item> {
        self.mirror
            .borrow()
            .iter()
            .find(|item| item.id() == Some(id))
            .cloned()
    }

    /// Replace the mirror with data embedded in the page, without a request
    pub fn seed(&self, items: Vec<A::Item>) {
        *self.mirror.borrow_mut() = items;
        self.render();
    }

    /// Fetch the whole collection and replace the mirror.
    ///
    /// On failure the mirror keeps its previous contents.
    pub async fn load(&self) -> Result<(), SyncError> {
        let ticket = self.load_ticket.get() + 1;
        self.load_ticket.set(ticket);

        let items = match self.api.list().await {
            Ok(items) => items,
            Err(e) => {
                log::error!("Error loading {}s: {}", self.api.noun(), e);
                return Err(e.into());
            }
        };

        if ticket != self.load_ticket.get() {
            log::debug!("Dropping stale {} list (load #{})", self.api.noun(), ticket);
            return Ok(());
        }

        log::info!("Loaded {} {}s", items.len(), self.api.noun());
        *self.mirror.borrow_mut() = items;
        self.render();
        Ok(())
    }

    /// Validate, check for duplicates, then create and append
    pub async fn add(&self, draft: A::Draft) -> Result<A::Item, SyncError> {
        let mut errors = draft.validate();
        if errors.is_empty() && self.contains_duplicate(&draft) {
            errors.push(FieldError::AlreadyExists);
        }
        self.presenter.field_errors(&errors);
        if !errors.is_empty() {
            log::warn!("Cannot add {}: {:?}", self.api.noun(), errors);
            return Err(SyncError::Invalid(errors));
        }

        match self.api.create(&draft).await {
            Ok(item) => {
                self.mirror.borrow_mut().push(item.clone());
                self.render();
                self.presenter.notify(Toast::success(format!(
                    "{} added successfully",
                    capitalize(self.api.noun())
                )));
                Ok(item)
            }
            Err(e) => {
                log::error!("Error adding {}: {}", self.api.noun(), e);
                self.presenter.notify(self.failure_toast(&e, "add", None));
                Err(e.into())
            }
        }
    }

    /// Send `patch` for the item with `id` and store the server's version
    pub async fn update(&self, id: ItemId<A>, patch: A::Patch) -> Result<A::Item, SyncError> {
        let current = self
            .find(id)
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;

        let errors = patch.validate();
        self.presenter.field_errors(&errors);
        if !errors.is_empty() {
            return Err(SyncError::Invalid(errors));
        }

        if self.api.is_noop(&current, &patch) {
            self.presenter.notify(Toast::info("No changes to save"));
            return Ok(current);
        }

        match self.api.update(&current, &patch).await {
            Ok(updated) => {
                if !replace_item(&mut self.mirror.borrow_mut(), updated.clone()) {
                    log::warn!("Updated {} #{} is no longer listed", self.api.noun(), id);
                }
                self.render();
                self.presenter.notify(Toast::success(format!(
                    "{} updated successfully",
                    capitalize(self.api.noun())
                )));
                Ok(updated)
            }
            Err(e) => {
                log::error!("Error updating {} #{}: {}", self.api.noun(), id, e);
                self.presenter
                    .notify(self.failure_toast(&e, "update", Some(&current.label())));
                Err(e.into())
            }
        }
    }

    /// Delete the item with `id`; it leaves the mirror only on success
    pub async fn remove(&self, id: ItemId<A>) -> Result<(), SyncError> {
        let label = self
            .find(id)
            .map(|item| item.label())
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;

        match self.api.delete(id).await {
            Ok(()) => {
                remove_item(&mut self.mirror.borrow_mut(), id);
                self.render();
                self.presenter.notify(Toast::success(format!(
                    "{} removed successfully: {}",
                    capitalize(self.api.noun()),
                    label
                )));
                Ok(())
            }
            Err(e) => {
                log::error!("Error removing {} #{}: {}", self.api.noun(), id, e);
                self.presenter.notify(self.failure_toast(&e, "remove", Some(&label)));
                Err(e.into())
            }
        }
    }

    fn contains_duplicate(&self, draft: &A::Draft) -> bool {
        self.mirror
            .borrow()
            .iter()
            .any(|existing| self.api.is_duplicate(existing, draft))
    }

    fn render(&self) {
        let items = self.mirror.borrow();
        self.presenter.render(&items);
    }

    fn failure_toast(&self, err: &ApiError, verb: &str, label: Option<&str>) -> Toast {
        if let Some(message) = err.server_message() {
            return Toast::error(message);
        }
        match label {
            Some(label) => Toast::error(format!("Failed to {} {}: {}", verb, self.api.noun(), label)),
            None => Toast::error(format!("Failed to {} {}", verb, self.api.noun())),
        }
    }
}

impl<A, P, T> SyncController<A, P>
where
    A: CollectionApi<Item = T, Draft = T, Patch = T>,
    T: CollectionItem + PartialEq + Validate,
    P: Presenter<T>,
{
    /// Commit a scratch copy of the collection.
    ///
    /// Deletes, creates and updates are issued together and awaited as a
    /// group; a failed request does not cancel the others. The collection is
    /// then reloaded from the server, so the mirror reflects only the
    /// requests that succeeded.
    ///
    /// Once requests have gone out the result is always `Ok`; failures are
    /// counted in the report, so callers never resubmit the same scratch list.
    pub async fn batch_save(&self, scratch: Vec<T>) -> Result<BatchReport, SyncError> {
        let mut errors: Vec<FieldError> = Vec::new();
        for error in scratch.iter().flat_map(T::validate) {
            if !errors.contains(&error) {
                errors.push(error);
            }
        }
        self.presenter.field_errors(&errors);
        if !errors.is_empty() {
            return Err(SyncError::Invalid(errors));
        }

        let mirror = self.items();
        let plan = plan_batch(&mirror, &scratch);
        if plan.is_empty() {
            self.render();
            return Ok(BatchReport::default());
        }

        let api = &self.api;
        let mut requests: Vec<LocalBoxFuture<'_, ApiResult<()>>> = Vec::with_capacity(plan.request_count());
        for id in plan.deletes.iter().copied() {
            requests.push(async move { api.delete(id).await }.boxed_local());
        }
        for item in &plan.creates {
            requests.push(async move { api.create(item).await.map(drop) }.boxed_local());
        }
        for item in &plan.updates {
            let current = mirror
                .iter()
                .find(|existing| existing.id() == item.id())
                .cloned()
                .unwrap_or_else(|| item.clone());
            requests.push(async move { api.update(&current, item).await.map(drop) }.boxed_local());
        }

        let results = join_all(requests).await;
        let failed = results.iter().filter(|result| result.is_err()).count();
        for err in results.iter().filter_map(|result| result.as_ref().err()) {
            log::error!("Error saving {}: {}", self.api.noun(), err);
        }
        let reloaded = self.load().await.is_ok();
        let report = BatchReport {
            requested: results.len(),
            failed,
            reloaded,
        };

        let noun = self.api.noun();
        let mut toast = if failed == 0 {
            Toast::success(format!("{}s saved successfully", capitalize(noun)))
        } else {
            Toast::error(format!(
                "{} of {} changes to {}s could not be saved",
                failed, report.requested, noun
            ))
        };
        if !reloaded {
            toast = Toast::error(format!(
                "{}. Failed to reload {}s, refresh the page",
                toast.message.trim_end_matches('.'),
                noun
            ));
        }
        self.presenter.notify(toast);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingSkill, Platform, SkillDraft, SkillLevel, SocialLink};
    use crate::sync::Presenter;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use std::rc::Rc;

    // ========================
    // Test Doubles
    // ========================

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create,
        Update(u32),
        Delete(u32),
    }

    /// In-memory server for skills
    #[derive(Default)]
    struct FakeSkillApi {
        server: RefCell<Vec<ListingSkill>>,
        calls: RefCell<Vec<Call>>,
        fail_list: Cell<bool>,
        fail_create: Cell<bool>,
        fail_delete: Cell<bool>,
        /// Next list call waits for this instead of answering at once
        held_list: RefCell<Option<oneshot::Receiver<Vec<ListingSkill>>>>,
    }

    impl FakeSkillApi {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl CollectionApi for FakeSkillApi {
        type Item = ListingSkill;
        type Draft = SkillDraft;
        type Patch = SkillLevel;

        fn noun(&self) -> &'static str {
            "skill"
        }

        async fn list(&self) -> ApiResult<Vec<ListingSkill>> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                return Err(ApiError::Transport("offline".to_string()));
            }
            let held = self.held_list.borrow_mut().take();
            if let Some(answer) = held {
                return answer
                    .await
                    .map_err(|_| ApiError::Transport("cancelled".to_string()));
            }
            Ok(self.server.borrow().clone())
        }

        async fn create(&self, draft: &SkillDraft) -> ApiResult<ListingSkill> {
            self.calls.borrow_mut().push(Call::Create);
            if self.fail_create.get() {
                return Err(ApiError::Status { status: 500 });
            }
            let skill = ListingSkill {
                id: draft.skill_id.unwrap_or_default(),
                name: draft.name.trim().to_string(),
                level: draft.level.and_then(SkillLevel::from_value).unwrap_or(SkillLevel::Beginner),
            };
            self.server.borrow_mut().push(skill.clone());
            Ok(skill)
        }

        async fn update(&self, current: &ListingSkill, level: &SkillLevel) -> ApiResult<ListingSkill> {
            self.calls.borrow_mut().push(Call::Update(current.id));
            Ok(ListingSkill { level: *level, ..current.clone() })
        }

        async fn delete(&self, id: u32) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id));
            if self.fail_delete.get() {
                return Err(ApiError::Server("Skill is required by a listing".to_string()));
            }
            self.server.borrow_mut().retain(|s| s.id != id);
            Ok(())
        }

        fn is_duplicate(&self, existing: &ListingSkill, draft: &SkillDraft) -> bool {
            Some(existing.id) == draft.skill_id && existing.name == draft.name.trim()
        }

        fn is_noop(&self, current: &ListingSkill, level: &SkillLevel) -> bool {
            current.level == *level
        }
    }

    /// In-memory server for social links with per-id failure injection
    #[derive(Default)]
    struct FakeLinkApi {
        server: RefCell<Vec<SocialLink>>,
        calls: RefCell<Vec<Call>>,
        next_id: Cell<u32>,
        fail_update_of: Cell<Option<u32>>,
        fail_list: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl CollectionApi for FakeLinkApi {
        type Item = SocialLink;
        type Draft = SocialLink;
        type Patch = SocialLink;

        fn noun(&self) -> &'static str {
            "social link"
        }

        async fn list(&self) -> ApiResult<Vec<SocialLink>> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list.get() {
                return Err(ApiError::Transport("offline".to_string()));
            }
            Ok(self.server.borrow().clone())
        }

        async fn create(&self, draft: &SocialLink) -> ApiResult<SocialLink> {
            self.calls.borrow_mut().push(Call::Create);
            let id = self.next_id.get() + 100;
            self.next_id.set(self.next_id.get() + 1);
            let link = SocialLink { id: Some(id), ..draft.clone() };
            self.server.borrow_mut().push(link.clone());
            Ok(link)
        }

        async fn update(&self, current: &SocialLink, patch: &SocialLink) -> ApiResult<SocialLink> {
            let id = current.id.unwrap_or_default();
            self.calls.borrow_mut().push(Call::Update(id));
            if self.fail_update_of.get() == Some(id) {
                return Err(ApiError::Transport("connection reset".to_string()));
            }
            let mut server = self.server.borrow_mut();
            if let Some(slot) = server.iter_mut().find(|l| l.id == Some(id)) {
                *slot = patch.clone();
            }
            Ok(patch.clone())
        }

        async fn delete(&self, id: u32) -> ApiResult<()> {
            self.calls.borrow_mut().push(Call::Delete(id));
            self.server.borrow_mut().retain(|l| l.id != Some(id));
            Ok(())
        }
    }

    /// Records everything the controller presents
    struct Recorder<T> {
        renders: RefCell<Vec<Vec<T>>>,
        toasts: RefCell<Vec<Toast>>,
        errors: RefCell<Vec<FieldError>>,
    }

    impl<T> Default for Recorder<T> {
        fn default() -> Self {
            Self {
                renders: RefCell::new(Vec::new()),
                toasts: RefCell::new(Vec::new()),
                errors: RefCell::new(Vec::new()),
            }
        }
    }

    impl<T: Clone> Presenter<T> for Rc<Recorder<T>> {
        fn render(&self, items: &[T]) {
            self.renders.borrow_mut().push(items.to_vec());
        }

        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }

        fn field_errors(&self, errors: &[FieldError]) {
            *self.errors.borrow_mut() = errors.to_vec();
        }
    }

    impl<T: Clone> Recorder<T> {
        fn last_render(&self) -> Vec<T> {
            self.renders.borrow().last().cloned().unwrap_or_default()
        }

        fn last_toast(&self) -> Option<Toast> {
            self.toasts.borrow().last().cloned()
        }
    }

    fn skill(id: u32, name: &str, level: SkillLevel) -> ListingSkill {
        ListingSkill { id, name: name.to_string(), level }
    }

    fn draft(id: Option<u32>, name: &str, level: Option<u8>) -> SkillDraft {
        SkillDraft { skill_id: id, name: name.to_string(), level }
    }

    fn link(id: Option<u32>, platform: Platform, url: &str) -> SocialLink {
        SocialLink { id, platform, url: url.to_string(), display_name: None }
    }

    fn skills_controller(
        server: Vec<ListingSkill>,
    ) -> (SyncController<FakeSkillApi, Rc<Recorder<ListingSkill>>>, Rc<Recorder<ListingSkill>>) {
        let api = FakeSkillApi::default();
        *api.server.borrow_mut() = server;
        let recorder = Rc::new(Recorder::default());
        (SyncController::new(api, recorder.clone()), recorder)
    }

    fn links_controller(
        server: Vec<SocialLink>,
    ) -> (SyncController<FakeLinkApi, Rc<Recorder<SocialLink>>>, Rc<Recorder<SocialLink>>) {
        let api = FakeLinkApi::default();
        *api.server.borrow_mut() = server;
        let recorder = Rc::new(Recorder::default());
        (SyncController::new(api, recorder.clone()), recorder)
    }

    // ========================
    // load / seed
    // ========================

    #[test]
    fn test_load_replaces_mirror_and_renders() {
        let (ctrl, view) = skills_controller(vec![skill(1, "Rust", SkillLevel::Advanced)]);
        ctrl.seed(vec![skill(9, "Stale", SkillLevel::Beginner)]);

        block_on(ctrl.load()).unwrap();

        assert_eq!(ctrl.items(), vec![skill(1, "Rust", SkillLevel::Advanced)]);
        assert_eq!(view.last_render(), ctrl.items());
    }

    #[test]
    fn test_failed_load_keeps_mirror() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(3, "Go", SkillLevel::Beginner)]);
        ctrl.api().fail_list.set(true);

        let result = block_on(ctrl.load());

        assert!(matches!(result, Err(SyncError::Api(ApiError::Transport(_)))));
        assert_eq!(ctrl.items(), vec![skill(3, "Go", SkillLevel::Beginner)]);
        assert_eq!(view.renders.borrow().len(), 1);
    }

    #[test]
    fn test_stale_load_response_is_dropped() {
        let (ctrl, view) = skills_controller(vec![skill(2, "Newer", SkillLevel::Advanced)]);
        let (answer, held) = oneshot::channel();
        *ctrl.api().held_list.borrow_mut() = Some(held);

        // The first load stalls until the second one has finished
        let slow = ctrl.load();
        let fast = async {
            ctrl.load().await.unwrap();
            let _ = answer.send(vec![skill(1, "Older", SkillLevel::Beginner)]);
        };
        let (slow_result, ()) = block_on(join(slow, fast));

        assert!(slow_result.is_ok());
        assert_eq!(ctrl.items(), vec![skill(2, "Newer", SkillLevel::Advanced)]);
        assert_eq!(view.renders.borrow().len(), 1);
    }

    #[test]
    fn test_seed_renders_without_request() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(3, "Go", SkillLevel::Beginner)]);
        assert!(ctrl.api().calls().is_empty());
        assert_eq!(view.renders.borrow().len(), 1);
    }

    // ========================
    // add
    // ========================

    #[test]
    fn test_add_with_empty_name_sends_nothing() {
        let (ctrl, view) = skills_controller(vec![]);

        let result = block_on(ctrl.add(draft(Some(1), "   ", Some(2))));

        assert_eq!(result, Err(SyncError::Invalid(vec![FieldError::NameRequired])));
        assert!(ctrl.api().calls().is_empty());
        assert_eq!(*view.errors.borrow(), vec![FieldError::NameRequired]);
    }

    #[test]
    fn test_add_with_invalid_level_sends_nothing() {
        let (ctrl, view) = skills_controller(vec![]);

        for level in [None, Some(0), Some(4), Some(10)] {
            let result = block_on(ctrl.add(draft(Some(1), "Rust", level)));
            assert_eq!(result, Err(SyncError::Invalid(vec![FieldError::LevelRequired])));
        }

        assert!(ctrl.api().calls().is_empty());
        assert_eq!(*view.errors.borrow(), vec![FieldError::LevelRequired]);
    }

    #[test]
    fn test_add_duplicate_rejected_without_request() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(5, "Rust", SkillLevel::Beginner)]);

        let result = block_on(ctrl.add(draft(Some(5), "Rust", Some(3))));

        assert_eq!(result, Err(SyncError::Invalid(vec![FieldError::AlreadyExists])));
        assert!(ctrl.api().calls().is_empty());
        assert_eq!(*view.errors.borrow(), vec![FieldError::AlreadyExists]);
        assert_eq!(ctrl.len(), 1);
    }

    #[test]
    fn test_add_same_name_different_id_is_not_duplicate() {
        let (ctrl, _view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(5, "Rust", SkillLevel::Beginner)]);

        block_on(ctrl.add(draft(Some(6), "Rust", Some(3)))).unwrap();

        assert_eq!(ctrl.len(), 2);
    }

    #[test]
    fn test_add_appends_server_item_once() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(1, "Go", SkillLevel::Beginner)]);

        let added = block_on(ctrl.add(draft(Some(2), " Rust ", Some(2)))).unwrap();

        let rendered = view.last_render();
        assert_eq!(rendered.last(), Some(&added));
        assert_eq!(rendered.iter().filter(|s| s.id == 2).count(), 1);
        assert_eq!(ctrl.api().calls(), vec![Call::Create]);
        assert!(view.errors.borrow().is_empty());
        assert_eq!(view.last_toast(), Some(Toast::success("Skill added successfully")));
    }

    #[test]
    fn test_failed_create_keeps_mirror_length() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(1, "Go", SkillLevel::Beginner)]);
        ctrl.api().fail_create.set(true);

        let result = block_on(ctrl.add(draft(Some(2), "Rust", Some(1))));

        assert!(matches!(result, Err(SyncError::Api(ApiError::Status { status: 500 }))));
        assert_eq!(ctrl.len(), 1);
        assert_eq!(view.last_toast(), Some(Toast::error("Failed to add skill")));
    }

    // ========================
    // update / remove
    // ========================

    #[test]
    fn test_update_replaces_entry() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(1, "Go", SkillLevel::Beginner), skill(2, "Rust", SkillLevel::Beginner)]);

        block_on(ctrl.update(2, SkillLevel::Advanced)).unwrap();

        assert_eq!(ctrl.find(2).map(|s| s.level), Some(SkillLevel::Advanced));
        assert_eq!(view.last_render()[1].level, SkillLevel::Advanced);
        assert_eq!(ctrl.api().calls(), vec![Call::Update(2)]);
    }

    #[test]
    fn test_update_without_change_sends_nothing() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(1, "Go", SkillLevel::Intermediate)]);

        block_on(ctrl.update(1, SkillLevel::Intermediate)).unwrap();

        assert!(ctrl.api().calls().is_empty());
        assert_eq!(view.last_toast(), Some(Toast::info("No changes to save")));
    }

    #[test]
    fn test_update_unknown_id() {
        let (ctrl, _view) = skills_controller(vec![]);
        let result = block_on(ctrl.update(42, SkillLevel::Advanced));
        assert_eq!(result, Err(SyncError::NotFound("42".to_string())));
        assert!(ctrl.api().calls().is_empty());
    }

    #[test]
    fn test_remove_drops_entry_from_render() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(1, "Go", SkillLevel::Beginner), skill(2, "Rust", SkillLevel::Beginner)]);

        block_on(ctrl.remove(1)).unwrap();

        assert!(view.last_render().iter().all(|s| s.id != 1));
        assert_eq!(view.last_toast(), Some(Toast::success("Skill removed successfully: Go")));
    }

    #[test]
    fn test_failed_remove_keeps_entry_and_shows_server_message() {
        let (ctrl, view) = skills_controller(vec![]);
        ctrl.seed(vec![skill(1, "Go", SkillLevel::Beginner)]);
        ctrl.api().fail_delete.set(true);

        assert!(block_on(ctrl.remove(1)).is_err());

        assert_eq!(ctrl.len(), 1);
        assert_eq!(view.last_toast(), Some(Toast::error("Skill is required by a listing")));
    }

    // ========================
    // batch_save
    // ========================

    #[test]
    fn test_batch_save_single_delete() {
        let server = vec![
            link(Some(1), Platform::Github, "https://github.com/me"),
            link(Some(2), Platform::Linkedin, "https://linkedin.com/in/me"),
        ];
        let (ctrl, view) = links_controller(server);
        block_on(ctrl.load()).unwrap();

        let mut scratch = ctrl.items();
        scratch.remove(0);
        let report = block_on(ctrl.batch_save(scratch)).unwrap();

        assert_eq!(report, BatchReport { requested: 1, failed: 0, reloaded: true });
        assert_eq!(ctrl.api().calls.borrow().clone(), vec![Call::List, Call::Delete(1), Call::List]);
        assert!(view.last_render().iter().all(|l| l.id != Some(1)));
    }

    #[test]
    fn test_batch_save_mixed_changes_then_reload() {
        let server = vec![
            link(Some(1), Platform::Github, "https://github.com/me"),
            link(Some(2), Platform::Medium, "https://medium.com/@me"),
        ];
        let (ctrl, _view) = links_controller(server);
        block_on(ctrl.load()).unwrap();

        let scratch = vec![
            link(Some(2), Platform::Medium, "https://medium.com/@me2"),
            link(None, Platform::Website, "https://me.dev"),
        ];
        let report = block_on(ctrl.batch_save(scratch)).unwrap();

        assert_eq!(report.requested, 3);
        let urls: Vec<String> = ctrl.items().into_iter().map(|l| l.url).collect();
        assert_eq!(urls, vec!["https://medium.com/@me2", "https://me.dev"]);
        assert!(ctrl.items().iter().all(|l| l.id.is_some()));
    }

    #[test]
    fn test_batch_save_partial_failure_still_reloads() {
        let server = vec![
            link(Some(1), Platform::Github, "https://github.com/old"),
            link(Some(2), Platform::Gitlab, "https://gitlab.com/me"),
        ];
        let (ctrl, view) = links_controller(server);
        block_on(ctrl.load()).unwrap();
        ctrl.api().fail_update_of.set(Some(1));

        let scratch = vec![
            link(Some(1), Platform::Github, "https://github.com/new"),
            link(None, Platform::Devto, "https://dev.to/me"),
        ];
        let report = block_on(ctrl.batch_save(scratch)).unwrap();

        assert_eq!(report, BatchReport { requested: 3, failed: 1, reloaded: true });
        let items = ctrl.items();
        assert_eq!(items[0].url, "https://github.com/old");
        assert!(items.iter().all(|l| l.id != Some(2)));
        assert!(items.iter().any(|l| l.url == "https://dev.to/me"));
        assert_eq!(
            view.last_toast(),
            Some(Toast::error("1 of 3 changes to social links could not be saved"))
        );
    }

    #[test]
    fn test_batch_save_reports_when_reload_fails() {
        let (ctrl, view) = links_controller(vec![]);
        block_on(ctrl.load()).unwrap();
        ctrl.api().fail_list.set(true);

        let scratch = vec![link(None, Platform::Github, "https://github.com/me")];
        let report = block_on(ctrl.batch_save(scratch)).unwrap();

        assert_eq!(report, BatchReport { requested: 1, failed: 0, reloaded: false });
        assert_eq!(ctrl.api().server.borrow().len(), 1);
        assert_eq!(
            view.last_toast(),
            Some(Toast::error(
                "Social links saved successfully. Failed to reload social links, refresh the page"
            ))
        );
        let creates = ctrl
            .api()
            .calls
            .borrow()
            .iter()
            .filter(|call| **call == Call::Create)
            .count();
        assert_eq!(creates, 1);
    }

    #[test]
    fn test_batch_save_rejects_blank_url() {
        let (ctrl, view) = links_controller(vec![]);
        let result = block_on(ctrl.batch_save(vec![SocialLink::unsaved()]));

        assert_eq!(result, Err(SyncError::Invalid(vec![FieldError::UrlRequired])));
        assert!(ctrl.api().calls.borrow().is_empty());
        assert_eq!(*view.errors.borrow(), vec![FieldError::UrlRequired]);
    }
}
