//! # Review List Manager
//!
//! The manager is the single entry point for every review operation,
//! whatever the UI. It owns three things:
//!
//! - the review list, loaded once from the store,
//! - the store and the slot key the list is written to,
//! - the current [`EditSession`].
//!
//! Each operation dispatches to the pure command in `commands/*.rs`, then
//! writes the whole list back if the command reports a change.
//!
//! ## Failure Model
//!
//! Operations never fail. Blank input and unknown ids are silent no-ops.
//! A failed write is logged and reported as a warning message in the
//! returned [`CmdResult`]; the in-memory list keeps the change so the
//! next successful write catches the store up.
//!
//! ## Generic Over SlotStore
//!
//! - Production: `ReviewManager<FileStore>`
//! - Testing: `ReviewManager<InMemoryStore>`

use crate::commands::{self, load::SlotState, CmdMessage, CmdResult};
use crate::config::ReelConfig;
use crate::error::Result;
use crate::model::{DraftField, EditSession, ReviewId, ReviewList};
use crate::store::{self, SlotStore};
use chrono::Utc;
use std::path::PathBuf;
use tracing::{info, warn};

pub struct ReviewManager<S: SlotStore> {
    store: S,
    key: String,
    reviews: ReviewList,
    session: EditSession,
    reseed_when_empty: bool,
}

impl<S: SlotStore> ReviewManager<S> {
    /// Read the review list from `store`, seeding it when the slot was never
    /// initialized. Read failures count as "never initialized".
    pub fn load(store: S, config: &ReelConfig) -> (Self, CmdResult) {
        let key = config.storage_key.clone();
        let state = match store::load_list(&store, &key) {
            Ok(Some(list)) => SlotState::Present(list),
            Ok(None) => SlotState::Missing,
            Err(e) => SlotState::Unreadable(e.to_string()),
        };

        let (reviews, result) = commands::load::run(state, config.reseed_when_empty);
        let mut manager = Self {
            store,
            key,
            reviews,
            session: EditSession::Idle,
            reseed_when_empty: config.reseed_when_empty,
        };
        let result = manager.persist(result);
        (manager, result)
    }

    pub fn reviews(&self) -> &ReviewList {
        &self.reviews
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn slot_path(&self) -> Result<PathBuf> {
        self.store.slot_path(&self.key)
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.reviews, &self.session)
    }

    pub fn add(&mut self, title: &str, body: &str) -> CmdResult {
        let now = Utc::now().timestamp_millis();
        let result = commands::add::run(&mut self.reviews, title, body, now);
        self.persist(result)
    }

    pub fn begin_edit(&mut self, id: ReviewId) -> CmdResult {
        commands::edit::begin(&self.reviews, &mut self.session, id)
    }

    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) -> CmdResult {
        commands::edit::update_draft(&mut self.session, field, value.into())
    }

    pub fn commit_edit(&mut self) -> CmdResult {
        let result = commands::edit::commit(&mut self.reviews, &mut self.session);
        self.persist(result)
    }

    /// Remove a review. With `reseed_when_empty`, removing the last one
    /// brings the examples back in the same write.
    pub fn delete(&mut self, id: ReviewId) -> CmdResult {
        let mut result = commands::delete::run(&mut self.reviews, &mut self.session, id);
        if result.changed && self.reviews.is_empty() && self.reseed_when_empty {
            let emptied = std::mem::take(&mut self.reviews);
            let (reviews, reseeded) =
                commands::load::run(SlotState::Present(emptied), self.reseed_when_empty);
            self.reviews = reviews;
            result.merge(reseeded);
        }
        self.persist(result)
    }

    /// Begin, fill and commit an edit in one step. Fields left as `None`
    /// keep their current text.
    pub fn edit(&mut self, id: ReviewId, title: Option<&str>, body: Option<&str>) -> CmdResult {
        let mut result = self.begin_edit(id);
        if !self.session.is_editing(id) {
            return result;
        }
        if let Some(title) = title {
            result.merge(self.update_draft(DraftField::Title, title));
        }
        if let Some(body) = body {
            result.merge(self.update_draft(DraftField::Body, body));
        }
        result.merge(self.commit_edit());
        result
    }

    fn persist(&mut self, mut result: CmdResult) -> CmdResult {
        if !result.changed {
            return result;
        }
        match store::save_list(&mut self.store, &self.key, &self.reviews) {
            Ok(()) => info!(key = %self.key, count = self.reviews.len(), "saved reviews"),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to save reviews");
                result.add_message(CmdMessage::warning(format!(
                    "Could not save reviews: {}",
                    e
                )));
            }
        }
        result
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::seed_reviews;
    use crate::store::memory::fixtures::{StoreFixture, KEY};
    use crate::store::memory::InMemoryStore;

    fn manager(fixture: StoreFixture) -> ReviewManager<InMemoryStore> {
        ReviewManager::load(fixture.store, &ReelConfig::default()).0
    }

    fn persisted(manager: &ReviewManager<InMemoryStore>) -> ReviewList {
        store::load_list(manager.store(), KEY).unwrap().unwrap()
    }

    #[test]
    fn load_seeds_and_persists_fresh_store() {
        let (manager, result) =
            ReviewManager::load(InMemoryStore::new(), &ReelConfig::default());

        assert!(result.changed);
        assert_eq!(manager.reviews(), &seed_reviews());
        assert_eq!(persisted(&manager), seed_reviews());
        assert_eq!(manager.session(), &EditSession::Idle);
    }

    #[test]
    fn load_keeps_existing_reviews() {
        let m = manager(StoreFixture::new().with_review(9, "Heat", "Diner scene!"));
        assert_eq!(m.reviews().len(), 1);
        assert_eq!(m.reviews().as_slice()[0].title, "Heat");
    }

    #[test]
    fn load_does_not_reseed_emptied_store() {
        let m = manager(StoreFixture::new().emptied());
        assert!(m.reviews().is_empty());
        assert_eq!(m.store().raw(KEY), Some("[]"));
    }

    #[test]
    fn load_reseeds_emptied_store_when_configured() {
        let config = ReelConfig {
            reseed_when_empty: true,
            ..ReelConfig::default()
        };
        let (m, _) = ReviewManager::load(StoreFixture::new().emptied().store, &config);
        assert_eq!(persisted(&m), seed_reviews());
    }

    #[test]
    fn load_treats_corrupt_slot_as_absent() {
        let m = manager(StoreFixture::new().with_raw("not json at all"));
        assert_eq!(m.reviews(), &seed_reviews());
        assert_eq!(persisted(&m), seed_reviews());
    }

    #[test]
    fn load_uses_configured_key() {
        let config = ReelConfig {
            storage_key: "classics".into(),
            ..ReelConfig::default()
        };
        let (m, _) = ReviewManager::load(InMemoryStore::new(), &config);
        assert!(m.store().raw("classics").is_some());
        assert!(m.store().raw(KEY).is_none());
    }

    #[test]
    fn add_persists_one_more_review() {
        let mut m = manager(StoreFixture::new());
        let before = persisted(&m).len();

        let result = m.add("Jaws", "We need a bigger boat.");

        let after = persisted(&m);
        assert_eq!(after.len(), before + 1);
        let added = &result.affected_reviews[0];
        assert_eq!(after.iter().filter(|r| r.id == added.id).count(), 1);
        assert_eq!(after.as_slice().last().unwrap(), added);
    }

    #[test]
    fn blank_add_leaves_store_untouched() {
        let mut m = manager(StoreFixture::new());
        let result = m.add("  ", "Great!");
        assert!(!result.changed);
        assert_eq!(persisted(&m), seed_reviews());
    }

    #[test]
    fn edit_flow_updates_title_only() {
        let mut m = manager(StoreFixture::new());
        m.begin_edit(1);
        m.update_draft(DraftField::Title, "X");
        m.commit_edit();

        let stored = persisted(&m);
        assert_eq!(stored.as_slice()[0].id, 1);
        assert_eq!(stored.as_slice()[0].title, "X");
        assert_eq!(stored.as_slice()[0].body, "Dinos are totally rad! Two thumbs up!");
        assert_eq!(stored.as_slice()[1..], seed_reviews().as_slice()[1..]);
        assert_eq!(m.session(), &EditSession::Idle);
    }

    #[test]
    fn discarded_edit_restores_idle() {
        let mut m = manager(StoreFixture::new());
        m.begin_edit(1);
        m.update_draft(DraftField::Title, "");
        let result = m.commit_edit();

        assert!(!result.changed);
        assert_eq!(m.session(), &EditSession::Idle);
        assert_eq!(persisted(&m), seed_reviews());
    }

    #[test]
    fn one_shot_edit_keeps_untouched_fields() {
        let mut m = manager(StoreFixture::new());
        m.edit(3, None, Some("  Still sinking.  "));

        let titanic = m.reviews().get(3).unwrap();
        assert_eq!(titanic.title, "Titanic");
        assert_eq!(titanic.body, "Still sinking.");
        assert_eq!(m.session(), &EditSession::Idle);
    }

    #[test]
    fn one_shot_edit_of_unknown_id_does_nothing() {
        let mut m = manager(StoreFixture::new());
        let result = m.edit(77, Some("X"), None);
        assert!(!result.changed);
        assert_eq!(m.reviews(), &seed_reviews());
    }

    #[test]
    fn delete_twice_matches_delete_once() {
        let mut m = manager(StoreFixture::new().with_reviews(3));
        m.delete(102);
        let once = persisted(&m);

        let result = m.delete(102);
        assert!(!result.changed);
        assert_eq!(persisted(&m), once);
        let ids: Vec<_> = once.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![101, 103]);
    }

    #[test]
    fn deleting_last_review_stays_empty_by_default() {
        let mut m = manager(StoreFixture::new().with_reviews(1));
        m.delete(101);
        assert!(m.reviews().is_empty());
        assert!(persisted(&m).is_empty());
    }

    #[test]
    fn deleting_last_review_reseeds_when_configured() {
        let config = ReelConfig {
            reseed_when_empty: true,
            ..ReelConfig::default()
        };
        let (mut m, _) = ReviewManager::load(InMemoryStore::new(), &config);
        m.delete(1);
        m.delete(2);
        let result = m.delete(3);

        assert!(result.changed);
        assert_eq!(result.affected_reviews[0].title, "Titanic");
        assert_eq!(m.reviews(), &seed_reviews());
        assert_eq!(persisted(&m), seed_reviews());
    }

    #[test]
    fn failed_write_is_reported_not_raised() {
        let store = InMemoryStore::new().failing_writes();
        let (mut m, load_result) = ReviewManager::load(store, &ReelConfig::default());
        assert!(load_result
            .messages
            .iter()
            .any(|msg| msg.level == MessageLevel::Warning));

        let result = m.add("Jaws", "Shark!");
        assert!(result.changed);
        assert_eq!(m.reviews().len(), 4);
        assert_eq!(result.messages.last().unwrap().level, MessageLevel::Warning);
    }
}
