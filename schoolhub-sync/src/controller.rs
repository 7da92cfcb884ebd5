//! The page controller: owned state for one browsing context.
//!
//! Replaces the pattern of a module-global record list with an explicitly
//! owned container. The controller threads the directory, the current
//! criteria, and the notifier together: data loading populates the
//! directory, every criteria change re-runs the filter engine, and pumped
//! change events mutate the directory and refresh the visible subset. A
//! rendering collaborator consumes [`PageController::view`]; nothing here
//! renders.

use crate::applicator::apply_change;
use crate::error::SyncResult;
use crate::notifier::Notifier;
use crate::source::RecordSource;
use schoolhub_model::{filter, Directory, FilterCriteria, SchoolRecord};
use schoolhub_types::{ChangeEvent, RecordId};
use tracing::{debug, warn};

/// Where the page is in its data lifecycle.
///
/// Lets a renderer distinguish "no matches" from "still loading" and
/// "the data source failed" — all three present an empty view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has completed yet.
    Loading,
    /// The collection was fetched and is live.
    Ready,
    /// The data source failed; the page runs on an empty collection.
    Failed,
}

/// Owned page state: collection, criteria, notifier, and the cached
/// visible subset.
pub struct PageController {
    directory: Directory,
    criteria: FilterCriteria,
    notifier: Notifier,
    load_state: LoadState,
    view: Vec<SchoolRecord>,
}

impl PageController {
    /// Creates a controller with an empty collection and no filtering.
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        Self {
            directory: Directory::new(),
            criteria: FilterCriteria::none(),
            notifier,
            load_state: LoadState::Loading,
            view: Vec::new(),
        }
    }

    /// Fetches the full collection from a source.
    ///
    /// On failure the page falls back to an empty collection and the
    /// [`LoadState::Failed`] state, and the error is passed along so the
    /// caller can surface it; nothing here is fatal.
    pub async fn load(&mut self, source: &dyn RecordSource) -> SyncResult<()> {
        match source.fetch().await {
            Ok(records) => {
                self.directory = Directory::from_records(records);
                self.load_state = LoadState::Ready;
                self.refresh();
                Ok(())
            }
            Err(err) => {
                self.directory = Directory::new();
                self.load_state = LoadState::Failed;
                self.refresh();
                Err(err)
            }
        }
    }

    /// Replaces the filter criteria and recomputes the visible subset.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Admin create: applied locally, then broadcast to other contexts.
    ///
    /// A record whose ID is already present is left alone and not
    /// rebroadcast.
    pub fn add_record(&mut self, record: SchoolRecord) -> SyncResult<()> {
        let event = ChangeEvent::added(
            record.id,
            self.notifier.context(),
            serde_json::to_string(&record)?,
        );
        if !self.directory.insert_front(record) {
            debug!(record = %event.record_id, "record already present, not rebroadcast");
            return Ok(());
        }
        self.refresh();
        self.notifier.publish(&event)
    }

    /// Admin edit: replaced in place locally, then broadcast.
    pub fn update_record(&mut self, record: SchoolRecord) -> SyncResult<()> {
        let event = ChangeEvent::updated(
            record.id,
            self.notifier.context(),
            serde_json::to_string(&record)?,
        );
        self.directory.upsert_front(record);
        self.refresh();
        self.notifier.publish(&event)
    }

    /// Admin delete: removed locally, then broadcast.
    ///
    /// Removing an absent ID does nothing and broadcasts nothing.
    pub fn remove_record(&mut self, id: RecordId) -> SyncResult<()> {
        if self.directory.remove(&id).is_none() {
            return Ok(());
        }
        self.refresh();
        self.notifier
            .publish(&ChangeEvent::deleted(id, self.notifier.context()))
    }

    /// Drains out-of-band change events and applies them.
    ///
    /// Returns how many events changed the directory. Events that fail to
    /// apply (malformed record payloads) are dropped with a warning.
    pub fn pump(&mut self) -> usize {
        let events = self.notifier.pump();
        let mut applied = 0;
        for event in &events {
            match apply_change(&mut self.directory, event) {
                Ok(true) => applied += 1,
                Ok(false) => {}
                Err(err) => warn!(event = %event.id, "dropping change event: {err}"),
            }
        }
        if applied > 0 {
            self.refresh();
        }
        applied
    }

    /// The visible subset under current criteria, in collection order.
    #[must_use]
    pub fn view(&self) -> &[SchoolRecord] {
        &self.view
    }

    /// The full owned collection.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The criteria currently in effect.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The data lifecycle state.
    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// The notifier serving this context.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Mutable notifier access, e.g. to register extra subscribers.
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    fn refresh(&mut self) {
        self.view = filter::apply(self.directory.records(), &self.criteria);
    }
}
