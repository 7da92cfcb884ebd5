//! Applies received change events to the local collection.
//!
//! The receiving side of the notifier contract: out-of-band events mutate
//! the page's directory, after which the caller re-runs the filter engine
//! against current criteria.

use crate::error::SyncResult;
use schoolhub_model::{Directory, SchoolRecord};
use schoolhub_types::{ChangeEvent, ChangePayload};
use tracing::{debug, warn};

/// Applies a single event to the directory. Returns whether it changed.
///
/// - `Added` prepends the record (most-recent-first presentation). An add
///   for an ID already present is a no-op: the fallback transport can hand
///   the same logical event to a context through more than one path.
/// - `Updated` replaces the record in place; an update for an unknown ID
///   inserts it instead.
/// - `Deleted` removes by ID; deleting an absent record is a no-op.
///
/// A payload whose embedded record disagrees with the event's record ID is
/// dropped with a warning. A payload that fails to parse is an error the
/// caller is expected to log and drop.
pub fn apply_change(directory: &mut Directory, event: &ChangeEvent) -> SyncResult<bool> {
    match &event.payload {
        ChangePayload::Added { json_record } => {
            if directory.contains(&event.record_id) {
                debug!(record = %event.record_id, "duplicate add skipped");
                return Ok(false);
            }
            let Some(record) = decode_record(event, json_record)? else {
                return Ok(false);
            };
            directory.insert_front(record);
            debug!(record = %event.record_id, "record added from remote context");
            Ok(true)
        }

        ChangePayload::Updated { json_record } => {
            let Some(record) = decode_record(event, json_record)? else {
                return Ok(false);
            };
            let inserted = directory.upsert_front(record);
            debug!(
                record = %event.record_id,
                inserted,
                "record updated from remote context"
            );
            Ok(true)
        }

        ChangePayload::Deleted => {
            let removed = directory.remove(&event.record_id).is_some();
            if removed {
                debug!(record = %event.record_id, "record deleted from remote context");
            }
            Ok(removed)
        }
    }
}

fn decode_record(event: &ChangeEvent, json_record: &str) -> SyncResult<Option<SchoolRecord>> {
    let record: SchoolRecord = serde_json::from_str(json_record)?;
    if record.id != event.record_id {
        warn!(
            event = %event.id,
            expected = %event.record_id,
            got = %record.id,
            "record payload disagrees with event record id; dropping"
        );
        return Ok(None);
    }
    Ok(Some(record))
}
