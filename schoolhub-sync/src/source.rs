//! Record sources: where a page's initial collection comes from.

use crate::error::SyncResult;
use async_trait::async_trait;
use schoolhub_model::SchoolRecord;
use schoolhub_types::RecordId;
use uuid::uuid;

/// An asynchronous provider of the full record collection.
///
/// The page does not care whether this is a network endpoint or a local
/// seed generator, only that it resolves to the record shape or fails with
/// [`SyncError::DataUnavailable`](crate::SyncError::DataUnavailable).
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Resolves the complete collection.
    async fn fetch(&self) -> SyncResult<Vec<SchoolRecord>>;
}

/// The built-in demo collection, used when no backend is wired up.
pub struct SeedSource;

#[async_trait]
impl RecordSource for SeedSource {
    async fn fetch(&self) -> SyncResult<Vec<SchoolRecord>> {
        Ok(seed_records())
    }
}

/// The demo directory entries.
///
/// IDs are pinned: every context that loads the seed must agree on record
/// identity for cross-tab updates and deletes to land.
#[must_use]
pub fn seed_records() -> Vec<SchoolRecord> {
    vec![
        SchoolRecord::new("Nairobi High School", "Nairobi, Kenya", "Secondary")
            .with_id(RecordId::from_uuid(uuid!(
                "01920000-0000-7000-8000-000000000001"
            )))
            .with_students(450)
            .with_established(1995)
            .with_description("Premier secondary institution in Nairobi")
            .with_programs(["Science", "Arts", "Commercial"]),
        SchoolRecord::new("Mombasa Primary Academy", "Mombasa, Kenya", "Primary")
            .with_id(RecordId::from_uuid(uuid!(
                "01920000-0000-7000-8000-000000000002"
            )))
            .with_students(380)
            .with_established(2005)
            .with_description("Leading primary school on the coast")
            .with_programs(["Standard Curriculum"]),
        SchoolRecord::new("University of Nairobi", "Nairobi, Kenya", "University")
            .with_id(RecordId::from_uuid(uuid!(
                "01920000-0000-7000-8000-000000000003"
            )))
            .with_students(2500)
            .with_established(1956)
            .with_description("Premier university institution")
            .with_programs(["Engineering", "Medicine", "Law", "Business"]),
        SchoolRecord::new("Technical Institute Kisumu", "Kisumu, Kenya", "Technical")
            .with_id(RecordId::from_uuid(uuid!(
                "01920000-0000-7000-8000-000000000004"
            )))
            .with_students(280)
            .with_established(2010)
            .with_description("Vocational and technical training center")
            .with_programs(["Plumbing", "Electrical", "Welding"]),
        SchoolRecord::new("Kilifi Secondary School", "Kilifi, Kenya", "Secondary")
            .with_id(RecordId::from_uuid(uuid!(
                "01920000-0000-7000-8000-000000000005"
            )))
            .with_students(350)
            .with_established(2000)
            .with_description("Quality secondary education")
            .with_programs(["Science", "Arts"]),
    ]
}
