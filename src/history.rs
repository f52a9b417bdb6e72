//! Read side of the generation history.
//!
//! Every listing first reconciles the record store against the blob store and
//! purges records whose files are gone. The pass is best-effort: it takes no
//! lock against concurrent writers, so a record inserted while it runs may be
//! missed until the next read.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::storage::{BlobStore, GenerationRecord, RecordStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationView {
    pub id: u64,
    pub original_image: String,
    pub generated_image: String,
    pub style: String,
    pub room_type: String,
    pub timestamp: String,
}

impl GenerationView {
    pub fn from_record(record: GenerationRecord, blobs: &dyn BlobStore) -> Self {
        Self {
            id: record.id,
            original_image: blobs.public_url(&record.original_file),
            generated_image: blobs.public_url(&record.generated_file),
            style: record.style,
            room_type: record.room_type,
            timestamp: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Deletes every record missing either of its files and returns the rest,
/// newest first.
pub async fn reconcile(
    blobs: &dyn BlobStore,
    records: &dyn RecordStore,
) -> Result<Vec<GenerationRecord>> {
    let mut valid = Vec::new();
    for record in records.list().await? {
        let original_exists = blobs.exists(&record.original_file).await?;
        let generated_exists = blobs.exists(&record.generated_file).await?;
        if original_exists && generated_exists {
            valid.push(record);
        } else {
            info!(id = record.id, "removing invalid entry due to missing files");
            records.delete(record.id).await?;
        }
    }
    Ok(valid)
}
