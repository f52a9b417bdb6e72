use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::Mutex};

/// One finished generation: the uploaded photo, the redesigned result and the
/// parameters that produced it. Only valid while both files exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: u64,
    pub original_file: String,
    pub generated_file: String,
    pub style: String,
    pub room_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGenerationRecord {
    pub original_file: String,
    pub generated_file: String,
    pub style: String,
    pub room_type: String,
}

/// Persistent generation history. Records are inserted and deleted, never updated.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stores `record` and returns its newly assigned id.
    async fn insert(&self, record: NewGenerationRecord) -> Result<u64>;
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<GenerationRecord>>;
    async fn delete(&self, id: u64) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordFile {
    next_id: u64,
    records: Vec<GenerationRecord>,
}

/// Keeps the whole history in one JSON document. Writes go through a mutex and
/// replace the file by rename, so readers never see a half written document.
#[derive(Debug)]
pub struct JsonRecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonRecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<RecordFile> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RecordFile::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed reading {}", self.path.display()));
            }
        };
        serde_json::from_slice(&bytes)
            .with_context(|| format!("corrupt record file {}", self.path.display()))
    }

    async fn store(&self, file: &RecordFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(file)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, &payload)
            .await
            .with_context(|| format!("failed writing {}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .await
            .with_context(|| format!("failed replacing {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonRecordStore {
    async fn insert(&self, record: NewGenerationRecord) -> Result<u64> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        let id = file.next_id.max(1);
        file.next_id = id + 1;
        file.records.push(GenerationRecord {
            id,
            original_file: record.original_file,
            generated_file: record.generated_file,
            style: record.style,
            room_type: record.room_type,
            created_at: Utc::now(),
        });
        self.store(&file).await?;
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<GenerationRecord>> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?.records;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        let before = file.records.len();
        file.records.retain(|record| record.id != id);
        if file.records.len() != before {
            self.store(&file).await?;
        }
        Ok(())
    }
}
