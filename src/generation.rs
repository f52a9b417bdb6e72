//! End-to-end handling of a single redesign request.
//!
//! Steps run in order: parse the request, build canvas and mask, save the
//! uploaded photo, stage the canvas and mask, call the edit service, save the
//! result and record it in the history. Staged files are removed however the
//! request ends.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    error::{ExternalServiceError, GenerationError},
    history::{self, GenerationView},
    image_processing::{self, DEFAULT_CANVAS_SIZE},
    prompt::{self, RoomType},
    service::{EditRequest, ImageEditService},
    staging::StagedAssets,
    storage::{BlobStore, NewGenerationRecord, RecordStore},
};

const DEFAULT_STYLE: &str = "modern minimalist";
/// Stored names always use this extension, whatever the bytes actually are.
const STORED_EXTENSION: &str = "jpg";

static NAME_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Timestamp for stored names, unique within the process even for requests
/// landing in the same microsecond.
fn file_stamp() -> String {
    let sequence = NAME_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}_{sequence}", Local::now().format("%Y%m%d_%H%M%S_%6f"))
}

/// Raw request fields as they arrive from a transport.
#[derive(Debug, Default, Clone)]
pub struct DesignRequest {
    pub style: Option<String>,
    pub room_type: Option<String>,
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    /// Durable URL when the result made it into the history, otherwise the
    /// service's own URL.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_image: Option<String>,
    #[serde(skip)]
    pub record_id: Option<u64>,
}

impl GenerationOutcome {
    fn service_only(url: String) -> Self {
        Self {
            url,
            stored_image: None,
            record_id: None,
        }
    }
}

#[derive(Debug)]
struct DesignParams {
    style: String,
    room_type: RoomType,
    image: Vec<u8>,
}

impl DesignParams {
    fn parse(request: DesignRequest) -> Result<Self, GenerationError> {
        let image = request
            .image
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| GenerationError::Validation("No image provided".to_string()))?;
        let style = request.style.unwrap_or_else(|| DEFAULT_STYLE.to_string());
        let room_type = RoomType::normalize(request.room_type.as_deref().unwrap_or("living room"));
        Ok(Self {
            style,
            room_type,
            image,
        })
    }
}

struct PreparedAssets {
    canvas: Vec<u8>,
    mask: Vec<u8>,
}

pub struct DesignGenerator {
    blobs: Arc<dyn BlobStore>,
    records: Arc<dyn RecordStore>,
    editor: Arc<dyn ImageEditService>,
    canvas_size: u32,
    staging_dir: Option<PathBuf>,
}

impl DesignGenerator {
    pub fn new(
        blobs: Arc<dyn BlobStore>,
        records: Arc<dyn RecordStore>,
        editor: Arc<dyn ImageEditService>,
    ) -> Self {
        Self {
            blobs,
            records,
            editor,
            canvas_size: DEFAULT_CANVAS_SIZE,
            staging_dir: None,
        }
    }

    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    /// Directory for staged canvases; the system temp dir when unset.
    pub fn with_staging_dir(mut self, staging_dir: PathBuf) -> Self {
        self.staging_dir = Some(staging_dir);
        self
    }

    pub async fn generate(
        &self,
        request: DesignRequest,
    ) -> Result<GenerationOutcome, GenerationError> {
        let params = DesignParams::parse(request)?;
        info!(
            style = %params.style,
            room_type = %params.room_type,
            bytes = params.image.len(),
            content_type = image_processing::detect_mime_type(&params.image).unwrap_or("unknown"),
            "starting design generation"
        );

        let image: Arc<[u8]> = Arc::from(params.image);
        let assets = self.prepare_assets(image.clone()).await?;

        let stamp = file_stamp();
        let original_name = format!("original_{stamp}.{STORED_EXTENSION}");
        self.blobs
            .save(&image, &original_name)
            .await
            .map_err(|err| GenerationError::Persistence(format!("{original_name}: {err:#}")))?;

        let prompt = prompt::build_prompt(&params.style, params.room_type);
        debug!(%prompt, "built edit prompt");

        let staged = StagedAssets::stage(self.staging_dir.as_deref(), &assets.canvas, &assets.mask)
            .map_err(|err| GenerationError::Internal(format!("{err:#}")))?;
        let service_url = self.request_edit(&staged, &prompt).await?;
        drop(staged);

        let generated_name = format!("generated_{stamp}.{STORED_EXTENSION}");
        if let Err(err) = self.persist_generated(&service_url, &generated_name).await {
            warn!(error = %format!("{err:#}"), "keeping service url, generated image was not stored");
            return Ok(GenerationOutcome::service_only(service_url));
        }

        let record = NewGenerationRecord {
            original_file: original_name,
            generated_file: generated_name,
            style: params.style,
            room_type: params.room_type.label().to_string(),
        };
        match self.record_generation(record).await {
            Some((id, generated_file)) => {
                let stored_url = self.blobs.public_url(&generated_file);
                info!(id, url = %stored_url, "design generation stored");
                Ok(GenerationOutcome {
                    url: stored_url.clone(),
                    stored_image: Some(stored_url),
                    record_id: Some(id),
                })
            }
            None => Ok(GenerationOutcome::service_only(service_url)),
        }
    }

    /// History after dropping records whose files are gone.
    pub async fn list_generations(&self) -> anyhow::Result<Vec<GenerationView>> {
        let records = history::reconcile(self.blobs.as_ref(), self.records.as_ref()).await?;
        Ok(records
            .into_iter()
            .map(|record| GenerationView::from_record(record, self.blobs.as_ref()))
            .collect())
    }

    async fn prepare_assets(&self, image: Arc<[u8]>) -> Result<PreparedAssets, GenerationError> {
        let size = self.canvas_size;
        tokio::task::spawn_blocking(move || -> Result<PreparedAssets, GenerationError> {
            let canvas = image_processing::prepare_canvas(&image, size)?;
            let mask = image_processing::create_mask(size)?;
            Ok(PreparedAssets { canvas, mask })
        })
        .await
        .map_err(|err| GenerationError::Internal(format!("image preparation aborted: {err}")))?
    }

    async fn request_edit(
        &self,
        staged: &StagedAssets,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let request = EditRequest {
            canvas_path: staged.canvas_path(),
            mask_path: staged.mask_path(),
            prompt,
            count: 1,
            size: self.canvas_size,
        };
        let urls = self.editor.edit(request).await.map_err(|err| {
            let raw = format!("{err:#}");
            warn!(error = %raw, "image edit request failed");
            ExternalServiceError::classify(&raw)
        })?;
        urls.into_iter().next().ok_or_else(|| {
            ExternalServiceError::Unknown("no image returned by the edit service".to_string())
                .into()
        })
    }

    async fn persist_generated(&self, url: &str, name: &str) -> anyhow::Result<()> {
        let bytes = self.editor.download(url).await?;
        self.blobs.save(&bytes, name).await?;
        Ok(())
    }

    /// Writes the history record if both files are really there. Returns the new
    /// id and the generated file name, or `None` when the record was skipped.
    async fn record_generation(&self, record: NewGenerationRecord) -> Option<(u64, String)> {
        let original = self.blobs.exists(&record.original_file).await;
        let generated = self.blobs.exists(&record.generated_file).await;
        if !matches!((original, generated), (Ok(true), Ok(true))) {
            warn!(
                original = %record.original_file,
                generated = %record.generated_file,
                "not storing generation data because files don't exist"
            );
            return None;
        }
        let generated_file = record.generated_file.clone();
        match self.records.insert(record).await {
            Ok(id) => Some((id, generated_file)),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "storing generation data failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use image::{ImageFormat, Rgb, RgbImage};

    use super::{DesignGenerator, DesignRequest};
    use crate::error::{ExternalServiceError, GenerationError};
    use crate::service::{EditRequest, ImageEditService};
    use crate::storage::{
        BlobStore, GenerationRecord, JsonRecordStore, LocalFileStorage, RecordStore,
    };

    const SERVICE_URL: &str = "https://images.example.com/result.png";

    #[derive(Default)]
    struct FakeEditor {
        failure: Option<String>,
        calls: Mutex<Vec<(PathBuf, PathBuf, String, u32)>>,
    }

    #[async_trait]
    impl ImageEditService for FakeEditor {
        async fn edit(&self, request: EditRequest<'_>) -> Result<Vec<String>> {
            assert!(request.canvas_path.exists());
            assert!(request.mask_path.exists());
            assert_eq!(request.count, 1);
            let canvas = image::open(request.canvas_path)?;
            assert_eq!((canvas.width(), canvas.height()), (request.size, request.size));
            self.calls.lock().unwrap().push((
                request.canvas_path.to_path_buf(),
                request.mask_path.to_path_buf(),
                request.prompt.to_string(),
                request.size,
            ));
            match &self.failure {
                Some(message) => Err(anyhow!("{message}")),
                None => Ok(vec![SERVICE_URL.to_string()]),
            }
        }

        async fn download(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(b"generated bytes".to_vec())
        }
    }

    /// Blob store that refuses to save anything whose name starts with `reject_prefix`.
    struct FlakyBlobs {
        inner: LocalFileStorage,
        reject_prefix: &'static str,
    }

    #[async_trait]
    impl BlobStore for FlakyBlobs {
        async fn save(&self, data: &[u8], name: &str) -> Result<PathBuf> {
            if name.starts_with(self.reject_prefix) {
                return Err(anyhow!("disk full"));
            }
            self.inner.save(data, name).await
        }

        async fn exists(&self, name: &str) -> Result<bool> {
            self.inner.exists(name).await
        }

        async fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
            self.inner.read(name).await
        }

        fn public_url(&self, name: &str) -> String {
            self.inner.public_url(name)
        }
    }

    /// Blob store whose existence checks never find anything.
    struct BlindBlobs {
        inner: LocalFileStorage,
    }

    #[async_trait]
    impl BlobStore for BlindBlobs {
        async fn save(&self, data: &[u8], name: &str) -> Result<PathBuf> {
            self.inner.save(data, name).await
        }

        async fn exists(&self, _name: &str) -> Result<bool> {
            Ok(false)
        }

        async fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
            self.inner.read(name).await
        }

        fn public_url(&self, name: &str) -> String {
            self.inner.public_url(name)
        }
    }

    struct BrokenRecords;

    #[async_trait]
    impl RecordStore for BrokenRecords {
        async fn insert(&self, _record: crate::storage::NewGenerationRecord) -> Result<u64> {
            Err(anyhow!("database is locked"))
        }

        async fn list(&self) -> Result<Vec<GenerationRecord>> {
            Ok(Vec::new())
        }

        async fn delete(&self, _id: u64) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryRecords {
        rows: Mutex<HashMap<u64, GenerationRecord>>,
    }

    #[async_trait]
    impl RecordStore for MemoryRecords {
        async fn insert(&self, record: crate::storage::NewGenerationRecord) -> Result<u64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.keys().max().copied().unwrap_or(0) + 1;
            rows.insert(
                id,
                GenerationRecord {
                    id,
                    original_file: record.original_file,
                    generated_file: record.generated_file,
                    style: record.style,
                    room_type: record.room_type,
                    created_at: chrono::Utc::now(),
                },
            );
            Ok(id)
        }

        async fn list(&self) -> Result<Vec<GenerationRecord>> {
            let mut rows: Vec<_> = self.rows.lock().unwrap().values().cloned().collect();
            rows.sort_by(|a, b| b.id.cmp(&a.id));
            Ok(rows)
        }

        async fn delete(&self, id: u64) -> Result<()> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    struct Fixture {
        _temp: tempfile::TempDir,
        staging: PathBuf,
        blobs: LocalFileStorage,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = tempfile::tempdir().expect("tempdir");
            let staging = temp.path().join("staging");
            std::fs::create_dir_all(&staging).expect("staging dir");
            let blobs = LocalFileStorage::new(
                temp.path().join("stored_images"),
                "http://localhost:5000/api/stored-image".to_string(),
            );
            Self {
                _temp: temp,
                staging,
                blobs,
            }
        }

        fn generator(
            &self,
            blobs: Arc<dyn BlobStore>,
            records: Arc<dyn RecordStore>,
            editor: Arc<dyn ImageEditService>,
        ) -> DesignGenerator {
            DesignGenerator::new(blobs, records, editor)
                .with_canvas_size(64)
                .with_staging_dir(self.staging.clone())
        }

        fn staging_is_empty(&self) -> bool {
            std::fs::read_dir(&self.staging)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false)
        }
    }

    fn photo() -> Vec<u8> {
        photo_in(90)
    }

    fn photo_in(shade: u8) -> Vec<u8> {
        let mut out = Vec::new();
        RgbImage::from_pixel(200, 100, Rgb([shade, shade, shade]))
            .write_to(&mut std::io::Cursor::new(&mut out), ImageFormat::Jpeg)
            .expect("encode photo");
        out
    }

    fn request(style: &str, room: &str) -> DesignRequest {
        DesignRequest {
            style: Some(style.to_string()),
            room_type: Some(room.to_string()),
            image: Some(photo()),
        }
    }

    fn is_stored(dir: &Path, prefix: &str) -> bool {
        std::fs::read_dir(dir)
            .map(|entries| {
                entries.flatten().any(|entry| {
                    entry.file_name().to_string_lossy().starts_with(prefix)
                })
            })
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn successful_generation_is_stored_and_recorded() {
        let fixture = Fixture::new();
        let editor = Arc::new(FakeEditor::default());
        let records = Arc::new(MemoryRecords::default());
        let generator =
            fixture.generator(Arc::new(fixture.blobs.clone()), records.clone(), editor.clone());

        let outcome = generator
            .generate(request("Modern Minimalist", "living"))
            .await
            .expect("generation succeeds");

        assert_eq!(outcome.record_id, Some(1));
        assert!(outcome.url.starts_with("http://localhost:5000/api/stored-image/generated_"));
        assert!(outcome.url.ends_with(".jpg"));
        assert_eq!(outcome.stored_image.as_deref(), Some(outcome.url.as_str()));

        let calls = editor.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        let (canvas, mask, prompt, size) = &calls[0];
        assert_eq!(*size, 64);
        assert!(prompt.contains("sofa, coffee table"));
        assert!(prompt.contains("modern minimalist style"));
        assert!(!canvas.exists());
        assert!(!mask.exists());
        assert!(fixture.staging_is_empty());

        let listed = records.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].style, "Modern Minimalist");
        assert_eq!(listed[0].room_type, "living room");
        assert!(listed[0].original_file.starts_with("original_"));
        let original = fixture.blobs.read(&listed[0].original_file).await.unwrap();
        assert_eq!(original, Some(photo()));
        let generated = fixture.blobs.read(&listed[0].generated_file).await.unwrap();
        assert_eq!(generated, Some(b"generated bytes".to_vec()));
    }

    #[tokio::test]
    async fn rate_limit_failures_are_relabelled_and_cleaned_up() {
        let fixture = Fixture::new();
        let editor = Arc::new(FakeEditor {
            failure: Some("OpenAI request failed: 429 {\"code\": \"rate_limit_exceeded\"}".into()),
            ..FakeEditor::default()
        });
        let records = Arc::new(MemoryRecords::default());
        let generator =
            fixture.generator(Arc::new(fixture.blobs.clone()), records.clone(), editor.clone());

        let err = generator
            .generate(request("industrial", "kitchen"))
            .await
            .expect_err("service failure surfaces");

        assert!(matches!(
            err,
            GenerationError::ExternalService(ExternalServiceError::RateLimited)
        ));
        assert!(err.to_string().contains("check your OpenAI account billing status"));
        assert!(!err.to_string().contains("rate_limit_exceeded"));
        assert_eq!(editor.calls.lock().unwrap().len(), 1);
        assert!(fixture.staging_is_empty());
        assert!(records.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_generated_save_returns_service_url() {
        let fixture = Fixture::new();
        let blobs = Arc::new(FlakyBlobs {
            inner: fixture.blobs.clone(),
            reject_prefix: "generated_",
        });
        let records = Arc::new(MemoryRecords::default());
        let generator =
            fixture.generator(blobs, records.clone(), Arc::new(FakeEditor::default()));

        let outcome = generator
            .generate(request("bohemian", "bedroom"))
            .await
            .expect("result is still delivered");

        assert_eq!(outcome.url, SERVICE_URL);
        assert_eq!(outcome.stored_image, None);
        assert_eq!(outcome.record_id, None);
        assert!(records.list().await.unwrap().is_empty());
        assert!(is_stored(fixture.blobs.base_dir(), "original_"));
        assert!(fixture.staging_is_empty());
    }

    #[tokio::test]
    async fn failed_original_save_aborts() {
        let fixture = Fixture::new();
        let blobs = Arc::new(FlakyBlobs {
            inner: fixture.blobs.clone(),
            reject_prefix: "original_",
        });
        let editor = Arc::new(FakeEditor::default());
        let generator =
            fixture.generator(blobs, Arc::new(MemoryRecords::default()), editor.clone());

        let err = generator
            .generate(request("contemporary", "living room"))
            .await
            .expect_err("original must be persisted");
        assert!(matches!(err, GenerationError::Persistence(_)));
        assert!(editor.calls.lock().unwrap().is_empty());
        assert!(fixture.staging_is_empty());
    }

    #[tokio::test]
    async fn missing_image_is_a_validation_error() {
        let fixture = Fixture::new();
        let editor = Arc::new(FakeEditor::default());
        let generator = fixture.generator(
            Arc::new(fixture.blobs.clone()),
            Arc::new(MemoryRecords::default()),
            editor.clone(),
        );

        for image in [None, Some(Vec::new())] {
            let err = generator
                .generate(DesignRequest {
                    image,
                    ..DesignRequest::default()
                })
                .await
                .expect_err("no image");
            assert!(matches!(err, GenerationError::Validation(_)));
            assert_eq!(err.to_string(), "No image provided");
        }
        assert!(editor.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn undecodable_upload_stops_before_storage() {
        let fixture = Fixture::new();
        let generator = fixture.generator(
            Arc::new(fixture.blobs.clone()),
            Arc::new(MemoryRecords::default()),
            Arc::new(FakeEditor::default()),
        );
        let err = generator
            .generate(DesignRequest {
                image: Some(b"GIF89a but not really".to_vec()),
                ..DesignRequest::default()
            })
            .await
            .expect_err("bad image");
        assert!(matches!(err, GenerationError::ImageDecode(_)));
        assert!(!is_stored(fixture.blobs.base_dir(), "original_"));
    }

    #[tokio::test]
    async fn defaults_apply_and_unknown_style_sends_preamble_only() {
        let fixture = Fixture::new();
        let editor = Arc::new(FakeEditor::default());
        let records = Arc::new(JsonRecordStore::new(fixture.staging.with_file_name("db.json")));
        let generator =
            fixture.generator(Arc::new(fixture.blobs.clone()), records.clone(), editor.clone());

        generator
            .generate(DesignRequest {
                image: Some(photo()),
                ..DesignRequest::default()
            })
            .await
            .unwrap();
        generator.generate(request("Art Deco", "garage")).await.unwrap();

        let calls = editor.calls.lock().unwrap().clone();
        assert!(calls[0].2.contains("modern minimalist style"));
        assert!(calls[1].2.ends_with("maintain all lighting conditions. "));

        let listed = generator.list_generations().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|view| view.room_type == "living room"));
        assert!(listed.iter().any(|view| view.style == "Art Deco"));
        assert!(fixture.staging_is_empty());
    }

    #[tokio::test]
    async fn concurrent_requests_keep_their_own_files() {
        let fixture = Fixture::new();
        let records = Arc::new(MemoryRecords::default());
        let generator = fixture.generator(
            Arc::new(fixture.blobs.clone()),
            records.clone(),
            Arc::new(FakeEditor::default()),
        );
        let dark = DesignRequest {
            style: Some("industrial".to_string()),
            room_type: Some("kitchen".to_string()),
            image: Some(photo_in(20)),
        };
        let light = DesignRequest {
            style: Some("scandinavian".to_string()),
            room_type: Some("bedroom".to_string()),
            image: Some(photo_in(230)),
        };

        let (first, second) = tokio::join!(generator.generate(dark), generator.generate(light));
        let (first, second) = (first.unwrap(), second.unwrap());
        assert_ne!(first.url, second.url);

        let listed = records.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_ne!(listed[0].original_file, listed[1].original_file);
        assert_ne!(listed[0].generated_file, listed[1].generated_file);
        for record in &listed {
            assert!(record.original_file.starts_with("original_"));
            assert!(record.original_file.ends_with(".jpg"));
            let expected = match record.style.as_str() {
                "industrial" => photo_in(20),
                _ => photo_in(230),
            };
            let stored = fixture.blobs.read(&record.original_file).await.unwrap();
            assert_eq!(stored, Some(expected));
        }
    }

    #[tokio::test]
    async fn failed_record_insert_returns_service_url() {
        let fixture = Fixture::new();
        let generator = fixture.generator(
            Arc::new(fixture.blobs.clone()),
            Arc::new(BrokenRecords),
            Arc::new(FakeEditor::default()),
        );

        let outcome = generator
            .generate(request("luxury classic", "living room"))
            .await
            .expect("result is still delivered");

        assert_eq!(outcome.url, SERVICE_URL);
        assert_eq!(outcome.stored_image, None);
        assert_eq!(outcome.record_id, None);
        assert!(is_stored(fixture.blobs.base_dir(), "generated_"));
        assert!(fixture.staging_is_empty());
    }

    #[tokio::test]
    async fn missing_files_skip_the_record() {
        let fixture = Fixture::new();
        let records = Arc::new(MemoryRecords::default());
        let blobs = Arc::new(BlindBlobs {
            inner: fixture.blobs.clone(),
        });
        let generator = fixture.generator(blobs, records.clone(), Arc::new(FakeEditor::default()));

        let outcome = generator
            .generate(request("contemporary", "kitchen"))
            .await
            .expect("result is still delivered");

        assert_eq!(outcome.url, SERVICE_URL);
        assert_eq!(outcome.stored_image, None);
        assert!(records.list().await.unwrap().is_empty());
        assert!(fixture.staging_is_empty());
    }

    #[tokio::test]
    async fn zero_canvas_size_is_rejected() {
        let fixture = Fixture::new();
        let editor = Arc::new(FakeEditor::default());
        let generator = fixture
            .generator(
                Arc::new(fixture.blobs.clone()),
                Arc::new(MemoryRecords::default()),
                editor.clone(),
            )
            .with_canvas_size(0);

        let err = generator
            .generate(request("industrial", "kitchen"))
            .await
            .expect_err("empty canvas");
        assert!(matches!(err, GenerationError::Internal(_)));
        assert!(editor.calls.lock().unwrap().is_empty());
        assert!(!is_stored(fixture.blobs.base_dir(), "original_"));
    }
}
