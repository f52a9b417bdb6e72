pub mod blob;
pub mod records;

pub use blob::{BlobStore, LocalFileStorage};
pub use records::{GenerationRecord, JsonRecordStore, NewGenerationRecord, RecordStore};
