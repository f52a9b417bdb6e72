use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// One call to the image edit endpoint. Canvas and mask are PNG files on disk
/// with identical `size`x`size` dimensions.
#[derive(Debug, Clone, Copy)]
pub struct EditRequest<'a> {
    pub canvas_path: &'a Path,
    pub mask_path: &'a Path,
    pub prompt: &'a str,
    pub count: u32,
    pub size: u32,
}

/// The external generation service. Errors carry the service's own message so
/// callers can classify them.
#[async_trait]
pub trait ImageEditService: Send + Sync {
    /// Returns the URLs of the edited images.
    async fn edit(&self, request: EditRequest<'_>) -> Result<Vec<String>>;
    /// Fetches a result asset previously returned by `edit`.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}
