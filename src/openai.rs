use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::service::{EditRequest, ImageEditService};

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-2";

async fn assert_ok_response(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(anyhow!("OpenAI request failed: {status} {text}"))
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Option<Vec<ImageData>>,
    error: Option<OpenAiError>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiImageEditor {
    http: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiImageEditor {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_base: OPENAI_API_BASE.to_string(),
            api_key,
            model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn png_part(path: &std::path::Path, file_name: &'static str) -> Result<Part> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("failed reading {}", path.display()))?;
        Ok(Part::bytes(bytes).file_name(file_name).mime_str("image/png")?)
    }
}

#[async_trait]
impl ImageEditService for OpenAiImageEditor {
    async fn edit(&self, request: EditRequest<'_>) -> Result<Vec<String>> {
        let size = format!("{0}x{0}", request.size);
        let form = Form::new()
            .text("model", self.model.clone())
            .text("prompt", request.prompt.to_string())
            .text("n", request.count.max(1).to_string())
            .text("size", size.clone())
            .text("response_format", "url")
            .part("image", Self::png_part(request.canvas_path, "image.png").await?)
            .part("mask", Self::png_part(request.mask_path, "mask.png").await?);

        debug!(model = %self.model, %size, prompt_chars = request.prompt.chars().count(), "sending image edit request");
        let response = self
            .http
            .post(format!("{}/images/edits", self.api_base))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .context("OpenAI edits request failed")?;

        let response = assert_ok_response(response).await?;
        let payload: ImagesResponse = response.json().await?;
        if let Some(error) = payload.error {
            return Err(anyhow!(
                "OpenAI returned an error: type={} code={} message={}",
                error.kind.unwrap_or_default(),
                error.code.unwrap_or_default(),
                error.message.unwrap_or_default()
            ));
        }
        let urls: Vec<String> = payload
            .data
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| item.url)
            .collect();
        if urls.is_empty() {
            return Err(anyhow!("OpenAI edits response returned no images"));
        }
        Ok(urls)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed fetching {url}"))?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("fetching generated image failed: HTTP {status}"));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
