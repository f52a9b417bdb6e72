use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::image_processing::{DEFAULT_CANVAS_SIZE, SUPPORTED_CANVAS_SIZES};
use crate::openai::{DEFAULT_IMAGE_MODEL, OPENAI_API_BASE};

const DEFAULT_PORT: u16 = 5000;
pub const STORED_IMAGE_ROUTE: &str = "/api/stored-image";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub public_base_url: String,
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub openai_model: String,
    pub canvas_size: u32,
    pub secret_key: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = var("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let bind_address = format!("0.0.0.0:{port}");

        let Some(openai_api_key) = var("OPENAI_API_KEY") else {
            bail!("OpenAI API key not found in environment variables");
        };

        let canvas_size = var("CANVAS_SIZE")
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|size| SUPPORTED_CANVAS_SIZES.contains(size))
            .unwrap_or(DEFAULT_CANVAS_SIZE);

        let allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().trim_end_matches('/').to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port,
            data_dir: resolve_data_dir(var("DATA_DIR")),
            public_base_url: resolve_public_base_url(var("PUBLIC_URL"), var("DOMAIN"), &bind_address),
            openai_api_key: openai_api_key.trim().to_string(),
            openai_api_base: var("OPENAI_API_BASE").unwrap_or_else(|| OPENAI_API_BASE.to_string()),
            openai_model: var("OPENAI_IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            canvas_size,
            secret_key: var("SECRET_KEY").map(|value| value.trim().to_string()),
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn stored_images_dir(&self) -> PathBuf {
        self.data_dir.join("stored_images")
    }

    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join("generations.json")
    }

    pub fn stored_images_url(&self) -> String {
        format!("{}{STORED_IMAGE_ROUTE}", self.public_base_url)
    }

    pub fn mcp_path(&self) -> String {
        match self.secret_key.as_deref() {
            Some(value) => format!("/{value}/mcp"),
            None => "/mcp".to_string(),
        }
    }
}

fn resolve_data_dir(configured: Option<String>) -> PathBuf {
    if let Some(dir) = configured {
        return PathBuf::from(dir.trim());
    }
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("room-redesign");
    base
}

fn resolve_public_base_url(
    public_url: Option<String>,
    domain: Option<String>,
    bind_address: &str,
) -> String {
    if let Some(url) = public_url {
        return url.trim().trim_end_matches('/').to_string();
    }
    let raw_domain = domain.unwrap_or_else(|| bind_address.replace("0.0.0.0", "localhost"));
    let trimmed = raw_domain.trim().trim_end_matches('/');
    let mut base = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    for (doubled, single) in [
        ("http://http://", "http://"),
        ("https://https://", "https://"),
        ("http://https://", "https://"),
        ("https://http://", "http://"),
    ] {
        while base.starts_with(doubled) {
            base = base.replacen(doubled, single, 1);
        }
    }
    base
}
