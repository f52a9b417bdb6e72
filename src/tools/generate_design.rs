use base64::Engine;
use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars::JsonSchema,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::GenerationError,
    generation::{DesignGenerator, DesignRequest},
    tools::{ToolResponse, to_json, validate_http_url},
};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateDesignRequest {
    #[schemars(description = "URL of the room photo (http or https)")]
    pub image_url: Option<String>,
    #[schemars(description = "Room photo as base64, optionally as a data: URL")]
    pub image_base64: Option<String>,
    #[schemars(
        description = "Design style: modern minimalist, luxury classic, scandinavian, industrial, bohemian or contemporary. Defaults to modern minimalist"
    )]
    pub style: Option<String>,
    #[schemars(description = "Room type: living room, bedroom or kitchen. Defaults to living room")]
    pub room_type: Option<String>,
}

pub async fn generate_design(
    generator: &DesignGenerator,
    Parameters(request): Parameters<GenerateDesignRequest>,
) -> Result<CallToolResult, McpError> {
    let image = load_image(request.image_url.as_deref(), request.image_base64.as_deref()).await?;
    let outcome = generator
        .generate(DesignRequest {
            style: request.style,
            room_type: request.room_type,
            image,
        })
        .await
        .map_err(generation_error)?;

    let text = if outcome.stored_image.is_some() {
        "Design generated and saved to history."
    } else {
        "Design generated. It could not be saved to history."
    };
    let response = ToolResponse {
        url: outcome.url,
        stored_image: outcome.stored_image,
        text: text.to_string(),
    };
    Ok(CallToolResult::success(vec![Content::text(to_json(&response)?)]))
}

fn generation_error(err: GenerationError) -> McpError {
    if err.is_client_error() {
        McpError::invalid_params(err.to_string(), None)
    } else {
        McpError::internal_error("generate design failed", Some(Value::String(err.to_string())))
    }
}

async fn load_image(
    image_url: Option<&str>,
    image_base64: Option<&str>,
) -> Result<Option<Vec<u8>>, McpError> {
    match (image_url, image_base64) {
        (Some(_), Some(_)) => Err(McpError::invalid_params(
            "provide either image_url or image_base64, not both",
            None,
        )),
        (Some(url), None) => fetch_image(url).await.map(Some),
        (None, Some(encoded)) => decode_base64_image(encoded).map(Some),
        (None, None) => Ok(None),
    }
}

async fn fetch_image(raw_url: &str) -> Result<Vec<u8>, McpError> {
    let validated_url = validate_http_url(raw_url)?;
    let response = reqwest::get(validated_url).await.map_err(|err| {
        McpError::internal_error("fetch image failed", Some(Value::String(err.to_string())))
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(McpError::invalid_params(
            "fetch image failed",
            Some(Value::String(format!("HTTP {status}"))),
        ));
    }
    let bytes = response.bytes().await.map_err(|err| {
        McpError::internal_error("read image bytes failed", Some(Value::String(err.to_string())))
    })?;
    Ok(bytes.to_vec())
}

fn decode_base64_image(encoded: &str) -> Result<Vec<u8>, McpError> {
    let payload = match encoded.trim().split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded.trim(),
    };
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|err| {
            McpError::invalid_params("image_base64 is not valid base64", Some(Value::String(err.to_string())))
        })
}
