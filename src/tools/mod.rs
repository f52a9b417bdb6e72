pub mod generate_design;
pub mod list_generations;
pub mod url_validation;

use rmcp::ErrorData as McpError;
use serde::Serialize;

#[derive(Serialize)]
pub struct ToolResponse {
    pub url: String,
    #[serde(rename = "storedImage", skip_serializing_if = "Option::is_none")]
    pub stored_image: Option<String>,
    pub text: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string(value).map_err(|err| {
        McpError::internal_error(
            "serialize tool response failed",
            Some(serde_json::Value::String(err.to_string())),
        )
    })
}

pub use generate_design::{GenerateDesignRequest, generate_design};
pub use list_generations::{ListGenerationsRequest, list_generations};
pub use url_validation::validate_http_url;
