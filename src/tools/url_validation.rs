use rmcp::ErrorData as McpError;
use serde_json::Value;
use url::Url;

pub fn validate_http_url(raw: &str) -> Result<Url, McpError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(McpError::invalid_params("image_url must not be empty", None));
    }
    let parsed = Url::parse(trimmed).map_err(|err| {
        McpError::invalid_params("image_url is not a valid URL", Some(Value::String(err.to_string())))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(McpError::invalid_params(
            "only http and https image URLs are allowed",
            Some(Value::String(format!("got scheme: {scheme}"))),
        )),
    }
}
