use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars::JsonSchema,
};
use serde::Deserialize;

use crate::{generation::DesignGenerator, tools::to_json};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListGenerationsRequest {
    #[schemars(description = "Maximum number of generations to return, newest first. Defaults to 10")]
    pub limit: Option<u32>,
}

pub async fn list_generations(
    generator: &DesignGenerator,
    Parameters(request): Parameters<ListGenerationsRequest>,
) -> Result<CallToolResult, McpError> {
    let limit = request.limit.unwrap_or(10).max(1) as usize;
    let mut generations = generator.list_generations().await.map_err(|err| {
        McpError::internal_error(
            "list generations failed",
            Some(serde_json::Value::String(format!("{err:#}"))),
        )
    })?;
    generations.truncate(limit);
    Ok(CallToolResult::success(vec![Content::text(to_json(&generations)?)]))
}
