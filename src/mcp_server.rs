use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::generation::DesignGenerator;
use crate::tools::{GenerateDesignRequest, ListGenerationsRequest};

#[derive(Clone)]
pub struct RoomDesignServer {
    tool_router: ToolRouter<Self>,
    generator: Arc<DesignGenerator>,
}

impl RoomDesignServer {
    pub fn new(generator: Arc<DesignGenerator>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            generator,
        }
    }
}

#[tool_router]
impl RoomDesignServer {
    #[tool(
        description = "Redesign a room photo: keeps walls, windows and doors and furnishes the room in the requested style. Pass the photo as image_url or image_base64. Generation can take a while; show the result with ![](url)"
    )]
    async fn generate_design(
        &self,
        Parameters(request): Parameters<GenerateDesignRequest>,
    ) -> Result<CallToolResult, McpError> {
        crate::tools::generate_design(&self.generator, Parameters(request)).await
    }

    #[tool(description = "List previously generated room designs, newest first")]
    async fn list_generations(
        &self,
        Parameters(request): Parameters<ListGenerationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        crate::tools::list_generations(&self.generator, Parameters(request)).await
    }
}

#[tool_handler]
impl ServerHandler for RoomDesignServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
