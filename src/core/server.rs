//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the BOM service, the tool router and the prompt
//! service.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/parts/` with one file per tool.
//! The ToolRouter is built dynamically in `domains/tools/router.rs`; the
//! ToolRegistry dispatches the same tools for the HTTP transport.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::config::Config;
use super::security::ApiKeyGate;
use crate::domains::bom::{BomService, SqlitePartStore, TreeLimits};
use crate::domains::prompts::PromptService;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "This server manages a bill of materials (BOM): a forest of parts, \
    each with an Id, a name, a part number and an optional parent part. Use the tools to read, \
    create, update, copy and delete parts, to add sub parts, to show a part's subtree and to \
    count its descendants. Deleting a part also deletes all of its sub parts.";

/// Convert prompt arguments to strings. Numbers and booleans are accepted as
/// their JSON text so that `{"id": 3}` and `{"id": "3"}` behave the same.
fn prompt_arguments(map: serde_json::Map<String, serde_json::Value>) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::String(s) => Some((k, s)),
            serde_json::Value::Number(n) => Some((k, n.to_string())),
            serde_json::Value::Bool(b) => Some((k, b.to_string())),
            _ => None,
        })
        .collect()
}

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The BOM service shared by every tool.
    bom: Arc<BomService>,

    /// API key gate consulted by the HTTP transport.
    api_key_gate: Arc<ApiKeyGate>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool dispatch for the HTTP transport.
    tool_registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server over an existing BOM service and key gate.
    pub fn new(config: Config, bom: Arc<BomService>, api_key_gate: Arc<ApiKeyGate>) -> Self {
        let config = Arc::new(config);
        let prompt_service = Arc::new(PromptService::new());

        Self {
            tool_router: build_tool_router::<Self>(bom.clone()),
            tool_registry: Arc::new(ToolRegistry::new(bom.clone())),
            config,
            bom,
            api_key_gate,
            prompt_service,
        }
    }

    /// Open the configured SQLite database and build the server on top of it.
    ///
    /// Parts and API keys share one connection pool.
    pub async fn connect(config: Config) -> crate::Result<Self> {
        config.validate()?;
        let store = SqlitePartStore::connect(&config.store).await?;
        let api_key_gate = ApiKeyGate::new(store.pool().clone(), &config.auth).await?;
        let bom = BomService::new(Arc::new(store), TreeLimits::from(&config.tree));

        Ok(Self::new(config, Arc::new(bom), Arc::new(api_key_gate)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the BOM service.
    pub fn bom(&self) -> &Arc<BomService> {
        &self.bom
    }

    /// Get the API key gate.
    pub fn api_key_gate(&self) -> &Arc<ApiKeyGate> {
        &self.api_key_gate
    }

    /// Server instructions sent on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Returns the serialized `CallToolResult`. Domain failures are inside it;
    /// `Err` is reserved for unknown tools and malformed arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, ToolError> {
        self.tool_registry.call_tool(name, arguments, cancel).await
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        let prompts = self.prompt_service.list_prompts().await;

        prompts
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, String> {
        let args = arguments.and_then(|v| match v {
            serde_json::Value::Object(map) => Some(prompt_arguments(map)),
            _ => None,
        });

        match self.prompt_service.get_prompt(name, args).await {
            Ok(result) => Ok(serde_json::json!({
                "description": result.description,
                "messages": result.messages
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(prompt_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
