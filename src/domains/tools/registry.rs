//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch of raw JSON tool calls (used by the HTTP transport)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::domains::bom::BomService;

use super::definitions::{
    AddSubPartTool, CopyPartTool, CountDescendantsTool, CreatePartTool, DeletePartTool,
    GetPartTool, ListPartsTool, ShowSubtreeTool, ToolDefinition, UpdatePartTool,
};
use super::error::ToolError;

/// Deserialize the arguments for `T`, run it and serialize the result.
async fn dispatch<T: ToolDefinition>(
    arguments: serde_json::Value,
    bom: &BomService,
    cancel: &CancellationToken,
) -> Result<serde_json::Value, ToolError> {
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    let result = T::execute(&params, bom, cancel).await;
    serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    bom: Arc<BomService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(bom: Arc<BomService>) -> Self {
        Self { bom }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddSubPartTool::NAME,
            CopyPartTool::NAME,
            CountDescendantsTool::NAME,
            CreatePartTool::NAME,
            DeletePartTool::NAME,
            GetPartTool::NAME,
            ListPartsTool::NAME,
            ShowSubtreeTool::NAME,
            UpdatePartTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddSubPartTool::to_tool(),
            CopyPartTool::to_tool(),
            CountDescendantsTool::to_tool(),
            CreatePartTool::to_tool(),
            DeletePartTool::to_tool(),
            GetPartTool::to_tool(),
            ListPartsTool::to_tool(),
            ShowSubtreeTool::to_tool(),
            UpdatePartTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// The returned value is the serialized `CallToolResult`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, ToolError> {
        let bom = self.bom.as_ref();
        match name {
            AddSubPartTool::NAME => dispatch::<AddSubPartTool>(arguments, bom, cancel).await,
            CopyPartTool::NAME => dispatch::<CopyPartTool>(arguments, bom, cancel).await,
            CountDescendantsTool::NAME => {
                dispatch::<CountDescendantsTool>(arguments, bom, cancel).await
            }
            CreatePartTool::NAME => dispatch::<CreatePartTool>(arguments, bom, cancel).await,
            DeletePartTool::NAME => dispatch::<DeletePartTool>(arguments, bom, cancel).await,
            GetPartTool::NAME => dispatch::<GetPartTool>(arguments, bom, cancel).await,
            ListPartsTool::NAME => dispatch::<ListPartsTool>(arguments, bom, cancel).await,
            ShowSubtreeTool::NAME => dispatch::<ShowSubtreeTool>(arguments, bom, cancel).await,
            UpdatePartTool::NAME => dispatch::<UpdatePartTool>(arguments, bom, cancel).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
