//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct (deserialized from the call arguments, schema via schemars)
//! - An implementation of [`ToolDefinition`]
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `parts/` (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it in `parts/mod.rs`
//! 4. Add it to `router.rs` and `registry.rs`

pub mod parts;

use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{CallToolResult, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio_util::sync::CancellationToken;

use crate::domains::bom::BomService;

pub use parts::{
    AddSubPartTool, CopyPartTool, CountDescendantsTool, CreatePartTool, DeletePartTool,
    GetPartTool, ListPartsTool, ShowSubtreeTool, UpdatePartTool,
};

/// Trait for tool definitions.
///
/// A tool maps one BOM command onto a [`BomService`] call and formats the outcome.
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Execute the tool logic.
    ///
    /// Domain outcomes (not found, validation, store failures, cancellation) are
    /// reported inside the returned [`CallToolResult`].
    fn execute(
        params: &Self::Params,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> impl Future<Output = CallToolResult> + Send;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
