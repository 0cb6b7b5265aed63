//! Tools domain module.
//!
//! Tools are the MCP surface of the BOM: one tool per command, each one a thin
//! adapter from call arguments onto a [`BomService`](crate::domains::bom::BomService)
//! operation.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/parts/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition` (params type, name, description, execute)
//! 3. Export in `definitions/parts/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
