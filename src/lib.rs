//! BOM MCP Server Library
//!
//! A Model Context Protocol (MCP) server over a hierarchical Bill-of-Materials:
//! parts form a forest through their optional parent link and are stored in
//! SQLite.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler, the
//!   API key gate and the STDIO/HTTP transports
//! - **domains**: business logic organized by bounded contexts
//!   - **bom**: part model, flat store, tree materializer, descendant counter,
//!     tree mutator and renderer
//!   - **tools**: one MCP tool per BOM command
//!   - **prompts**: prompt templates for the same commands
//!
//! # Example
//!
//! ```rust,no_run
//! use bom_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::connect(config).await?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::bom::{BomService, NewPart, Part, PartId};
