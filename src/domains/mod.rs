//! Domains module containing business logic organized by bounded contexts.
//!
//! `bom` owns the part tree; `tools` and `prompts` expose it over MCP.

pub mod bom;
pub mod prompts;
pub mod tools;
