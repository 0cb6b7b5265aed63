//! Prompts domain module.
//!
//! Prompts are natural-language requests for the BOM commands, one per
//! command, that clients can fill in and hand to a language model.
//!
//! ## Architecture
//!
//! - `definitions/` - Prompt definitions grouped by command kind
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - `{{variable}}` substitution
//!
//! ## Adding a New Prompt
//!
//! 1. Add a struct in `definitions/`
//! 2. Implement the `PromptDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
