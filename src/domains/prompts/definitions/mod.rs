//! Prompt definitions module.
//!
//! Each prompt provides:
//! - Metadata (name, description, arguments)
//! - Template string
//!
//! Prompts are grouped by the kind of BOM command they phrase:
//! `loading` (reads), `editing` (creates, updates, deletes) and `tree`
//! (subtree rendering and counting).
//!
//! ## Adding a New Prompt
//!
//! 1. Add a struct to the matching file
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod editing;
mod loading;
mod tree;

use rmcp::model::PromptArgument;

pub use editing::{AddSubPartPrompt, CreatePartPrompt, DeletePartPrompt, UpdatePartPrompt};
pub use loading::{GetPartPrompt, GetPartsPrompt};
pub use tree::{CountDescendantsPrompt, ShowSubtreePrompt};

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}

/// A required prompt argument.
pub(crate) fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

/// The `id` argument shared by every single-part prompt.
pub(crate) fn id_arg(description: &str) -> PromptArgument {
    required_arg("id", description)
}
