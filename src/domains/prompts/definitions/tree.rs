//! Prompts for the subtree commands.

use super::{PromptDefinition, id_arg};
use rmcp::model::PromptArgument;

/// Asks for the indented tree below a part.
pub struct ShowSubtreePrompt;

impl PromptDefinition for ShowSubtreePrompt {
    const NAME: &'static str = "show_subtree";
    const DESCRIPTION: &'static str =
        "Prompt for showing a part and all of its sub parts as a tree";

    fn template() -> &'static str {
        "Show me the part with id '{{id}}' and all of its sub parts as a tree"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_arg("Id of the part at the top of the tree")]
    }
}

/// Asks how many parts sit below a part.
pub struct CountDescendantsPrompt;

impl PromptDefinition for CountDescendantsPrompt {
    const NAME: &'static str = "count_descendants";
    const DESCRIPTION: &'static str =
        "Prompt for counting all sub parts below the part with the given id";

    fn template() -> &'static str {
        "How many sub parts, at any depth, does the part with id '{{id}}' have?"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_arg("Id of the part whose sub parts are counted")]
    }
}
