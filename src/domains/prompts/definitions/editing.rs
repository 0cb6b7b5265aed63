//! Prompts for creating, updating and deleting parts.

use super::{PromptDefinition, id_arg, required_arg};
use rmcp::model::PromptArgument;

fn name_arg() -> PromptArgument {
    required_arg("name", "Name of the part")
}

fn number_arg() -> PromptArgument {
    required_arg("number", "Part number")
}

/// Asks for a new root part.
pub struct CreatePartPrompt;

impl PromptDefinition for CreatePartPrompt {
    const NAME: &'static str = "create_part";
    const DESCRIPTION: &'static str = "Creates a new part with the given name and number";

    fn template() -> &'static str {
        "Create a new part with name '{{name}}' and number '{{number}}'"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![name_arg(), number_arg()]
    }
}

/// Asks to rename / renumber an existing part.
pub struct UpdatePartPrompt;

impl PromptDefinition for UpdatePartPrompt {
    const NAME: &'static str = "update_part";
    const DESCRIPTION: &'static str =
        "Prompt for updating the part with the given id to a new name and number";

    fn template() -> &'static str {
        "Update the part with id '{{id}}' to have name '{{name}}' and number '{{number}}'"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_arg("Id of the part to update"), name_arg(), number_arg()]
    }
}

/// Asks for a new part below an existing one.
pub struct AddSubPartPrompt;

impl PromptDefinition for AddSubPartPrompt {
    const NAME: &'static str = "add_sub_part";
    const DESCRIPTION: &'static str =
        "Prompt for adding a sub part with the given name and number below an existing part";

    fn template() -> &'static str {
        "Add a new sub part below part with id '{{id}}' to have name '{{name}}' and number '{{number}}'"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_arg("Id of the parent part"), name_arg(), number_arg()]
    }
}

/// Asks to delete a part (and with it, its subtree).
pub struct DeletePartPrompt;

impl PromptDefinition for DeletePartPrompt {
    const NAME: &'static str = "delete_part";
    const DESCRIPTION: &'static str = "Prompt for deleting the part with the given id";

    fn template() -> &'static str {
        "Delete the part with id '{{id}}'"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_arg("Id of the part to delete")]
    }
}
