//! Prompts for reading parts.

use super::{PromptDefinition, id_arg};
use rmcp::model::PromptArgument;

/// Asks for every part in the BOM.
pub struct GetPartsPrompt;

impl PromptDefinition for GetPartsPrompt {
    const NAME: &'static str = "get_parts";
    const DESCRIPTION: &'static str = "Prompt for reading all available parts from the BOM";

    fn template() -> &'static str {
        "Show me all parts"
    }

    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }
}

/// Asks for a single part.
pub struct GetPartPrompt;

impl PromptDefinition for GetPartPrompt {
    const NAME: &'static str = "get_part";
    const DESCRIPTION: &'static str = "Prompt for reading a single part with the given id from the BOM";

    fn template() -> &'static str {
        "Show me all information for part with id {{id}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![id_arg("Id of the part to show")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_parts_has_no_arguments() {
        assert_eq!(GetPartsPrompt::NAME, "get_parts");
        assert!(GetPartsPrompt::arguments().is_empty());
        assert!(!GetPartsPrompt::template().contains("{{"));
    }

    #[test]
    fn test_get_part_metadata() {
        let args = GetPartPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "id");
        assert_eq!(args[0].required, Some(true));
        assert!(GetPartPrompt::template().contains("{{id}}"));
    }
}
