//! Create part tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, structured_result};
use crate::domains::bom::{BomService, NewPart};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the create_part tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePartParams {
    /// Part name (1-255 characters).
    pub name: String,
    /// Part number (1-255 characters).
    pub number: String,
}

/// Creates a new root part.
pub struct CreatePartTool;

impl ToolDefinition for CreatePartTool {
    const NAME: &'static str = "create_part";
    const DESCRIPTION: &'static str = "Create a new root part with a name and a part number.";

    type Params = CreatePartParams;

    async fn execute(
        params: &CreatePartParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Create part tool called: {}", params.name);

        let part = NewPart::new(&params.name, &params.number);
        match bom.create_part(&part, cancel).await {
            Ok(id) => structured_result(
                format!("Part created successfully with Id '{}'.", id),
                &json!({ "id": id }),
            ),
            Err(e) => bom_error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::parts::common::test_support::{is_error, text_of};

    fn params(name: &str, number: &str) -> CreatePartParams {
        CreatePartParams {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_new_id() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();

        let result = CreatePartTool::execute(&params("Car", "C-100"), &bom, &ct).await;
        assert!(!is_error(&result));
        assert_eq!(text_of(&result), "Part created successfully with Id '1'.");

        let part = bom.get_part(1, &ct).await.unwrap().unwrap();
        assert!(part.is_root());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_number() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();

        let result = CreatePartTool::execute(&params("Car", "   "), &bom, &ct).await;
        assert!(is_error(&result));
        assert!(text_of(&result).starts_with("Invalid number"));
        assert!(bom.list_parts(&ct).await.unwrap().is_empty());
    }
}
