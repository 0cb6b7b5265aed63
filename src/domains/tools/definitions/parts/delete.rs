//! Delete part tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, not_found_message, structured_result};
use crate::domains::bom::{BomService, PartId};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the delete_part tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeletePartParams {
    /// Id of the part to delete. All of its descendants are deleted with it.
    pub id: PartId,
}

/// Deletes a part and its whole subtree.
pub struct DeletePartTool;

impl ToolDefinition for DeletePartTool {
    const NAME: &'static str = "delete_part";
    const DESCRIPTION: &'static str =
        "Delete the part with the given Id together with all of its sub parts.";

    type Params = DeletePartParams;

    async fn execute(
        params: &DeletePartParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Delete part tool called for id {}", params.id);

        match bom.delete_part(params.id, cancel).await {
            Ok(deleted) => {
                let text = if deleted {
                    "Part deleted successfully.".to_string()
                } else {
                    not_found_message(params.id)
                };
                structured_result(text, &json!({ "id": params.id, "deleted": deleted }))
            }
            Err(e) => bom_error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bom::NewPart;
    use crate::domains::tools::definitions::parts::common::test_support::{is_error, text_of};

    #[tokio::test]
    async fn test_delete_subtree() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();
        bom.add_sub_part(car, &NewPart::new("Engine", "E-10"), &ct).await.unwrap();

        let result = DeletePartTool::execute(&DeletePartParams { id: car }, &bom, &ct).await;
        assert!(!is_error(&result));
        assert_eq!(result.structured_content.unwrap()["deleted"], true);
        assert!(bom.list_parts(&ct).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_part() {
        let bom = BomService::in_memory().await.unwrap();
        let result =
            DeletePartTool::execute(&DeletePartParams { id: 3 }, &bom, &CancellationToken::new())
                .await;

        assert!(!is_error(&result));
        assert_eq!(text_of(&result), "Part with Id '3' not found.");
        assert_eq!(result.structured_content.unwrap()["deleted"], false);
    }
}
