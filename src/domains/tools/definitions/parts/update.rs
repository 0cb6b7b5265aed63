//! Update part tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, text_result};
use crate::domains::bom::{BomService, NewPart, PartId};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the update_part tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdatePartParams {
    /// Id of the part to update.
    pub id: PartId,
    /// New part name (1-255 characters).
    pub name: String,
    /// New part number (1-255 characters).
    pub number: String,
}

/// Replaces name and number of an existing part. The parent link is kept.
pub struct UpdatePartTool;

impl ToolDefinition for UpdatePartTool {
    const NAME: &'static str = "update_part";
    const DESCRIPTION: &'static str =
        "Update the name and part number of the part with the given Id. Its position in the tree is unchanged.";

    type Params = UpdatePartParams;

    async fn execute(
        params: &UpdatePartParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Update part tool called for id {}", params.id);

        let part = NewPart::new(&params.name, &params.number);
        match bom.update_part(params.id, &part, cancel).await {
            Ok(()) => text_result("Part updated successfully."),
            Err(e) => bom_error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::parts::common::test_support::{is_error, text_of};

    #[tokio::test]
    async fn test_update_keeps_parent() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();
        let engine = bom.add_sub_part(car, &NewPart::new("Engine", "E-10"), &ct).await.unwrap();

        let params = UpdatePartParams {
            id: engine,
            name: "Motor".to_string(),
            number: "M-1".to_string(),
        };
        let result = UpdatePartTool::execute(&params, &bom, &ct).await;
        assert!(!is_error(&result));
        assert_eq!(text_of(&result), "Part updated successfully.");

        let part = bom.get_part(engine, &ct).await.unwrap().unwrap();
        assert_eq!(part.name, "Motor");
        assert_eq!(part.parent_id, Some(car));
    }

    #[tokio::test]
    async fn test_update_missing_part() {
        let bom = BomService::in_memory().await.unwrap();
        let params = UpdatePartParams {
            id: 7,
            name: "Motor".to_string(),
            number: "M-1".to_string(),
        };
        let result = UpdatePartTool::execute(&params, &bom, &CancellationToken::new()).await;

        assert!(is_error(&result));
        assert_eq!(text_of(&result), "Part with Id '7' not found.");
    }
}
