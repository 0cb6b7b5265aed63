//! Copy part tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, structured_result};
use crate::domains::bom::{BomService, PartId};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the copy_part tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CopyPartParams {
    /// Id of the part to copy.
    pub id: PartId,
}

/// Copies a part as a new sibling (same parent, name and number, no children).
pub struct CopyPartTool;

impl ToolDefinition for CopyPartTool {
    const NAME: &'static str = "copy_part";
    const DESCRIPTION: &'static str = "Copy the part with the given Id. The copy gets the same name, \
         part number and parent as the original; sub parts are not copied.";

    type Params = CopyPartParams;

    async fn execute(
        params: &CopyPartParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Copy part tool called for id {}", params.id);

        match bom.copy_part(params.id, cancel).await {
            Ok(copy) => structured_result(
                format!("Part '{}' copied to new part with Id '{}'.", params.id, copy.id),
                &copy,
            ),
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
    async fn test_copy_creates_sibling_without_children() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();
        let engine = bom.add_sub_part(car, &NewPart::new("Engine", "E-10"), &ct).await.unwrap();
        bom.add_sub_part(engine, &NewPart::new("Piston", "P-1"), &ct).await.unwrap();

        let result = CopyPartTool::execute(&CopyPartParams { id: engine }, &bom, &ct).await;
        assert!(!is_error(&result));
        assert_eq!(text_of(&result), "Part '2' copied to new part with Id '4'.");

        let data = result.structured_content.unwrap();
        assert_eq!(data["parentId"], car);
        assert_eq!(data["number"], "E-10");
        assert_eq!(bom.count_descendants(4, &ct).await.unwrap(), 0);
        assert_eq!(bom.count_descendants(car, &ct).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_copy_missing_part() {
        let bom = BomService::in_memory().await.unwrap();
        let result =
            CopyPartTool::execute(&CopyPartParams { id: 1 }, &bom, &CancellationToken::new()).await;
        assert!(is_error(&result));
    }
}
