//! List parts tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, structured_result};
use crate::domains::bom::{BomService, Part};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the list_parts tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListPartsParams {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PartListing<'a> {
    parts: &'a [Part],
    total_count: usize,
}

/// Lists every part in the BOM.
pub struct ListPartsTool;

impl ToolDefinition for ListPartsTool {
    const NAME: &'static str = "list_parts";
    const DESCRIPTION: &'static str =
        "List all parts in the BOM, root parts and sub parts alike, ordered by Id.";

    type Params = ListPartsParams;

    async fn execute(
        _params: &ListPartsParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("List parts tool called");

        let parts = match bom.list_parts(cancel).await {
            Ok(parts) => parts,
            Err(e) => return bom_error_result(&e),
        };

        let text = if parts.is_empty() {
            "No parts found.".to_string()
        } else {
            parts
                .iter()
                .map(Part::describe)
                .collect::<Vec<_>>()
                .join("\n")
        };

        structured_result(
            text,
            &PartListing {
                parts: &parts,
                total_count: parts.len(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bom::NewPart;
    use crate::domains::tools::definitions::parts::common::test_support::text_of;

    #[tokio::test]
    async fn test_list_empty_store() {
        let bom = BomService::in_memory().await.unwrap();
        let result =
            ListPartsTool::execute(&ListPartsParams {}, &bom, &CancellationToken::new()).await;

        assert_eq!(text_of(&result), "No parts found.");
        assert_eq!(result.structured_content.unwrap()["totalCount"], 0);
    }

    #[tokio::test]
    async fn test_list_includes_sub_parts() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();
        bom.add_sub_part(car, &NewPart::new("Engine", "E-10"), &ct).await.unwrap();

        let result = ListPartsTool::execute(&ListPartsParams {}, &bom, &ct).await;
        let lines: Vec<_> = text_of(&result).lines().collect();
        assert_eq!(
            lines,
            vec![
                "Part with Id '1', Name: 'Car', Number: 'C-100', Parent: ''",
                "Part with Id '2', Name: 'Engine', Number: 'E-10', Parent: '1'",
            ]
        );
        assert_eq!(result.structured_content.unwrap()["parts"][1]["parentId"], 1);
    }
}
