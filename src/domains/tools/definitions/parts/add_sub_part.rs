//! Add sub part tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, structured_result};
use crate::domains::bom::{BomService, NewPart, PartId};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the add_sub_part tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddSubPartParams {
    /// Id of the existing parent part.
    pub id: PartId,
    /// Name of the new sub part (1-255 characters).
    pub name: String,
    /// Part number of the new sub part (1-255 characters).
    pub number: String,
}

/// Creates a new part below an existing one.
pub struct AddSubPartTool;

impl ToolDefinition for AddSubPartTool {
    const NAME: &'static str = "add_sub_part";
    const DESCRIPTION: &'static str =
        "Create a new sub part with a name and a part number below the part with the given Id.";

    type Params = AddSubPartParams;

    async fn execute(
        params: &AddSubPartParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Add sub part tool called below part {}", params.id);

        let part = NewPart::new(&params.name, &params.number);
        match bom.add_sub_part(params.id, &part, cancel).await {
            Ok(id) => structured_result(
                format!(
                    "Sub part created successfully with Id '{}' below part '{}'.",
                    id, params.id
                ),
                &json!({ "id": id, "parentId": params.id }),
            ),
            Err(e) => bom_error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::parts::common::test_support::{is_error, text_of};

    fn params(id: PartId, name: &str, number: &str) -> AddSubPartParams {
        AddSubPartParams {
            id,
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_sub_part_links_parent() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();

        let result = AddSubPartTool::execute(&params(car, "Engine", "E-10"), &bom, &ct).await;
        assert!(!is_error(&result));
        let data = result.structured_content.unwrap();
        assert_eq!(data["parentId"], car);

        let engine = data["id"].as_i64().unwrap();
        let part = bom.get_part(engine, &ct).await.unwrap().unwrap();
        assert_eq!(part.parent_id, Some(car));
    }

    #[tokio::test]
    async fn test_add_sub_part_missing_parent() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();

        let result = AddSubPartTool::execute(&params(5, "Engine", "E-10"), &bom, &ct).await;
        assert!(is_error(&result));
        assert_eq!(text_of(&result), "Part with Id '5' not found.");
        assert!(bom.list_parts(&ct).await.unwrap().is_empty());
    }
}
