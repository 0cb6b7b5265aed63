//! Count descendants tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, structured_result};
use crate::domains::bom::{BomService, PartId};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the count_descendants tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CountDescendantsParams {
    /// Id of the part whose descendants are counted.
    pub id: PartId,
}

/// Counts every part below a given part, at any depth.
pub struct CountDescendantsTool;

impl ToolDefinition for CountDescendantsTool {
    const NAME: &'static str = "count_descendants";
    const DESCRIPTION: &'static str = "Count all sub parts below the part with the given Id, at any depth. \
         The part itself is not counted; a missing part has 0 descendants.";

    type Params = CountDescendantsParams;

    async fn execute(
        params: &CountDescendantsParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Count descendants tool called for id {}", params.id);

        match bom.count_descendants(params.id, cancel).await {
            Ok(count) => structured_result(
                format!("Part with Id '{}' has {} descendants.", params.id, count),
                &json!({ "id": params.id, "count": count }),
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
    async fn test_count_nested_descendants() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();
        let engine = bom.add_sub_part(car, &NewPart::new("Engine", "E-10"), &ct).await.unwrap();
        bom.add_sub_part(car, &NewPart::new("Wheel", "W-20"), &ct).await.unwrap();
        bom.add_sub_part(engine, &NewPart::new("Piston", "P-1"), &ct).await.unwrap();

        let result =
            CountDescendantsTool::execute(&CountDescendantsParams { id: car }, &bom, &ct).await;
        assert_eq!(text_of(&result), "Part with Id '1' has 3 descendants.");
        assert_eq!(result.structured_content.unwrap()["count"], 3);
    }

    #[tokio::test]
    async fn test_count_cancelled() {
        let bom = BomService::in_memory().await.unwrap();
        let cancelled = CancellationToken::new();
        cancelled.cancel();

        let result =
            CountDescendantsTool::execute(&CountDescendantsParams { id: 1 }, &bom, &cancelled).await;
        assert!(is_error(&result));
        assert_eq!(text_of(&result), "Operation cancelled");
    }
}
