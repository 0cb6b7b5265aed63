//! Show subtree tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::common::{bom_error_result, text_result};
use crate::domains::bom::{BomService, PartId};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the show_subtree tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShowSubtreeParams {
    /// Id of the part at the top of the rendered tree.
    pub id: PartId,
}

/// Renders a part and all of its descendants as an indented text tree.
pub struct ShowSubtreeTool;

impl ToolDefinition for ShowSubtreeTool {
    const NAME: &'static str = "show_subtree";
    const DESCRIPTION: &'static str = "Show the part with the given Id and all of its sub parts as an \
         indented tree, one line per part. Returns empty text when the part does not exist.";

    type Params = ShowSubtreeParams;

    async fn execute(
        params: &ShowSubtreeParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Show subtree tool called for id {}", params.id);

        match bom.show_subtree(params.id, cancel).await {
            Ok(Some(text)) => text_result(text),
            Ok(None) => {
                debug!("No subtree for missing part {}", params.id);
                text_result(String::new())
            }
            Err(e) => bom_error_result(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::bom::{BomService, NewPart, SqlitePartStore, TreeLimits};
    use crate::domains::tools::definitions::parts::common::test_support::{is_error, text_of};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_show_car_subtree() {
        let bom = BomService::in_memory().await.unwrap();
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();
        let engine = bom.add_sub_part(car, &NewPart::new("Engine", "E-10"), &ct).await.unwrap();
        bom.add_sub_part(car, &NewPart::new("Wheel", "W-20"), &ct).await.unwrap();
        bom.add_sub_part(engine, &NewPart::new("Piston", "P-1"), &ct).await.unwrap();

        let result = ShowSubtreeTool::execute(&ShowSubtreeParams { id: car }, &bom, &ct).await;
        let lines: Vec<_> = text_of(&result).lines().collect();
        assert_eq!(
            lines,
            vec![
                "Part Id: 1, Name: Car, Number: C-100",
                "└─ Part Id: 2, Name: Engine, Number: E-10",
                "    └─ Part Id: 4, Name: Piston, Number: P-1",
                "└─ Part Id: 3, Name: Wheel, Number: W-20",
            ]
        );
    }

    #[tokio::test]
    async fn test_show_missing_root_is_empty() {
        let bom = BomService::in_memory().await.unwrap();
        let result =
            ShowSubtreeTool::execute(&ShowSubtreeParams { id: 9 }, &bom, &CancellationToken::new())
                .await;
        assert!(!is_error(&result));
        assert_eq!(text_of(&result), "");
    }

    #[tokio::test]
    async fn test_show_reports_exceeded_depth() {
        let store = SqlitePartStore::in_memory().await.unwrap();
        let limits = TreeLimits {
            max_depth: 1,
            max_nodes: 100,
        };
        let bom = BomService::new(Arc::new(store), limits);
        let ct = CancellationToken::new();
        let car = bom.create_part(&NewPart::new("Car", "C-100"), &ct).await.unwrap();
        let engine = bom.add_sub_part(car, &NewPart::new("Engine", "E-10"), &ct).await.unwrap();
        bom.add_sub_part(engine, &NewPart::new("Piston", "P-1"), &ct).await.unwrap();

        let result = ShowSubtreeTool::execute(&ShowSubtreeParams { id: car }, &bom, &ct).await;
        assert!(is_error(&result));
        assert!(text_of(&result).contains("maximum depth of 1"));
    }
}
