//! Get part tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{bom_error_result, not_found_message, structured_result, text_result};
use crate::domains::bom::{BomService, PartId};
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the get_part tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPartParams {
    /// Id of the part to read.
    pub id: PartId,
}

/// Reads a single part.
pub struct GetPartTool;

impl ToolDefinition for GetPartTool {
    const NAME: &'static str = "get_part";
    const DESCRIPTION: &'static str = "Get the part with the given Id from the BOM.";

    type Params = GetPartParams;

    async fn execute(
        params: &GetPartParams,
        bom: &BomService,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        info!("Get part tool called for id {}", params.id);

        match bom.get_part(params.id, cancel).await {
            Ok(Some(part)) => structured_result(part.describe(), &part),
            Ok(None) => text_result(not_found_message(params.id)),
            Err(e) => bom_error_result(&e),
        }
    }
}
