//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Every route shares one [`BomService`] and forwards the request's
//! cancellation token into the tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use crate::domains::bom::BomService;

use super::definitions::{
    AddSubPartTool, CopyPartTool, CountDescendantsTool, CreatePartTool, DeletePartTool,
    GetPartTool, ListPartsTool, ShowSubtreeTool, ToolDefinition, UpdatePartTool,
};

/// Create the rmcp route for a single tool.
pub fn create_route<T, S>(bom: Arc<BomService>) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(T::to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let cancel = ctx.request_context.ct.clone();
        let bom = bom.clone();
        async move {
            let params: T::Params = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(T::execute(&params, &bom, &cancel).await)
        }
        .boxed()
    })
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(bom: Arc<BomService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<AddSubPartTool, S>(bom.clone()))
        .with_route(create_route::<CopyPartTool, S>(bom.clone()))
        .with_route(create_route::<CountDescendantsTool, S>(bom.clone()))
        .with_route(create_route::<CreatePartTool, S>(bom.clone()))
        .with_route(create_route::<DeletePartTool, S>(bom.clone()))
        .with_route(create_route::<GetPartTool, S>(bom.clone()))
        .with_route(create_route::<ListPartsTool, S>(bom.clone()))
        .with_route(create_route::<ShowSubtreeTool, S>(bom.clone()))
        .with_route(create_route::<UpdatePartTool, S>(bom))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    async fn test_bom() -> Arc<BomService> {
        Arc::new(BomService::in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_bom().await);
        let tools = router.list_all();
        assert_eq!(tools.len(), 9);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_part"));
        assert!(names.contains(&"list_parts"));
        assert!(names.contains(&"create_part"));
        assert!(names.contains(&"add_sub_part"));
        assert!(names.contains(&"show_subtree"));
        assert!(names.contains(&"count_descendants"));
    }

    #[tokio::test]
    async fn test_registry_matches_router() {
        let bom = test_bom().await;
        let registry = ToolRegistry::new(bom.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(bom);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_tool_schemas_name_their_arguments() {
        let tool = AddSubPartTool::to_tool();
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("id").is_some());
        assert!(properties.get("name").is_some());
        assert!(properties.get("number").is_some());
    }
}
