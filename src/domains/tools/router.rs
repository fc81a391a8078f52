//! Tool Router - builds the rmcp ToolRouter used by the STDIO/TCP transports.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{HelloWorldTool, ListPrototypesTool, PrototypeDetailTool};
use super::registry::ToolRegistry;
use crate::core::config::Config;

/// Build the tool router with all registered tools.
///
/// All routes share one registry, so rmcp calls and
/// [`ToolDispatch`](super::ToolDispatch) calls run the same code.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let registry = Arc::new(ToolRegistry::new(config));
    ToolRouter::new()
        .with_route(HelloWorldTool::create_route(registry.clone()))
        .with_route(ListPrototypesTool::create_route(registry.clone()))
        .with_route(PrototypeDetailTool::create_route(registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(Config::default()));
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| &*t.name).collect();
        assert!(names.contains(&"hello_world"));
        assert!(names.contains(&"list_prototypes"));
        assert!(names.contains(&"get_prototype_detail"));
    }

    #[test]
    fn test_registry_matches_router() {
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(Config::default()));
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| &*t.name).collect();

        let registry_names = ToolRegistry::tool_names();
        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
