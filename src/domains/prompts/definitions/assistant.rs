//! Assistant prompt: how an agent should use this server's tools.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Tool-usage rules for an agent answering questions about prototypes.
pub struct PrototypeAssistantPrompt;

impl PromptDefinition for PrototypeAssistantPrompt {
    const NAME: &'static str = "prototype_assistant";
    const DESCRIPTION: &'static str =
        "Rules for answering questions about mock-API prototypes with this server's tools";

    fn template() -> &'static str {
        "You are an assistant for a mock-API service.\n\
         Rules:\n\
         - If the user asks for a greeting or gives a name, use the tool 'hello_world' with the argument 'name'.\n\
         - If the user asks to see prototypes or endpoints, or to list names, methods or urlPaths, use the tool 'list_prototypes'.\n\
         - If the user asks for the details of a prototype, use the tool 'get_prototype_detail' with the argument 'id' or 'name'.\n\
         - Do not invent results; answer only with the output of the tools.\
         {{#if request}}\n\nUser request: {{request}}{{/if}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "request".to_string(),
            title: None,
            description: Some("The user's message to answer under these rules".to_string()),
            required: Some(false),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_prompt_mentions_every_tool() {
        let template = PrototypeAssistantPrompt::template();
        for tool in ["hello_world", "list_prototypes", "get_prototype_detail"] {
            assert!(template.contains(tool), "missing {tool}");
        }
    }

    #[test]
    fn test_request_argument_is_optional() {
        let args = PrototypeAssistantPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "request");
        assert_eq!(args[0].required, Some(false));
    }
}
