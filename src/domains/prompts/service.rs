//! Prompt service implementation.
//!
//! Holds the registered templates and renders them on request.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for listing and instantiating prompts.
pub struct PromptService {
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a PromptService holding every registered prompt.
    pub fn new() -> Self {
        let prompts = get_all_prompts()
            .into_iter()
            .map(|template| (template.name.clone(), template))
            .collect::<HashMap<_, _>>();
        info!("PromptService initialized with {} prompt(s)", prompts.len());
        Self { prompts }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        let mut prompts: Vec<Prompt> = self
            .prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect();
        prompts.sort_by(|a, b| a.name.cmp(&b.name));
        prompts
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        if let Some(missing) = template
            .arguments
            .iter()
            .find(|arg| arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name))
        {
            return Err(PromptError::missing_argument(&missing.name));
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &GetPromptResult) -> String {
        let content = serde_json::to_value(&result.messages[0].content).unwrap();
        content["text"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_list_prompts() {
        let service = PromptService::new();
        let prompts = service.list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "prototype_assistant");
    }

    #[tokio::test]
    async fn test_get_prompt_without_request() {
        let service = PromptService::new();
        let result = service.get_prompt("prototype_assistant", None).await.unwrap();
        let text = text_of(&result);
        assert!(text.contains("get_prototype_detail"));
        assert!(!text.contains("User request"));
    }

    #[tokio::test]
    async fn test_get_prompt_with_request() {
        let service = PromptService::new();
        let mut args = HashMap::new();
        args.insert("request".to_string(), "show me the login prototype".to_string());

        let result = service
            .get_prompt("prototype_assistant", Some(args))
            .await
            .unwrap();
        assert!(text_of(&result).ends_with("User request: show me the login prototype"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
