//! Prompt templates.
//!
//! Templates support two constructs:
//! - `{{variable}}` is replaced by the argument's value, or removed when unset
//! - `{{#if variable}}...{{/if}}` keeps its body only when the argument is
//!   set and non-empty (blocks do not nest)
//!
//! Rendering is a single left-to-right pass, so argument values are inserted
//! verbatim and never re-interpreted as template syntax.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const IF_PREFIX: &str = "#if ";
const END_IF: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template source.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        render(&self.template, arguments)
    }
}

fn render(source: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(open) = rest.find(OPEN) {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + OPEN.len()..];
        let close = after_open
            .find(CLOSE)
            .ok_or_else(|| PromptError::template("Unclosed {{ tag"))?;
        let tag = after_open[..close].trim();
        rest = &after_open[close + CLOSE.len()..];

        if let Some(var) = tag.strip_prefix(IF_PREFIX) {
            let end = rest
                .find(END_IF)
                .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;
            let body = &rest[..end];
            rest = &rest[end + END_IF.len()..];

            let is_set = arguments.get(var.trim()).is_some_and(|v| !v.is_empty());
            if is_set {
                out.push_str(&render(body, arguments)?);
            }
        } else if tag.starts_with('#') || tag.starts_with('/') {
            return Err(PromptError::template(format!("Unexpected tag {{{{{}}}}}", tag)));
        } else if let Some(value) = arguments.get(tag) {
            out.push_str(value);
        }
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");
        let result = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_unset_placeholder_is_removed() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "Hello, !");
    }

    #[test]
    fn test_conditional_with_value() {
        let template =
            PromptTemplate::new("test", None, vec![], "Hello{{#if name}}, {{name}}{{/if}}!");
        let result = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_conditional_with_empty_value() {
        let template =
            PromptTemplate::new("test", None, vec![], "Hello{{#if name}}, {{name}}{{/if}}!");
        assert_eq!(template.render(&args(&[("name", "")])).unwrap(), "Hello!");
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let template = PromptTemplate::new("test", None, vec![], "Q: {{request}}");
        let result = template
            .render(&args(&[("request", "what is {{secret}}?")]))
            .unwrap();
        assert_eq!(result, "Q: what is {{secret}}?");
    }

    #[test]
    fn test_missing_endif_is_error() {
        let template = PromptTemplate::new("test", None, vec![], "{{#if name}}dangling");
        assert!(template.render(&HashMap::new()).is_err());
    }

    #[test]
    fn test_stray_close_tag_is_error() {
        let template = PromptTemplate::new("test", None, vec![], "oops{{/if}}");
        assert!(template.render(&HashMap::new()).is_err());
    }
}
