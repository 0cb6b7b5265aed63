//! Prompt templates module.
//!
//! A template is plain text with `{{variable}}` placeholders; every placeholder
//! must be resolved by an argument.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
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
    ///
    /// Fails if a placeholder is left without a value.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        if let Some(start) = result.find("{{") {
            let end = result[start..]
                .find("}}")
                .map(|offset| start + offset + 2)
                .unwrap_or(result.len());
            return Err(PromptError::template(format!(
                "Unresolved placeholder {} in prompt '{}'",
                &result[start..end],
                self.name
            )));
        }

        Ok(result)
    }
}
