//! Prompt service implementation.
//!
//! The PromptService keeps the registered templates and instantiates them with
//! client-supplied arguments.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::domains::bom::PartId;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Registry of available prompts, keyed by name.
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let prompts = get_all_prompts()
            .into_iter()
            .map(|template| {
                debug!("Registering prompt: {}", template.name);
                (template.name.clone(), template)
            })
            .collect();

        Self { prompts }
    }

    /// List all available prompts, sorted by name.
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

        for arg in &template.arguments {
            let value = arguments.get(&arg.name);
            if arg.required.unwrap_or(false) && value.is_none() {
                return Err(PromptError::missing_argument(&arg.name));
            }
            if let Some(value) = value.filter(|_| arg.name == "id") {
                if value.trim().parse::<PartId>().is_err() {
                    return Err(PromptError::invalid_argument("id", "must be an integer part id"));
                }
            }
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
