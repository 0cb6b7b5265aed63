//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()` and `prompt_names()`

use super::definitions::{
    AddSubPartPrompt, CountDescendantsPrompt, CreatePartPrompt, DeletePartPrompt, GetPartPrompt,
    GetPartsPrompt, PromptDefinition, ShowSubtreePrompt, UpdatePartPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<GetPartsPrompt>(),
        build_template::<GetPartPrompt>(),
        build_template::<CreatePartPrompt>(),
        build_template::<UpdatePartPrompt>(),
        build_template::<AddSubPartPrompt>(),
        build_template::<DeletePartPrompt>(),
        build_template::<ShowSubtreePrompt>(),
        build_template::<CountDescendantsPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        GetPartsPrompt::NAME,
        GetPartPrompt::NAME,
        CreatePartPrompt::NAME,
        UpdatePartPrompt::NAME,
        AddSubPartPrompt::NAME,
        DeletePartPrompt::NAME,
        ShowSubtreePrompt::NAME,
        CountDescendantsPrompt::NAME,
    ]
}
