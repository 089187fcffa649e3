use std::sync::Arc;

use crate::application::ports::{CompletionClient, CompletionError};
use crate::domain::{FormattedRecipe, PromptLanguage};

/// Turns free-text recipe input into a structured recipe by delegating to
/// the external completion service.
pub struct FormatService<C>
where
    C: CompletionClient,
{
    completion_client: Arc<C>,
}

impl<C> FormatService<C>
where
    C: CompletionClient,
{
    pub fn new(completion_client: Arc<C>) -> Self {
        Self { completion_client }
    }

    pub async fn format(
        &self,
        recipe_text: &str,
        language: PromptLanguage,
        model: &str,
    ) -> Result<FormattedRecipe, FormatError> {
        if recipe_text.trim().is_empty() {
            return Err(FormatError::EmptyRecipe);
        }

        let prompt = build_prompt(recipe_text, language);
        let text = self.completion_client.complete(&prompt, model).await?;

        let formatted = FormattedRecipe::new(text);
        if formatted.is_empty() {
            return Err(FormatError::EmptyCompletion);
        }

        tracing::info!(language = %language, model = %model, "Recipe formatted");
        Ok(formatted)
    }
}

fn build_prompt(recipe_text: &str, language: PromptLanguage) -> String {
    match language {
        PromptLanguage::Bengali => format!(
            "নিম্নলিখিত রেসিপিটিকে একটি সুসংগঠিত ফর্ম্যাটে রূপান্তর করুন:\n\
             1. শিরোনাম\n\
             2. উপকরণ (তালিকা হিসাবে)\n\
             3. প্রস্তুত প্রণালী (ক্রমিক পদক্ষেপ হিসাবে)\n\
             4. রান্নার সময় এবং পরিবেশনের পরিমাণ\n\n\
             নিশ্চিত করুন যে ভাষা পরিষ্কার, সংক্ষিপ্ত এবং রান্নার ভিডিওর জন্য অনুসরণ করা সহজ।\n\n\
             রেসিপি: {}",
            recipe_text
        ),
        PromptLanguage::English => format!(
            "Format the following recipe into a well-structured format with:\n\
             1. Title\n\
             2. Ingredients (as a list)\n\
             3. Instructions (as numbered steps)\n\
             4. Cooking time and servings\n\n\
             Make sure the language is clear, concise, and easy to follow for a cooking video.\n\n\
             Recipe: {}",
            recipe_text
        ),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("recipe text is empty")]
    EmptyRecipe,
    #[error("no valid text found in the API response")]
    EmptyCompletion,
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
