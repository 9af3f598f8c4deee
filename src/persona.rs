//! Review personas and their per-invocation results

use crate::builtin::META_PROMPT;
use crate::generator::{GenerationSettings, TextGenerator};
use crate::prompt::PromptTemplate;

/// A named review strategy: a focus label plus the prompt template it sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    name: String,
    focus: String,
    template: PromptTemplate,
}

impl Persona {
    /// Surrounding whitespace is stripped from the name.
    pub fn new(
        name: impl Into<String>,
        focus: impl Into<String>,
        template: impl Into<PromptTemplate>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            focus: focus.into(),
            template: template.into(),
        }
    }

    /// Build a persona whose template is written by the model itself.
    ///
    /// If the meta-prompt call fails the persona is still returned, with an
    /// empty template. Reviews by such a persona report a failure instead of
    /// sending an empty prompt.
    pub async fn from_description(
        name: impl Into<String>,
        focus: impl Into<String>,
        description: &str,
        generator: &dyn TextGenerator,
        settings: &GenerationSettings,
    ) -> Self {
        let name = name.into();
        tracing::info!(persona = %name, "Generating prompt template using meta-prompting");

        let meta_prompt = META_PROMPT.replace("{description}", description.trim());
        let template = match generator.generate(&meta_prompt, settings).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(persona = %name, error = %e, "Error generating persona prompt");
                String::new()
            }
        };

        let persona = Self::new(name, focus, template);
        tracing::debug!(
            persona = %persona.name,
            template = persona.template.as_str(),
            "Prompt template ready"
        );
        persona
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn focus(&self) -> &str {
        &self.focus
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Review `code` from this persona's perspective.
    ///
    /// Never fails: template and endpoint errors are folded into a
    /// [`ReviewOutcome::Failure`].
    pub async fn review(
        &self,
        code: &str,
        generator: &dyn TextGenerator,
        settings: &GenerationSettings,
    ) -> ReviewResult {
        let outcome = match self.template.render(code) {
            Err(e) => {
                tracing::warn!(persona = %self.name, error = %e, "Cannot build review prompt");
                ReviewOutcome::Failure {
                    error: format!("Error building review prompt: {e}"),
                }
            }
            Ok(prompt) => match generator.generate(&prompt, settings).await {
                Ok(review) => ReviewOutcome::Success { review },
                Err(e) => {
                    tracing::warn!(persona = %self.name, error = %e, "Review request failed");
                    ReviewOutcome::Failure {
                        error: format!("Error during review: {e}"),
                    }
                }
            },
        };

        ReviewResult {
            persona_name: self.name.clone(),
            focus: self.focus.clone(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Success { review: String },
    Failure { error: String },
}

/// One persona's contribution to a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewResult {
    pub persona_name: String,
    pub focus: String,
    pub outcome: ReviewOutcome,
}

impl ReviewResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ReviewOutcome::Success { .. })
    }

    /// The review text, or the error message for a failure
    pub fn body(&self) -> &str {
        match &self.outcome {
            ReviewOutcome::Success { review } => review,
            ReviewOutcome::Failure { error } => error,
        }
    }
}
