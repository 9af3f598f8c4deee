use async_trait::async_trait;

use crate::error::GenerationError;

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_output_tokens: 2000,
            temperature: 0.1,
        }
    }
}

/// A single synchronous request/response round-trip to a language model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Name shown in logs (e.g. "gemini")
    fn name(&self) -> &str;

    async fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, GenerationError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Replays canned replies in order and records every prompt and
    /// settings value it receives.
    ///
    /// A `None` reply simulates an endpoint failure.
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Option<String>>>,
        prompts: Mutex<Vec<String>>,
        settings: Mutex<Vec<GenerationSettings>>,
    }

    impl ScriptedGenerator {
        pub fn new<I, S>(replies: I) -> Self
        where
            I: IntoIterator<Item = Option<S>>,
            S: Into<String>,
        {
            Self {
                replies: Mutex::new(replies.into_iter().map(|r| r.map(Into::into)).collect()),
                prompts: Mutex::new(Vec::new()),
                settings: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }

        pub fn settings(&self) -> Vec<GenerationSettings> {
            self.settings.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(
            &self,
            prompt: &str,
            settings: &GenerationSettings,
        ) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.settings.lock().unwrap().push(*settings);
            match self.replies.lock().unwrap().pop_front() {
                Some(Some(text)) => Ok(text),
                Some(None) => Err(GenerationError::Api {
                    status: 429,
                    body: "quota exceeded".to_string(),
                }),
                None => Err(GenerationError::EmptyResponse),
            }
        }
    }
}
