use crate::generator::{GenerationSettings, TextGenerator};
use crate::persona::ReviewResult;
use crate::registry::{PersonaRegistry, SelectionWarning};

pub struct ReviewDispatcher {
    registry: PersonaRegistry,
    generator: Box<dyn TextGenerator>,
    settings: GenerationSettings,
}

/// Results of one dispatch, in registry order
#[derive(Debug)]
pub struct Dispatch {
    pub results: Vec<ReviewResult>,
    pub warning: Option<SelectionWarning>,
}

impl ReviewDispatcher {
    pub fn new(
        registry: PersonaRegistry,
        generator: Box<dyn TextGenerator>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            registry,
            generator,
            settings,
        }
    }

    /// Review `code` with every persona matching `selection`.
    ///
    /// A failing persona never stops the ones after it.
    pub async fn run(&self, code: &str, selection: Option<&[String]>) -> Dispatch {
        let selected = self.registry.select(selection);

        if let Some(warning) = &selected.warning {
            tracing::warn!("{warning}");
            return Dispatch {
                results: Vec::new(),
                warning: selected.warning,
            };
        }

        tracing::info!(
            personas = selected.personas.len(),
            generator = self.generator.name(),
            "Starting review"
        );

        let mut results = Vec::with_capacity(selected.personas.len());
        for persona in selected.personas {
            tracing::info!("Running {} review", persona.name());
            let result = persona
                .review(code, self.generator.as_ref(), &self.settings)
                .await;
            results.push(result);
        }

        Dispatch {
            results,
            warning: None,
        }
    }
}
