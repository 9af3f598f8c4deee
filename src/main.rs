mod builtin;
mod cli;
mod config;
mod dispatch;
mod error;
mod gemini;
mod generator;
mod input;
mod persona;
mod prompt;
mod registry;
mod report;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use dispatch::ReviewDispatcher;
use gemini::GeminiClient;
use persona::Persona;
use registry::PersonaRegistry;
use report::Report;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = cli.api.into_config()?;
    tracing::debug!(model = %config.model, base_url = %config.api_base_url, "Configuration loaded");

    let client = GeminiClient::new(&config).context("Failed to create Gemini client")?;

    let mut registry = PersonaRegistry::with_builtin();
    if let Some(description) = &cli.dynamic.description {
        let persona = Persona::from_description(
            cli.dynamic.name.as_str(),
            cli.dynamic.focus.as_str(),
            description,
            &client,
            &config.generation,
        )
        .await;
        registry.register(persona)?;
    }

    if cli.list_personas {
        print!("{}", report::render_persona_listing(&registry));
        return Ok(());
    }

    let code = match &cli.file {
        Some(path) => {
            tracing::info!("Reading file: {}", path.display());
            input::read_code(path)?
        }
        None => {
            tracing::info!("No input file specified, using sample code");
            input::SAMPLE_CODE.to_string()
        }
    };

    tracing::info!(personas = registry.len(), "Persona registry ready");
    let dispatcher = ReviewDispatcher::new(registry, Box::new(client), config.generation);
    let dispatch = dispatcher.run(&code, cli.personas.as_deref()).await;

    if dispatch.results.is_empty() {
        if dispatch.warning.is_some() {
            eprintln!("❌ No reviews generated. Use --list-personas to see available personas.");
        } else {
            eprintln!("❌ No reviews generated.");
        }
        return Ok(());
    }

    let rendered = Report::new(&dispatch.results).render();
    println!("{rendered}");

    std::fs::write(&cli.output, &rendered)
        .with_context(|| format!("Failed to write report to {}", cli.output.display()))?;
    tracing::info!("Review report saved to {}", cli.output.display());

    Ok(())
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
