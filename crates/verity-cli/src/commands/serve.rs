//! Serve command - start the HTTP validation API.

use std::sync::Arc;

use colored::Colorize;
use verity::{Engine, GeminiProvider, LlmProvider, MockProvider};

use crate::server::{app, state::AppState};

pub fn run(
    host: String,
    port: u16,
    mock_llm: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = Engine::new()?;

    // Provider selection: explicit mock beats the environment; no key means
    // the isField endpoint answers 400 instead of failing at startup.
    let provider: Option<Arc<dyn LlmProvider>> = if mock_llm {
        Some(Arc::new(MockProvider::new()))
    } else {
        match GeminiProvider::from_env() {
            Ok(provider) => Some(Arc::new(provider)),
            Err(_) => None,
        }
    };

    match &provider {
        Some(provider) => {
            if verbose {
                println!("LLM provider: {}", provider.name());
            }
        }
        None => println!(
            "{} No LLM configured; /api/isField is disabled. Set GEMINI_API_KEY or pass --mock-llm.",
            "Note:".yellow()
        ),
    }

    if let Some(provider) = provider {
        engine = engine.with_llm(provider);
    }

    let state = AppState::new(engine);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        app::run_server(state, &host, port).await
    })
}
