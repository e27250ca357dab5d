//! Demo driver: scores a user and walks the recommended flow's opening turn.
//!
//! Usage: `rafiq [user_id] [response...]`. Each extra argument is sent as a
//! response in order.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rafiq::adapters::{FileProfileSource, InMemoryProfileSource};
use rafiq::application::{
    GetAvailableResponsesHandler, LoadProfileCommand, LoadProfileHandler, RespondCommand,
    RespondHandler, RunPredictionHandler, StartNudgeCommand, StartNudgeHandler,
};
use rafiq::config::{AppConfig, LoggingConfig};
use rafiq::domain::dialogue::DialogueEngine;
use rafiq::domain::flow::FlowCatalog;
use rafiq::domain::foundation::UserId;
use rafiq::domain::scoring::RuleBasedScorer;
use rafiq::ports::ProfileSource;

const DEFAULT_USER: &str = "fatima_hassan";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let catalog = match &config.catalog.path {
        Some(path) => Arc::new(FlowCatalog::from_yaml(&tokio::fs::read_to_string(path).await?)?),
        None => FlowCatalog::builtin(),
    };
    let engine = Arc::new(
        DialogueEngine::new(catalog).with_years_of_experience(config.dialogue.years_of_experience),
    );
    let profiles: Arc<dyn ProfileSource> = match &config.profiles.path {
        Some(path) => Arc::new(FileProfileSource::new(path)),
        None => Arc::new(InMemoryProfileSource::demo()),
    };

    let mut args = std::env::args().skip(1);
    let user_id = UserId::new(args.next().unwrap_or_else(|| DEFAULT_USER.to_string()))?;

    let loader = LoadProfileHandler::new(profiles);
    let mut session = loader.handle(LoadProfileCommand { user_id }).await?.session;

    let prediction = RunPredictionHandler::new(Arc::new(RuleBasedScorer::new())).handle(&mut session)?;
    println!("Top recommendation: {}", prediction.scores.top());
    println!("Confidence: {:.1}%", prediction.scores.confidence() * 100.0);
    println!("Expected outcome: {}", prediction.scores.expected_outcome());
    for score in prediction.scores.ranked() {
        println!("  {:<12} {:.1}%", score.action.id(), score.score * 100.0);
    }

    let started = StartNudgeHandler::new(Arc::clone(&engine))
        .handle(&mut session, StartNudgeCommand::default())?;
    println!("\n{}\n", started.message);

    let respond = RespondHandler::new(Arc::clone(&engine));
    for response in args {
        println!("> {}", response);
        match respond.handle(&mut session, RespondCommand { response }) {
            Ok(result) => {
                if let Some(message) = result.message {
                    println!("\n{}\n", message);
                }
            }
            Err(e) => {
                error!(code = %e.code(), error = %e, "Response failed");
                return Err(e.into());
            }
        }
    }

    let options = GetAvailableResponsesHandler::new(engine).handle(&session)?;
    if !options.is_empty() {
        println!("Options: {}", options.join(" | "));
    }

    info!(
        session_id = %session.id(),
        messages = session.transcript().len(),
        "Demo finished"
    );
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
