use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jargon_core::{ChatSettings, Mode, ModelId};
use jargon_interaction::OllamaClient;

mod repl;
mod reveal;
mod stats;

#[derive(Parser)]
#[command(name = "jargon")]
#[command(about = "Football Jargon AI - four-word jargon chat against a local Ollama model", long_about = None)]
struct Cli {
    /// Base URL of the Ollama host
    #[arg(long, default_value = "http://localhost:11434")]
    url: String,

    /// Local model to chat with
    #[arg(long, default_value_t = ModelId::default())]
    model: ModelId,

    /// Football jargon mode
    #[arg(long, default_value_t = Mode::default())]
    mode: Mode,

    /// Sampling temperature (clamped to 0.0..=1.5)
    #[arg(long)]
    temperature: Option<f32>,

    /// Disable the canned thinking lines
    #[arg(long)]
    no_thinking: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = ChatSettings::default();
    settings.model = cli.model;
    settings.mode = cli.mode;
    if let Some(temperature) = cli.temperature {
        settings.set_temperature(temperature);
    }
    if cli.no_thinking {
        settings.show_thinking = false;
    }

    let client = OllamaClient::new().with_base_url(cli.url);

    repl::run(client, settings).await
}
