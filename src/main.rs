mod diagram;
mod export;
mod llm;
mod story;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use llm::{GeminiClient, LlmConfig, LlmError};
use story::{StoryError, StoryRequest, catalog};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("unknown genre `{0}`; run with --list-genres to see valid ids")]
    UnknownGenre(String),
    #[error("unknown length `{0}`; run with --list-lengths to see valid ids")]
    UnknownLength(String),
    #[error("no topic given")]
    MissingTopic,
    #[error("LLM config: {0}")]
    Config(#[from] LlmError),
    #[error("generation failed: {0}")]
    Generate(#[from] StoryError),
    #[error("write failed for {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "rasskaz", about = "Turns a topic into an illustrated Russian explainer story")]
struct Cli {
    /// Topic to explain.
    topic: Option<String>,

    /// Genre id, e.g. sci-fi or fairy-tale.
    #[arg(long, default_value = "sci-fi")]
    genre: String,

    /// Story length id: short, medium, long or full.
    #[arg(long, default_value = "medium")]
    length: String,

    /// Ask the model for a flow diagram and render it as SVG.
    #[arg(long)]
    diagram: bool,

    /// Ask for a practical-applications section.
    #[arg(long)]
    examples: bool,

    /// Directory to write story.txt, story.md and diagram.svg into.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long)]
    list_genres: bool,

    #[arg(long)]
    list_lengths: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.list_genres {
        for genre in catalog::GENRES {
            println!("{:<12} {}", genre.id, genre.label);
        }
        return Ok(());
    }
    if cli.list_lengths {
        for length in catalog::STORY_LENGTHS {
            println!("{:<8} {}", length.id, length.label);
        }
        return Ok(());
    }

    let topic = cli.topic.ok_or(CliError::MissingTopic)?;
    let genre = catalog::genre(&cli.genre).ok_or_else(|| CliError::UnknownGenre(cli.genre.clone()))?;
    let length = catalog::story_length(&cli.length).ok_or_else(|| CliError::UnknownLength(cli.length.clone()))?;

    let config = LlmConfig::from_env()?;
    let client = GeminiClient::from_config(config)?;
    info!(model = client.model(), "rasskaz: model ready");

    let request =
        StoryRequest { topic, genre, length, include_diagram: cli.diagram, include_examples: cli.examples };
    let response = story::generate(&client, &request).await?;

    println!("{}", export::markdown(&response));

    let svg = response.diagram.as_ref().and_then(|data| {
        let laid = diagram::layout(data);
        let rendered = diagram::render_svg(data, &laid);
        info!(
            nodes = data.nodes.len(),
            width = laid.width,
            height = laid.height,
            rendered = rendered.is_some(),
            "rasskaz: diagram"
        );
        rendered
    });

    if let Some(dir) = &cli.out {
        let written = export::write_outputs(dir, &response, svg.as_deref())
            .map_err(|source| CliError::Write { path: dir.clone(), source })?;
        for path in &written {
            eprintln!("wrote {}", path.display());
        }
    }

    Ok(())
}
