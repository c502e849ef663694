//! Paperqa Web - search preprints and ask questions about them.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use paperqa_arxiv::ArxivClient;
use paperqa_graph::Neo4jStore;
use paperqa_llm::{ClaudeGenerator, Generator, OllamaGenerator};
use std::sync::Arc;

mod routes;
mod state;

pub use state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GeneratorKind {
    /// Local Ollama model with schema-validated output.
    Ollama,
    /// Anthropic API, raw text with fixed confidence.
    Claude,
}

#[derive(Parser, Debug)]
#[command(name = "paperqa-web")]
#[command(about = "Paperqa Web - search preprints and ask questions about them")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Neo4j HTTP endpoint
    #[arg(long, default_value = "http://localhost:7474")]
    neo4j_uri: String,

    /// Neo4j user
    #[arg(long, default_value = "neo4j")]
    neo4j_user: String,

    /// Neo4j password (falls back to the NEO4J_PASSWORD environment variable)
    #[arg(long)]
    neo4j_password: Option<String>,

    /// Neo4j database name
    #[arg(long, default_value = "neo4j")]
    neo4j_database: String,

    /// Which generation backend to use
    #[arg(long, value_enum, default_value = "ollama")]
    generator: GeneratorKind,

    /// Model override for the chosen backend
    #[arg(long)]
    model: Option<String>,

    /// Ollama endpoint
    #[arg(long, default_value = "http://localhost:11434")]
    ollama_endpoint: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let addr = format!("{}:{}", cli.host, cli.port);

    let password = cli
        .neo4j_password
        .clone()
        .or_else(|| std::env::var("NEO4J_PASSWORD").ok())
        .unwrap_or_default();

    let store = Arc::new(
        Neo4jStore::new(&cli.neo4j_uri, &cli.neo4j_user, &password)
            .with_database(&cli.neo4j_database),
    );

    let generator: Arc<dyn Generator> = match cli.generator {
        GeneratorKind::Ollama => {
            let mut g = OllamaGenerator::new(&cli.ollama_endpoint);
            if let Some(model) = &cli.model {
                g = g.with_model(model);
            }
            Arc::new(g)
        }
        GeneratorKind::Claude => {
            let mut g = ClaudeGenerator::from_env()?;
            if let Some(model) = &cli.model {
                g = g.with_model(model);
            }
            Arc::new(g)
        }
    };

    println!("Starting Paperqa Web...");
    println!("Generator backend: {}", generator.name());
    println!("Open http://{} in your browser", addr);

    // Create app state
    let state = AppState::new(ArxivClient::new(), store, generator);

    // Build router
    let app = routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
