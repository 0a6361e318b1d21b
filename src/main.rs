use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use docrag_core::VectorIndex;
use docrag_openai::{ChatClient, EmbeddingClient};
use docrag_rag::{FlatL2Index, IndexStore, RagConfig, RagPipeline, Retriever};

mod ui;

#[derive(Parser)]
#[command(name = "docrag")]
#[command(about = "Ask questions about a single document", long_about = None)]
#[command(version)]
struct Cli {
    /// Source document to index on first run
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Directory holding the persisted index and chunk mapping
    #[arg(long)]
    index_dir: Option<PathBuf>,

    /// Number of chunks to retrieve per question
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Maximum words per chunk when building the index
    #[arg(long)]
    max_words: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question
    Ask {
        query: String,

        /// Print the retrieved context only, without generating an answer
        #[arg(long)]
        no_answer: bool,
    },
    /// Build the index, or load it if it already exists
    Index {
        /// Discard persisted artifacts and rebuild from the source document
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = apply_overrides(RagConfig::from_env()?, &cli);
    let embedder = Arc::new(EmbeddingClient::new(config.embedding.clone())?);
    let store = IndexStore::new(&config.index_dir, &config.data_file);

    if let Some(Commands::Index { force }) = cli.command {
        let (index, mapping) = if force {
            store
                .rebuild(embedder.as_ref(), config.dimension(), config.max_words)
                .await?
        } else {
            store
                .load_or_build(embedder.as_ref(), config.dimension(), config.max_words)
                .await?
        };
        ui::print_index_summary(&store, &index, mapping.len());
        return Ok(());
    }

    let (index, mapping) = store
        .load_or_build(embedder.as_ref(), config.dimension(), config.max_words)
        .await?;
    let retriever = Retriever::new(index, mapping, embedder)?;

    match cli.command {
        Some(Commands::Ask { query, no_answer: true }) => {
            let context = retriever.retrieve(&query, config.top_k).await?;
            ui::print_context(&context);
        }
        Some(Commands::Ask { query, no_answer: false }) => {
            let pipeline = build_pipeline(retriever, &config)?;
            let answer = pipeline.answer(&query).await?;
            ui::print_answer(&answer);
        }
        _ => {
            let pipeline = build_pipeline(retriever, &config)?;
            interactive(&pipeline).await?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn apply_overrides(mut config: RagConfig, cli: &Cli) -> RagConfig {
    if let Some(data_file) = &cli.data_file {
        config = config.with_data_file(data_file);
    }
    if let Some(index_dir) = &cli.index_dir {
        config = config.with_index_dir(index_dir);
    }
    if let Some(top_k) = cli.top_k {
        config = config.with_top_k(top_k);
    }
    if let Some(max_words) = cli.max_words {
        config = config.with_max_words(max_words);
    }
    config
}

fn build_pipeline(
    retriever: Retriever<FlatL2Index, EmbeddingClient>,
    config: &RagConfig,
) -> Result<RagPipeline<FlatL2Index, EmbeddingClient, ChatClient>> {
    let generator = ChatClient::new(config.chat.clone())?;
    Ok(RagPipeline::new(retriever, generator, config.top_k))
}

async fn interactive(pipeline: &RagPipeline<FlatL2Index, EmbeddingClient, ChatClient>) -> Result<()> {
    let retriever = pipeline.retriever();
    ui::display_banner(retriever.len(), retriever.index().dimension());

    loop {
        let Some(input) = ui::read_query()? else {
            break;
        };

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();
        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "Goodbye!".green());
            break;
        }

        match pipeline.answer(&input).await {
            Ok(answer) => ui::print_answer(&answer),
            Err(e) => println!("{} {}", "error:".red().bold(), e),
        }
    }

    Ok(())
}
