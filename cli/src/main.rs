use anyhow::Result;
use clap::{Parser, Subcommand};
use engine::log_duration::LogDuration;
use engine::{paginate, remove_duplicates, DocId, DocumentStatus};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tfidf")]
#[command(about = "Query an in-memory TF-IDF index built from JSON/JSONL documents", long_about = None)]
struct Cli {
    /// Input path (file or directory)
    #[arg(long)]
    input: PathBuf,
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top documents for a query
    Search {
        #[arg(long)]
        query: String,
        /// Only documents with this status (active, irrelevant, banned, removed)
        #[arg(long, default_value = "active")]
        status: DocumentStatus,
        #[arg(long, default_value_t = 5)]
        page_size: usize,
    },
    /// Show which query words a document matches
    Match {
        #[arg(long)]
        query: String,
        #[arg(long)]
        id: DocId,
    },
    /// Remove documents whose word sets repeat a lower id
    Dedup,
    /// Print the term frequencies of a document
    Frequencies {
        #[arg(long)]
        id: DocId,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    let mut engine = {
        let _timer = LogDuration::new("load");
        cli::load_engine(&args.input, &args.stop_words)?
    };

    match args.command {
        Commands::Search { query, status, page_size } => {
            let _timer = LogDuration::new(format!("search {query:?}"));
            let results = engine.find_top_documents_by_status(&query, status)?;
            for page in paginate(&results, page_size) {
                for doc in page {
                    println!("{doc}");
                }
                println!("--- page break ---");
            }
        }
        Commands::Match { query, id } => {
            let (words, status) = engine.match_document(&query, id)?;
            println!("{{ document_id = {id}, status = {status}, words = {} }}", words.join(" "));
        }
        Commands::Dedup => {
            let _timer = LogDuration::new("dedup");
            for id in remove_duplicates(&mut engine) {
                println!("Found duplicate document id {id}");
            }
            println!("{} documents remain", engine.document_count());
        }
        Commands::Frequencies { id } => {
            for (term, freq) in engine.word_frequencies(id) {
                println!("{term}\t{freq:.6}");
            }
        }
    }
    Ok(())
}
