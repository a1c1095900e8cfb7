//! Tag extractor: tokenize a document, drop stop words, count frequencies.

mod error;
mod report;
mod server;
mod session;
mod stopwords;
mod tags;
mod tokenize;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::session::Session;

#[derive(Parser)]
#[command(name = "tag-extractor")]
#[command(about = "Extract tag frequencies from a text document")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract tags from a document and print the frequency table.
    Extract {
        /// Document to tokenize.
        #[arg(long, short)]
        document: PathBuf,

        /// Stop-word list, one word per line.
        #[arg(long, short)]
        stop_words: Option<PathBuf>,

        /// Also save the tags as CSV to this path.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Start the web front-end.
    Serve {
        /// Port to listen on.
        #[arg(long, short, default_value_t = 3000)]
        port: u16,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract { document, stop_words, output } => {
            run_extract(&document, stop_words.as_deref(), output.as_deref())?;
        }
        Command::Serve { port } => {
            run_serve(port)?;
        }
    }
    Ok(())
}

fn run_extract(
    document: &Path,
    stop_words: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut session = Session::new();
    if let Some(path) = stop_words {
        session.load_stop_words(path)?;
    }
    session.load_document(document);
    session.extract()?;
    print!("{}", session.format_tags());
    if let Some(path) = output {
        session.save(path)?;
        println!("Tags saved to {:?}", path);
    }
    Ok(())
}

fn run_serve(port: u16) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state: server::AppState = Arc::new(tokio::sync::Mutex::new(Session::new()));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let app = axum::Router::new()
            .route("/", axum::routing::get(server::index_page))
            .route("/status", axum::routing::get(server::status_handler))
            .route("/document", axum::routing::post(server::document_handler))
            .route("/stopwords", axum::routing::post(server::stopwords_handler))
            .route("/extract", axum::routing::post(server::extract_handler))
            .route("/save", axum::routing::post(server::save_handler))
            .with_state(state);

        let addr = format!("127.0.0.1:{}", port);
        println!("Listening on http://{}", addr);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })?;
    Ok(())
}
