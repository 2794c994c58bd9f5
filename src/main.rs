use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use docseek::search::OutlineIndex;
use docseek::{ExportFormat, SearchSession, document, export, ui};

#[derive(Parser)]
#[command(
    name = "docseek",
    version,
    about = "Search paginated .docx documents from the terminal"
)]
struct Cli {
    /// Document to open
    file: PathBuf,

    /// Run this search on startup
    #[arg(short, long)]
    query: Option<String>,

    /// Compare the query verbatim instead of case-insensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Print results instead of starting the UI (requires --query)
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Word budget per page used when paginating the document
    #[arg(long, default_value_t = document::DEFAULT_WORDS_PER_PAGE)]
    words_per_page: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let document = document::load_document(&cli.file, cli.words_per_page).await?;

    if let Some(format) = &cli.export {
        let Some(query) = &cli.query else {
            bail!("--export requires --query");
        };
        let outline = OutlineIndex::new(document.outline.clone());
        let session = SearchSession::search(&document, &outline, query, cli.case_sensitive)?;
        print!(
            "{}",
            export::export_results(&document, &outline, &session, format)?
        );
        return Ok(());
    }

    ui::run(document, cli.case_sensitive, cli.query)
}
