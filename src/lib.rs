//! docseek: Terminal search navigator for paginated documents
//!
//! This library finds every literal occurrence of a query in a document's
//! text layer, groups the hits by page and outline (table of contents)
//! position, and steps through them with sentence-bounded context.

pub mod document;
pub mod export;
pub mod search;
pub mod theme;
pub mod ui;
pub mod widgets;

/// Export format options for headless output
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum ExportFormat {
    Json,
    Text,
}

// Re-export commonly used types
pub use document::{Document, OutlineEntry, Page, load_document};
pub use search::{OutlineIndex, SearchResults, SearchSession};
