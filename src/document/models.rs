//! Core data structures for the paginated document model
//!
//! A loaded document is a flat sequence of pages, each owning its full
//! plain text, plus the flat outline (table of contents) in document order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub pages: Vec<Page>,
    pub outline: Vec<OutlineEntry>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Full text of a page by zero-based index.
    pub fn page_text(&self, page_index: usize) -> Option<&str> {
        self.pages.get(page_index).map(|p| p.text.as_str())
    }
}

/// One page of extracted text. Pages are identified by their position in
/// `Document::pages` and are immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub text: String,
}

/// One flat outline entry. Entries appear in document (depth-first) order,
/// so `target_page` values are non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Nesting level, 1-based (level 1 is outermost).
    pub level: u8,
    pub title: String,
    /// 1-based page number where this heading becomes active; subtract one
    /// to get the page index.
    pub target_page: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub word_count: usize,
    pub page_count: usize,
}
