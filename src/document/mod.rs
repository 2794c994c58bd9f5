//! Document loading and data structures
//!
//! Converts a .docx file into the paginated plain-text model the search
//! core operates on: pages of extracted text plus a flat outline.

pub(crate) mod io;
pub mod loader;
pub mod models;

pub use loader::{DEFAULT_WORDS_PER_PAGE, load_document};
pub use models::*;
