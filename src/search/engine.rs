//! Literal substring search across the page sequence
//!
//! Produces the flat ordered match list and its grouping into navigable
//! locations, one per distinct (page, heading path). Matching runs on the
//! original page text with an escaped-literal regex so offsets never need
//! re-mapping, even under Unicode case-insensitive comparison.

use anyhow::{Context, Result};
use regex::RegexBuilder;
use serde::Serialize;

use crate::document::Page;
use crate::search::outline::OutlineIndex;

/// One literal occurrence of the query. `start..end` are byte offsets into
/// the page's text; `end` is stored rather than assumed from the query
/// length because case-insensitive matching can cover a different span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub page: usize,
    pub start: usize,
    pub end: usize,
}

/// One navigable entry in the results list: a page together with the
/// heading path active there, anchored at its first match in the flat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub page: usize,
    pub headings: Vec<String>,
    /// Index into `SearchResults::matches` of this location's first match.
    pub first_match: usize,
    /// Raw matches sharing this location.
    pub match_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub matches: Vec<Match>,
    pub locations: Vec<Location>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Scan every page left to right for non-overlapping occurrences of the
/// literal query. An empty query is a no-op, not an error.
pub fn search(
    pages: &[Page],
    outline: &OutlineIndex,
    query: &str,
    case_sensitive: bool,
) -> Result<SearchResults> {
    let mut results = SearchResults::default();
    if query.is_empty() {
        return Ok(results);
    }

    let finder = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!case_sensitive)
        .build()
        .with_context(|| format!("failed to compile search pattern for {query:?}"))?;

    for (page_index, page) in pages.iter().enumerate() {
        let first_match = results.matches.len();

        for m in finder.find_iter(&page.text) {
            results.matches.push(Match {
                page: page_index,
                start: m.start(),
                end: m.end(),
            });
        }

        let match_count = results.matches.len() - first_match;
        if match_count > 0 {
            // The heading path is computed once per page; within one search a
            // page has exactly one path, so each matching page contributes one
            // location, keeping the (page, path) grouping in first-seen order.
            results.locations.push(Location {
                page: page_index,
                headings: outline.headings_for_page(page_index),
                first_match,
                match_count,
            });
        }
    }

    Ok(results)
}
