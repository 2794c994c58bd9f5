//! Search session state and navigation
//!
//! `SearchSession` is a plain value owned by the caller: the query, the
//! results of one full scan, and a cursor over the flat match list. The
//! rendering surface derives everything it shows from it, so the state
//! carries no widget handles.

use anyhow::Result;

use crate::document::Document;
use crate::search::context::{Excerpt, sentence_context};
use crate::search::engine::{self, Match, SearchResults};
use crate::search::outline::OutlineIndex;

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    case_sensitive: bool,
    results: SearchResults,
    /// Index of the displayed match in the flat list; `None` until a match
    /// exists.
    cursor: Option<usize>,
}

impl SearchSession {
    /// Run a full scan and land on the first match, if any.
    pub fn search(
        document: &Document,
        outline: &OutlineIndex,
        query: &str,
        case_sensitive: bool,
    ) -> Result<Self> {
        let results = engine::search(&document.pages, outline, query, case_sensitive)?;
        let cursor = if results.matches.is_empty() {
            None
        } else {
            Some(0)
        };

        Ok(Self {
            query: query.to_string(),
            case_sensitive,
            results,
            cursor,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn match_count(&self) -> usize {
        self.results.matches.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Match> {
        self.cursor.and_then(|c| self.results.matches.get(c))
    }

    /// Advance to the next match, wrapping past the end. No-op when the
    /// match list is empty.
    pub fn next(&mut self) {
        let n = self.match_count();
        if n == 0 {
            return;
        }
        self.cursor = Some(self.cursor.map_or(0, |c| (c + 1) % n));
    }

    /// Step back to the previous match, wrapping past the start.
    pub fn previous(&mut self) {
        let n = self.match_count();
        if n == 0 {
            return;
        }
        self.cursor = Some(self.cursor.map_or(n - 1, |c| (c + n - 1) % n));
    }

    /// Jump to the first match of a location from the results list.
    pub fn select_location(&mut self, location_index: usize) {
        if let Some(location) = self.results.locations.get(location_index) {
            self.cursor = Some(location.first_match);
        }
    }

    /// The location containing the current match, for list highlighting.
    pub fn location_of_cursor(&self) -> Option<usize> {
        let current = self.current()?;
        self.results
            .locations
            .iter()
            .position(|location| location.page == current.page)
    }

    pub fn status(&self) -> String {
        match self.cursor {
            Some(c) => format!("Match {} of {}", c + 1, self.match_count()),
            None => "No matches found".to_string(),
        }
    }
}

/// Everything the context pane needs to render the current match.
#[derive(Debug, Clone)]
pub struct MatchView {
    pub page: usize,
    pub headings: Vec<String>,
    pub excerpt: Excerpt,
}

impl MatchView {
    pub fn build(document: &Document, outline: &OutlineIndex, m: &Match) -> Option<Self> {
        let text = document.page_text(m.page)?;
        Some(Self {
            page: m.page,
            headings: outline.headings_for_page(m.page),
            excerpt: sentence_context(text, m.start, m.end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentMetadata, Page};

    fn document(pages: &[&str]) -> Document {
        Document {
            title: "test".to_string(),
            metadata: DocumentMetadata {
                file_path: "test.docx".to_string(),
                file_size: 0,
                word_count: 0,
                page_count: pages.len(),
            },
            pages: pages
                .iter()
                .map(|t| Page {
                    text: t.to_string(),
                })
                .collect(),
            outline: Vec::new(),
        }
    }

    fn session(pages: &[&str], query: &str) -> SearchSession {
        let doc = document(pages);
        SearchSession::search(&doc, &OutlineIndex::default(), query, false).unwrap()
    }

    #[test]
    fn fresh_search_lands_on_first_match() {
        let s = session(&["cat here", "cat there"], "cat");
        assert_eq!(s.cursor(), Some(0));
        assert_eq!(s.status(), "Match 1 of 2");
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut s = session(&["cat cat", "cat"], "cat");
        assert_eq!(s.match_count(), 3);

        s.next();
        s.next();
        assert_eq!(s.cursor(), Some(2));
        s.next();
        assert_eq!(s.cursor(), Some(0), "next from the last match wraps to 0");

        s.previous();
        assert_eq!(s.cursor(), Some(2), "previous from 0 wraps to the end");
    }

    #[test]
    fn navigation_on_empty_results_is_a_no_op() {
        let mut s = session(&["nothing here"], "zebra");
        assert_eq!(s.cursor(), None);
        s.next();
        s.previous();
        assert_eq!(s.cursor(), None);
        assert!(s.current().is_none());
        assert_eq!(s.status(), "No matches found");
    }

    #[test]
    fn select_location_jumps_to_its_first_match() {
        let mut s = session(&["cat cat", "dog", "cat"], "cat");
        assert_eq!(s.results().locations.len(), 2);

        s.select_location(1);
        assert_eq!(s.cursor(), Some(2));
        assert_eq!(s.current().unwrap().page, 2);
        assert_eq!(s.location_of_cursor(), Some(1));

        // Out-of-range selection leaves the cursor alone
        s.select_location(9);
        assert_eq!(s.cursor(), Some(2));
    }

    #[test]
    fn match_view_carries_excerpt_and_headings() {
        let doc = document(&["Nothing. The cat sat here. More."]);
        let outline = OutlineIndex::new(vec![crate::document::OutlineEntry {
            level: 1,
            title: "Chapter".to_string(),
            target_page: 1,
        }]);
        let s = SearchSession::search(&doc, &outline, "cat", false).unwrap();
        let view = MatchView::build(&doc, &outline, s.current().unwrap()).unwrap();

        assert_eq!(view.page, 0);
        assert_eq!(view.headings, vec!["Chapter"]);
        assert_eq!(
            &view.excerpt.text[view.excerpt.highlight.clone()],
            "cat"
        );
    }
}
