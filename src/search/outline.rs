//! Page-to-heading-path resolution
//!
//! Answers "which outline headings are active at page P?" by replaying the
//! flat outline up to that page. A heading at level L supersedes any deeper
//! headings recorded so far, since those belonged to a now-closed parent.

use crate::document::OutlineEntry;

/// Precomputed view over the flat outline. Entries must be in document
/// order, sorted by target page (non-decreasing) — the loader guarantees
/// this.
#[derive(Debug, Clone, Default)]
pub struct OutlineIndex {
    entries: Vec<OutlineEntry>,
}

impl OutlineIndex {
    pub fn new(entries: Vec<OutlineEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The chain of heading titles active at a page (zero-based index),
    /// outermost first. Unset intermediate levels are omitted, so a jump
    /// from level 1 straight to level 3 yields a two-element path.
    ///
    /// Pure function of the outline and the page index; O(outline) per call.
    pub fn headings_for_page(&self, page_index: usize) -> Vec<String> {
        // Slot L-1 holds the active title at level L, or None when unset.
        let mut active: Vec<Option<&str>> = Vec::new();

        for entry in &self.entries {
            if entry.target_page.saturating_sub(1) > page_index {
                break;
            }

            let slot = (entry.level as usize).saturating_sub(1);
            if active.len() <= slot {
                active.resize(slot + 1, None);
            }
            active[slot] = Some(entry.title.as_str());
            // A new heading at this level closes everything nested below it
            active.truncate(slot + 1);
        }

        active.into_iter().flatten().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: u8, title: &str, target_page: usize) -> OutlineEntry {
        OutlineEntry {
            level,
            title: title.to_string(),
            target_page,
        }
    }

    fn sample_index() -> OutlineIndex {
        OutlineIndex::new(vec![
            entry(1, "Intro", 1),
            entry(2, "Background", 2),
            entry(1, "Methods", 5),
        ])
    }

    #[test]
    fn nested_path_accumulates() {
        let index = sample_index();
        // 0-based page 3 (printed page 4) is still inside Intro > Background
        assert_eq!(index.headings_for_page(3), vec!["Intro", "Background"]);
    }

    #[test]
    fn new_top_level_heading_clears_deeper_levels() {
        let index = sample_index();
        // Printed page 6: Methods at level 1 supersedes Background
        assert_eq!(index.headings_for_page(5), vec!["Methods"]);
    }

    #[test]
    fn page_before_any_heading_has_empty_path() {
        let index = OutlineIndex::new(vec![entry(1, "Late Chapter", 10)]);
        assert!(index.headings_for_page(0).is_empty());
    }

    #[test]
    fn no_outline_means_empty_paths_everywhere() {
        let index = OutlineIndex::default();
        assert!(index.is_empty());
        assert!(index.headings_for_page(0).is_empty());
        assert!(index.headings_for_page(42).is_empty());
    }

    #[test]
    fn skipped_levels_are_omitted_not_synthesized() {
        let index = OutlineIndex::new(vec![
            entry(1, "Part One", 1),
            entry(3, "Deep Detail", 2),
        ]);
        assert_eq!(
            index.headings_for_page(2),
            vec!["Part One", "Deep Detail"]
        );
    }

    #[test]
    fn deep_nesting_has_no_level_ceiling() {
        let entries: Vec<OutlineEntry> = (1..=14)
            .map(|level| entry(level as u8, &format!("L{level}"), 1))
            .collect();
        let index = OutlineIndex::new(entries);
        assert_eq!(index.headings_for_page(0).len(), 14);
    }

    #[test]
    fn same_page_queries_are_stable() {
        let index = sample_index();
        let first = index.headings_for_page(4);
        let second = index.headings_for_page(4);
        assert_eq!(first, second);
        // Path only changes at pages where some heading begins
        assert_eq!(index.headings_for_page(2), index.headings_for_page(3));
    }
}
