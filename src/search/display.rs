//! Results-list display contract
//!
//! Each location renders as a page header line, one indented line per
//! heading, and a blank separator. `LineMap` materializes the line →
//! location table once per search so selection handling is a plain lookup.

use crate::search::engine::Location;

/// Display lines for one location.
pub fn location_lines(location: &Location) -> Vec<String> {
    let count_suffix = if location.match_count > 1 {
        format!(" ({} matches)", location.match_count)
    } else {
        String::new()
    };

    let mut lines = vec![format!("Page {}{}", location.page + 1, count_suffix)];
    for (depth, title) in location.headings.iter().enumerate() {
        lines.push(format!("{}▶ {}", "    ".repeat(depth), title));
    }
    lines.push(String::new());
    lines
}

/// Flattened line view of the whole results list.
#[derive(Debug, Clone, Default)]
pub struct LineMap {
    lines: Vec<String>,
    line_to_location: Vec<usize>,
    first_line: Vec<usize>,
}

impl LineMap {
    pub fn build(locations: &[Location]) -> Self {
        let mut map = Self::default();

        for (location_index, location) in locations.iter().enumerate() {
            map.first_line.push(map.lines.len());
            for line in location_lines(location) {
                map.line_to_location.push(location_index);
                map.lines.push(line);
            }
        }

        map
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The location a display line belongs to (separator lines included).
    pub fn location_at(&self, line_index: usize) -> Option<usize> {
        self.line_to_location.get(line_index).copied()
    }

    /// First display line of a location, for scrolling the selection into view.
    pub fn first_line_of(&self, location_index: usize) -> Option<usize> {
        self.first_line.get(location_index).copied()
    }
}
