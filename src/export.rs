//! Headless result output
//!
//! Backs the `--query ... --export ...` CLI path: the same search core, but
//! the results printed once instead of navigated interactively.

use anyhow::Result;
use serde::Serialize;

use crate::ExportFormat;
use crate::document::Document;
use crate::search::{LineMap, MatchView, OutlineIndex, SearchSession};

#[derive(Serialize)]
struct Report<'a> {
    file: &'a str,
    query: &'a str,
    case_sensitive: bool,
    total_matches: usize,
    locations: Vec<ReportLocation<'a>>,
}

#[derive(Serialize)]
struct ReportLocation<'a> {
    /// 1-based printed page number
    page: usize,
    headings: &'a [String],
    match_count: usize,
    excerpts: Vec<String>,
}

pub fn export_results(
    document: &Document,
    outline: &OutlineIndex,
    session: &SearchSession,
    format: &ExportFormat,
) -> Result<String> {
    match format {
        ExportFormat::Json => export_json(document, outline, session),
        ExportFormat::Text => Ok(export_text(session)),
    }
}

fn export_json(
    document: &Document,
    outline: &OutlineIndex,
    session: &SearchSession,
) -> Result<String> {
    let results = session.results();
    let locations = results
        .locations
        .iter()
        .map(|location| {
            let excerpts = results.matches
                [location.first_match..location.first_match + location.match_count]
                .iter()
                .filter_map(|m| MatchView::build(document, outline, m))
                .map(|view| view.excerpt.text)
                .collect();

            ReportLocation {
                page: location.page + 1,
                headings: &location.headings,
                match_count: location.match_count,
                excerpts,
            }
        })
        .collect();

    let report = Report {
        file: &document.metadata.file_path,
        query: session.query(),
        case_sensitive: session.case_sensitive(),
        total_matches: session.match_count(),
        locations,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// The results-list lines exactly as the TUI shows them, plus a summary.
fn export_text(session: &SearchSession) -> String {
    let map = LineMap::build(&session.results().locations);
    let mut out = map.lines().join("\n");

    if !out.is_empty() {
        out.push('\n');
    }
    let total = session.match_count();
    if total > 0 {
        out.push_str(&format!("Found {total} matches\n"));
    } else {
        out.push_str("No matches found\n");
    }
    out
}
