//! Document loading and pagination
//!
//! Walks the docx-rs document tree, flattens paragraphs and tables into
//! plain-text blocks, then packs the blocks into pages on a word budget.
//! Heading paragraphs (Word `Heading1`..`Heading9` styles) additionally
//! produce the flat outline, each entry targeting the page it lands on.

use anyhow::{Context, Result};
use std::path::Path;

use super::io::validate_docx_file;
use super::models::{Document, DocumentMetadata, OutlineEntry, Page};

/// Word budget per page, matching the usual 250 words/page print estimate.
pub const DEFAULT_WORDS_PER_PAGE: usize = 250;

/// A contiguous run of body text, before pagination. Headings carry their
/// outline level.
#[derive(Debug, Clone)]
struct Block {
    text: String,
    heading_level: Option<u8>,
}

/// Load a .docx file into the paginated document model.
pub async fn load_document(file_path: &Path, words_per_page: usize) -> Result<Document> {
    validate_docx_file(file_path)?;

    let file_size = std::fs::metadata(file_path)?.len();
    let file_data = tokio::fs::read(file_path).await?;
    let docx = docx_rs::read_docx(&file_data)
        .with_context(|| format!("failed to parse {}", file_path.display()))?;

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    let blocks = collect_blocks(&docx.document);
    let word_count = blocks
        .iter()
        .map(|b| b.text.split_whitespace().count())
        .sum();
    let (pages, outline) = paginate(blocks, words_per_page.max(1));

    let metadata = DocumentMetadata {
        file_path: file_path.to_string_lossy().to_string(),
        file_size,
        word_count,
        page_count: pages.len(),
    };

    Ok(Document {
        title,
        metadata,
        pages,
        outline,
    })
}

/// Flatten the document body into text blocks in document order.
fn collect_blocks(document: &docx_rs::Document) -> Vec<Block> {
    let mut blocks = Vec::new();

    for child in &document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                let text = paragraph_text(para);
                if text.is_empty() {
                    continue;
                }
                blocks.push(Block {
                    heading_level: heading_level_from_style(para),
                    text,
                });
            }
            docx_rs::DocumentChild::Table(table) => {
                let text = table_text(table);
                if !text.is_empty() {
                    blocks.push(Block {
                        text,
                        heading_level: None,
                    });
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Detect heading level from the Word paragraph style (Heading1, Heading2, ...).
fn heading_level_from_style(para: &docx_rs::Paragraph) -> Option<u8> {
    if let Some(style) = &para.property.style {
        if style.val.starts_with("Heading") || style.val.starts_with("heading") {
            if let Some(level_char) = style.val.chars().last() {
                if let Some(level) = level_char.to_digit(10) {
                    return Some(level.clamp(1, 9) as u8);
                }
            }
            // Unnumbered heading styles count as top level
            return Some(1);
        }
    }

    None
}

/// Extract plain text from a paragraph, handling runs and tracked insertions.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&run_text(run));
                    }
                }
            }
            _ => {}
        }
    }

    text.trim().to_string()
}

fn run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                // Break types are private, so every break becomes a line break
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

/// Flatten a table into one line per row, cells separated by two spaces.
fn table_text(table: &docx_rs::Table) -> String {
    let mut lines = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            let mut cell_text = String::new();

            for content in &cell.children {
                if let docx_rs::TableCellContent::Paragraph(para) = content {
                    let para_text = paragraph_text(para);
                    if !para_text.is_empty() {
                        if !cell_text.is_empty() {
                            cell_text.push(' ');
                        }
                        cell_text.push_str(&para_text);
                    }
                }
            }

            if !cell_text.is_empty() {
                cells.push(cell_text);
            }
        }

        if !cells.is_empty() {
            lines.push(cells.join("  "));
        }
    }

    lines.join("\n")
}

/// Pack blocks into pages: a page closes once it holds at least
/// `words_per_page` words, so the next block (heading or body) starts the
/// following page. Headings emit outline entries targeting their page,
/// 1-based, which keeps the outline sorted by target page.
fn paginate(blocks: Vec<Block>, words_per_page: usize) -> (Vec<Page>, Vec<OutlineEntry>) {
    let mut pages = Vec::new();
    let mut outline = Vec::new();
    let mut current = String::new();
    let mut words_on_page = 0usize;

    for block in blocks {
        if words_on_page >= words_per_page && !current.is_empty() {
            pages.push(Page {
                text: std::mem::take(&mut current),
            });
            words_on_page = 0;
        }

        if let Some(level) = block.heading_level {
            outline.push(OutlineEntry {
                level,
                title: block.text.clone(),
                target_page: pages.len() + 1,
            });
        }

        if !current.is_empty() {
            current.push('\n');
        }
        words_on_page += block.text.split_whitespace().count();
        current.push_str(&block.text);
    }

    if !current.is_empty() {
        pages.push(Page { text: current });
    }

    (pages, outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn heading(style: &str, text: &str) -> Paragraph {
        Paragraph::new()
            .style(style)
            .add_run(Run::new().add_text(text))
    }

    fn para(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    fn block(text: &str, heading_level: Option<u8>) -> Block {
        Block {
            text: text.to_string(),
            heading_level,
        }
    }

    #[test]
    fn blocks_carry_heading_levels() {
        let docx = Docx::new()
            .add_paragraph(heading("Heading1", "Intro"))
            .add_paragraph(para("Body text."))
            .add_paragraph(heading("Heading2", "Background"));

        let blocks = collect_blocks(&docx.document);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].text, "Intro");
        assert_eq!(blocks[0].heading_level, Some(1));
        assert_eq!(blocks[1].heading_level, None);
        assert_eq!(blocks[2].heading_level, Some(2));
    }

    #[test]
    fn empty_paragraphs_are_skipped() {
        let docx = Docx::new()
            .add_paragraph(para(""))
            .add_paragraph(para("Only real content."));

        let blocks = collect_blocks(&docx.document);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "Only real content.");
    }

    #[test]
    fn pagination_splits_on_word_budget() {
        let blocks = vec![
            block("one two three", None),
            block("four five six", None),
            block("seven eight", None),
        ];

        let (pages, outline) = paginate(blocks, 4);
        assert!(outline.is_empty());
        // First page closes after crossing the budget, second holds the rest
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].text, "one two three\nfour five six");
        assert_eq!(pages[1].text, "seven eight");
    }

    #[test]
    fn headings_target_the_page_they_land_on() {
        let blocks = vec![
            block("Intro", Some(1)),
            block("one two three four five", None),
            block("Methods", Some(1)),
            block("more body text here", None),
        ];

        let (pages, outline) = paginate(blocks, 5);
        assert_eq!(pages.len(), 2);
        assert_eq!(outline.len(), 2);
        assert_eq!(outline[0].target_page, 1);
        assert_eq!(outline[1].target_page, 2);
        assert!(pages[1].text.starts_with("Methods"));
    }

    #[test]
    fn empty_document_has_no_pages() {
        let (pages, outline) = paginate(Vec::new(), 250);
        assert!(pages.is_empty());
        assert!(outline.is_empty());
    }
}
