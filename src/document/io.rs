//! File validation
//!
//! Cheap structural checks that run before the full docx-rs parse so that
//! obviously wrong inputs fail with a useful message.

use anyhow::{Result, bail};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "docx" {
        bail!(
            "Invalid file format. Expected .docx file, got .{}\n\
            Note: docseek only searches Word .docx files (not .doc, .xlsx, .zip, etc.)",
            extension
        );
    }

    // A .docx is a ZIP containing word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        if archive.by_name("xl/workbook.xml").is_ok() {
            bail!(
                "This appears to be an Excel file (.xlsx).\n\
                docseek only searches Word documents (.docx)."
            );
        }

        bail!(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
        );
    }

    Ok(())
}
