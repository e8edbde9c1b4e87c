//! PDF text extraction.

use anyhow::Context;

/// Extract the text layer of the downloaded calendar PDF.
pub fn extract_text(bytes: &[u8]) -> anyhow::Result<String> {
    pdf_extract::extract_text_from_mem(bytes).context("extracting text from calendar PDF")
}
