//! Pipeline – ties together markdown conversion, document styling, and the
//! PDF export chain into a single function call.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PressError;
use crate::export::{export_pdf, ExportOutcome, Toolchain};
use crate::export_config::ExportConfig;
use crate::{markdown, template};

/// Configuration for rendering one document.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Document title for the HTML `<title>` (default: input file stem).
    pub title: Option<String>,
    /// Also export a PDF after writing the HTML.
    pub pdf: bool,
    /// Explicit PDF output path (default: input path with a `.pdf`
    /// extension). Implies `pdf` when set.
    pub pdf_path: Option<PathBuf>,
    /// Converter chain used for PDF export.
    pub export: ExportConfig,
}

/// What `render_document` produced.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Path of the styled HTML document that was written.
    pub html_path: PathBuf,
    /// Export result, when a PDF was requested.
    pub export: Option<ExportOutcome>,
}

/// Full text-transform stage: markdown string → complete styled HTML page.
pub fn render_to_html(markdown_text: &str, title: &str) -> String {
    let fragment = markdown::to_html_fragment(markdown_text);
    let fragment = template::promote_ascii_art(&fragment);
    template::wrap_document(title, &fragment)
}

/// Render one markdown file to HTML (and optionally PDF) next to the input.
///
/// A missing input fails immediately with [`PressError::MissingInput`]; in
/// batch use the caller reports it and continues with the next file. The
/// export stage never fails the call — an exhausted converter chain comes
/// back as [`ExportOutcome::Manual`].
pub fn render_document(
    input: &Path,
    config: &RenderConfig,
    tools: &dyn Toolchain,
) -> Result<RenderedDocument, PressError> {
    if !input.exists() {
        return Err(PressError::MissingInput(input.to_path_buf()));
    }

    let markdown_text = fs::read_to_string(input).map_err(|e| PressError::Read {
        path: input.to_path_buf(),
        source: e,
    })?;

    let title = match &config.title {
        Some(t) => t.clone(),
        None => input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document")
            .to_string(),
    };

    let html = render_to_html(&markdown_text, &title);
    let html_path = input.with_extension("html");
    fs::write(&html_path, &html).map_err(|e| PressError::Write {
        path: html_path.clone(),
        source: e,
    })?;
    log::info!("wrote {}", html_path.display());

    let export = if config.pdf || config.pdf_path.is_some() {
        let pdf_path = config
            .pdf_path
            .clone()
            .unwrap_or_else(|| input.with_extension("pdf"));
        Some(export_pdf(&html_path, &pdf_path, &config.export, tools)?)
    } else {
        None
    };

    Ok(RenderedDocument { html_path, export })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_to_html_produces_full_document() {
        let doc = render_to_html("# Hello\n\nWorld.", "Hello");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<h1"));
        assert!(doc.contains("World."));
    }
}
