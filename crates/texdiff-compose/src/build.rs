//! Write the output documents and drive the renderer.

use std::fs;
use std::io;
use std::path::Path;
use texdiff_core::{DocumentRenderer, RenderError};

pub const DIFF_TEX: &str = "diff.tex";
pub const MERGE_TEX: &str = "merge.tex";
pub const DIFF_PDF: &str = "diff.pdf";

/// Write `diff.tex` and `merge.tex` into `output_dir`, creating it first.
pub fn write_documents(output_dir: &Path, diff_doc: &str, merge_doc: &str) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join(DIFF_TEX), diff_doc)?;
    fs::write(output_dir.join(MERGE_TEX), merge_doc)?;
    Ok(())
}

/// Render the diff document, then the two-up merge document.
///
/// The diff document is rendered twice: pdfpages-style engines need a
/// second pass before cross references (and therefore page placement)
/// converge.
pub fn render_documents(renderer: &dyn DocumentRenderer, output_dir: &Path) -> Result<(), RenderError> {
    renderer.render(output_dir, DIFF_TEX)?;
    renderer.render(output_dir, DIFF_TEX)?;
    renderer.render(output_dir, MERGE_TEX)?;
    Ok(())
}
