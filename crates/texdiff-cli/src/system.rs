//! System-tool collaborators: `diff` and `pdflatex`.

use std::path::Path;
use std::process::{Command, Stdio};
use texdiff_core::{parse_hunk_headers, DiffError, DiffSource, DocumentRenderer, RawHunk, RenderError};

/// Line diffs via the system `diff` tool.
///
/// `diff` exits 0 for identical files and 1 when differences were found;
/// anything else (missing file, bad invocation) is a failure.
pub struct SystemDiff;

impl DiffSource for SystemDiff {
    fn hunks(&self, old: &Path, new: &Path) -> Result<Vec<RawHunk>, DiffError> {
        let output = Command::new("diff").arg(old).arg(new).output()?;

        match output.status.code() {
            Some(0) => Ok(Vec::new()),
            Some(1) => Ok(parse_hunk_headers(&String::from_utf8_lossy(&output.stdout))),
            _ => Err(DiffError::Failed(output.status)),
        }
    }
}

/// Document rendering via `pdflatex`, run inside the output directory with
/// its chatter discarded.
pub struct Pdflatex;

impl DocumentRenderer for Pdflatex {
    fn render(&self, dir: &Path, tex_file: &str) -> Result<(), RenderError> {
        let status = Command::new("pdflatex")
            .arg("-interaction=nonstopmode")
            .arg(tex_file)
            .current_dir(dir)
            .stdout(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(RenderError::Failed(status));
        }
        Ok(())
    }
}
