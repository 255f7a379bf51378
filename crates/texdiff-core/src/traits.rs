//! Collaborator traits for the external tools.
//!
//! Everything that spawns a process sits behind one of these traits so the
//! geometric core can be exercised with deterministic stubs in tests.

use crate::error::{DiffError, LocatorError, PageCountError, RenderError};
use crate::raw::RawHunk;
use crate::rect::Rect;
use crate::revision::Revision;
use std::path::Path;

/// Produces line-diff hunks between two text files.
pub trait DiffSource {
    fn hunks(&self, old: &Path, new: &Path) -> Result<Vec<RawHunk>, DiffError>;
}

/// Maps a (line, column) source position to the page rectangles that
/// position renders to. A single line may yield several rectangles
/// (wrapped lines, page breaks) or none at all.
pub trait PageLocator: Send + Sync {
    fn locate(
        &self,
        revision: Revision,
        line: usize,
        column: usize,
    ) -> Result<Vec<Rect>, LocatorError>;
}

/// Recovers a revision's total rendered page count.
pub trait PageCounter {
    fn page_count(&self, revision: Revision) -> Result<usize, PageCountError>;
}

/// Renders a markup document inside `dir` to PDF.
pub trait DocumentRenderer {
    fn render(&self, dir: &Path, tex_file: &str) -> Result<(), RenderError>;
}
