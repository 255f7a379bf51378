//! Core data model for visual PDF diffs of LaTeX documents
//!
//! This crate provides:
//! - Page rectangles with normalized coordinates and merge arithmetic
//! - Diff hunks as collections of highlight rectangles per revision
//! - Raw line-diff hunk parsing (classic `diff` hunk headers)
//! - Document body ranges (lines between `\begin{document}` and `\end{document}`)
//! - Collaborator traits for the external tools (diff, SyncTeX, renderer)

pub mod error;
pub mod hunk;
pub mod range;
pub mod raw;
pub mod rect;
pub mod revision;
pub mod traits;

pub use error::{DiffError, LocatorError, PageCountError, PageMismatch, RenderError};
pub use hunk::{ChangeKind, Hunk, HunkPair};
pub use range::DocumentRange;
pub use raw::{parse_hunk_headers, DiffMode, LineRange, RawHunk};
pub use rect::Rect;
pub use revision::{Revision, Sides};
pub use traits::{DiffSource, DocumentRenderer, PageCounter, PageLocator};
