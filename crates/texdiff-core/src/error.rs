//! Error types shared across the workspace.
//!
//! Library crates return these typed errors; the binary wraps them in
//! `anyhow` at the top level. All external-process failures are fatal by
//! design: a silently partial diff would be worse than a hard stop.

use crate::revision::Revision;
use std::process::ExitStatus;
use thiserror::Error;

/// Attempted to merge rectangles lying on different pages.
///
/// Hunk construction only ever merges same-page rectangles, so this is a
/// logic error, but it is checked rather than assumed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot merge rectangles on different pages ({left} vs {right})")]
pub struct PageMismatch {
    pub left: usize,
    pub right: usize,
}

/// Errors from the external position-lookup collaborator.
#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("failed to invoke the page locator: {0}")]
    Io(#[from] std::io::Error),

    #[error("page lookup for {revision} line {line} failed with {status}")]
    Query {
        revision: Revision,
        line: usize,
        status: ExitStatus,
    },

    #[error("unparseable page lookup output: {0}")]
    Malformed(String),
}

/// Errors from the line-diff collaborator.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("failed to invoke diff: {0}")]
    Io(#[from] std::io::Error),

    #[error("diff exited with unexpected status {0}")]
    Failed(ExitStatus),
}

/// Errors from the document-rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to invoke the document renderer: {0}")]
    Io(#[from] std::io::Error),

    #[error("document build failed with {0}")]
    Failed(ExitStatus),
}

/// Errors while recovering a revision's total page count.
#[derive(Debug, Error)]
pub enum PageCountError {
    #[error("failed to read the page mapping archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("page mapping footer malformed: {0}")]
    Malformed(String),
}
