//! Diff composition
//!
//! The pipeline between the raw line diff and the rendered overlay PDF:
//! - [`translate`]: turn raw diff hunks into page-rectangle hunk pairs by
//!   querying the page locator, in parallel at hunk granularity.
//! - [`compose`]: aggregate hunk pairs into per-page overlays and emit the
//!   combined diff document (and the two-up merge document).
//! - [`build`]: write the documents and drive the renderer.

pub mod build;
pub mod compose;
pub mod translate;

pub use build::{render_documents, write_documents, DIFF_PDF, DIFF_TEX, MERGE_TEX};
pub use compose::{diff_document, merge_document, ComposeOptions};
pub use translate::{translate_all, TranslateError};
