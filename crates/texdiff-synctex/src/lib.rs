//! SyncTeX adapters
//!
//! Implements the position-lookup and page-count collaborators on top of
//! the SyncTeX toolchain:
//! - [`SynctexView`] shells out to `synctex view` per changed source line
//!   and parses the returned geometry into page rectangles.
//! - [`SynctexPages`] reads a revision's total page count straight from
//!   the `.synctex.gz` summary footer.

pub mod locator;
pub mod pages;

pub use locator::SynctexView;
pub use pages::SynctexPages;
