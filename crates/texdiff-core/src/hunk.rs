//! Diff hunks as accumulated highlight rectangles.

use crate::error::PageMismatch;
use crate::rect::Rect;
use crate::revision::Revision;
use std::collections::BTreeSet;

/// What a hunk did to the source, and therefore its highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Changed,
}

impl ChangeKind {
    /// TikZ fill color for the translucent highlight.
    pub fn fill_color(self) -> &'static str {
        match self {
            ChangeKind::Added => "green",
            ChangeKind::Deleted => "red",
            ChangeKind::Changed => "yellow",
        }
    }
}

/// One contiguous diff change translated into page rectangles for one
/// revision. Rectangles may span multiple pages (wrapped lines, page
/// breaks); accumulation optionally folds overlapping same-page
/// rectangles together.
#[derive(Debug, Clone, PartialEq)]
pub struct Hunk {
    rects: Vec<Rect>,
    pub revision: Revision,
    pub kind: ChangeKind,
}

impl Hunk {
    pub fn new(revision: Revision, kind: ChangeKind) -> Self {
        Self {
            rects: Vec::new(),
            revision,
            kind,
        }
    }

    /// Append a rectangle, folding it into overlapping existing ones.
    ///
    /// With `combine > 0`, every existing same-page rectangle whose area
    /// plus the incoming rectangle's area exceeds their bounding-box area
    /// (they overlap more than merging wastes) is removed and merged into
    /// the incoming rectangle. Matches are processed in reverse discovered
    /// order so removal keeps earlier indices valid; this also fixes the
    /// tie-break when several rectangles match at once. Greedy and
    /// single-pass, not an optimal packing.
    ///
    /// With `combine == 0` the rectangle is appended unconditionally.
    pub fn push_rect(&mut self, rect: Rect, combine: f64) -> Result<(), PageMismatch> {
        let mut rect = rect;
        if combine > 0.0 {
            let mut matching = Vec::new();
            for (i, r) in self.rects.iter().enumerate() {
                if r.page == rect.page && r.area() + rect.area() > r.merge(&rect)?.area() {
                    matching.push(i);
                }
            }
            for &i in matching.iter().rev() {
                rect = rect.merge(&self.rects[i])?;
                self.rects.remove(i);
            }
        }
        self.rects.push(rect);
        Ok(())
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Distinct page indices this hunk touches.
    pub fn affected_pages(&self) -> BTreeSet<usize> {
        self.rects.iter().map(|r| r.page).collect()
    }

    /// TikZ fill paths for this hunk's rectangles on `page`.
    pub fn overlay_tex(&self, page: usize) -> String {
        self.rects
            .iter()
            .filter(|r| r.page == page)
            .map(|r| {
                format!(
                    "\\path [fill={}, fill opacity=0.2] {}; % \n",
                    self.kind.fill_color(),
                    r.tex()
                )
            })
            .collect()
    }
}

/// The old and new hunks translated from one raw diff hunk.
///
/// For additions the old side is empty; for deletions the new side is
/// empty; for changes both are populated.
#[derive(Debug, Clone, PartialEq)]
pub struct HunkPair {
    pub old: Hunk,
    pub new: Hunk,
}

impl HunkPair {
    pub fn new(kind: ChangeKind) -> Self {
        Self {
            old: Hunk::new(Revision::Old, kind),
            new: Hunk::new(Revision::New, kind),
        }
    }

    pub fn side(&self, revision: Revision) -> &Hunk {
        match revision {
            Revision::Old => &self.old,
            Revision::New => &self.new,
        }
    }
}
