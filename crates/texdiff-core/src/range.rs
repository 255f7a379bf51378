//! Document body ranges.
//!
//! Diff hunks may touch the preamble or trailing material; those lines have
//! no rendered position worth querying. A [`DocumentRange`] holds the
//! 1-based source lines lying strictly between `\begin{document}` and
//! `\end{document}` so line ranges can be clipped before lookup.

use crate::raw::LineRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentRange {
    // first..=last body line, 1-based; None when the markers are missing
    // or enclose nothing
    body: Option<(usize, usize)>,
}

impl DocumentRange {
    /// Scan LaTeX source for the body markers (first occurrence of each).
    pub fn from_source(source: &str) -> Self {
        let mut begin = None;
        let mut end = None;
        for (i, line) in source.lines().enumerate() {
            if begin.is_none() && line.contains("\\begin{document}") {
                begin = Some(i + 1);
            }
            if end.is_none() && line.contains("\\end{document}") {
                end = Some(i + 1);
            }
        }
        match (begin, end) {
            (Some(b), Some(e)) if b + 1 < e => Self {
                body: Some((b + 1, e - 1)),
            },
            _ => Self { body: None },
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        matches!(self.body, Some((first, last)) if (first..=last).contains(&line))
    }

    /// Lines of `range` that fall inside the document body, in order.
    pub fn clip(&self, range: &LineRange) -> Vec<usize> {
        range.lines().filter(|line| self.contains(*line)).collect()
    }
}
