//! Translate raw diff hunks into page-rectangle hunk pairs.

use std::sync::Arc;
use texdiff_core::{
    ChangeKind, DiffMode, DocumentRange, Hunk, HunkPair, LineRange, LocatorError, PageLocator,
    PageMismatch, RawHunk, Sides,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error(transparent)]
    PageMismatch(#[from] PageMismatch),

    #[error("hunk translation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Translate one raw hunk into its old/new hunk pair.
///
/// Line ranges are clipped against the document body first, so preamble
/// and trailing lines are never queried. For additions only the new side
/// is populated, for deletions only the old side, for changes both.
pub fn hunk_pair(
    raw: &RawHunk,
    ranges: &Sides<DocumentRange>,
    locator: &dyn PageLocator,
    combine: f64,
) -> Result<HunkPair, TranslateError> {
    let kind = match raw.mode {
        DiffMode::Add => ChangeKind::Added,
        DiffMode::Delete => ChangeKind::Deleted,
        DiffMode::Change => ChangeKind::Changed,
    };
    let mut pair = HunkPair::new(kind);

    if raw.mode != DiffMode::Add {
        fill(&mut pair.old, &raw.old, ranges, locator, combine)?;
    }
    if raw.mode != DiffMode::Delete {
        fill(&mut pair.new, &raw.new, ranges, locator, combine)?;
    }
    Ok(pair)
}

fn fill(
    hunk: &mut Hunk,
    range: &LineRange,
    ranges: &Sides<DocumentRange>,
    locator: &dyn PageLocator,
    combine: f64,
) -> Result<(), TranslateError> {
    let revision = hunk.revision;
    for line in ranges[revision].clip(range) {
        for rect in locator.locate(revision, line, 0)? {
            hunk.push_rect(rect, combine)?;
        }
    }
    Ok(())
}

/// Translate all raw hunks, one blocking task per hunk.
///
/// The locator queries are blocking subprocess calls and dominate wall
/// time, so the pool runs hunks (not single lines) in parallel; the caller
/// caps the blocking pool at the configured job count. Results are awaited
/// in submission order, which keeps the compositor's output deterministic.
pub async fn translate_all(
    raw: Vec<RawHunk>,
    ranges: Sides<DocumentRange>,
    locator: Arc<dyn PageLocator>,
    combine: f64,
) -> Result<Vec<HunkPair>, TranslateError> {
    let ranges = Arc::new(ranges);

    let tasks: Vec<_> = raw
        .into_iter()
        .map(|hunk| {
            let ranges = Arc::clone(&ranges);
            let locator = Arc::clone(&locator);
            tokio::task::spawn_blocking(move || {
                hunk_pair(&hunk, &ranges, locator.as_ref(), combine)
            })
        })
        .collect();

    let mut pairs = Vec::with_capacity(tasks.len());
    for task in tasks {
        pairs.push(task.await??);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use texdiff_core::{Rect, Revision};

    /// Deterministic locator: fixed rectangles per (revision, line).
    struct StubLocator {
        rects: HashMap<(Revision, usize), Vec<Rect>>,
    }

    impl StubLocator {
        fn new(entries: &[(Revision, usize, Rect)]) -> Self {
            let mut rects: HashMap<(Revision, usize), Vec<Rect>> = HashMap::new();
            for (revision, line, rect) in entries {
                rects.entry((*revision, *line)).or_default().push(*rect);
            }
            Self { rects }
        }
    }

    impl PageLocator for StubLocator {
        fn locate(
            &self,
            revision: Revision,
            line: usize,
            _column: usize,
        ) -> Result<Vec<Rect>, LocatorError> {
            Ok(self.rects.get(&(revision, line)).cloned().unwrap_or_default())
        }
    }

    fn body_lines() -> Sides<DocumentRange> {
        // body lines 2..=19 on both sides
        let source = format!(
            "\\begin{{document}}\n{}\\end{{document}}\n",
            "text\n".repeat(18)
        );
        let range = DocumentRange::from_source(&source);
        Sides::new(range, range)
    }

    #[test]
    fn test_add_mode_populates_only_new_side() {
        let locator = StubLocator::new(&[
            (Revision::New, 12, Rect::new(0, 0.0, 0.0, 10.0, 10.0)),
            (Revision::New, 13, Rect::new(0, 0.0, 20.0, 10.0, 30.0)),
            (Revision::New, 14, Rect::new(1, 0.0, 0.0, 10.0, 10.0)),
            // must never be queried for an addition
            (Revision::Old, 10, Rect::new(0, 50.0, 50.0, 60.0, 60.0)),
        ]);
        let raw = RawHunk {
            mode: DiffMode::Add,
            old: LineRange { start: 10, end: 10 },
            new: LineRange { start: 12, end: 14 },
        };

        let pair = hunk_pair(&raw, &body_lines(), &locator, 0.0).unwrap();

        assert!(pair.old.is_empty());
        assert_eq!(pair.old.kind, ChangeKind::Added);
        assert_eq!(pair.new.rects().len(), 3);
        assert_eq!(
            pair.new.affected_pages().into_iter().collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn test_delete_mode_populates_only_old_side() {
        let locator = StubLocator::new(&[
            (Revision::Old, 5, Rect::new(0, 0.0, 0.0, 10.0, 10.0)),
            (Revision::New, 5, Rect::new(0, 0.0, 0.0, 10.0, 10.0)),
        ]);
        let raw = RawHunk {
            mode: DiffMode::Delete,
            old: LineRange { start: 5, end: 5 },
            new: LineRange { start: 4, end: 4 },
        };

        let pair = hunk_pair(&raw, &body_lines(), &locator, 0.0).unwrap();
        assert_eq!(pair.old.rects().len(), 1);
        assert!(pair.new.is_empty());
        assert_eq!(pair.new.kind, ChangeKind::Deleted);
    }

    #[test]
    fn test_change_mode_populates_both_sides() {
        let locator = StubLocator::new(&[
            (Revision::Old, 5, Rect::new(0, 10.0, 10.0, 100.0, 20.0)),
            (Revision::New, 5, Rect::new(0, 10.0, 10.0, 120.0, 25.0)),
        ]);
        let raw = RawHunk {
            mode: DiffMode::Change,
            old: LineRange { start: 5, end: 5 },
            new: LineRange { start: 5, end: 5 },
        };

        let pair = hunk_pair(&raw, &body_lines(), &locator, 0.0).unwrap();
        assert_eq!(pair.old.rects(), &[Rect::new(0, 10.0, 10.0, 100.0, 20.0)]);
        assert_eq!(pair.new.rects(), &[Rect::new(0, 10.0, 10.0, 120.0, 25.0)]);
    }

    #[test]
    fn test_lines_outside_body_are_not_queried() {
        // line 1 is the \begin{document} line itself
        let locator = StubLocator::new(&[(Revision::New, 1, Rect::new(0, 0.0, 0.0, 10.0, 10.0))]);
        let raw = RawHunk {
            mode: DiffMode::Add,
            old: LineRange { start: 1, end: 1 },
            new: LineRange { start: 1, end: 1 },
        };

        let pair = hunk_pair(&raw, &body_lines(), &locator, 0.0).unwrap();
        assert!(pair.new.is_empty());
    }

    #[tokio::test]
    async fn test_translate_all_preserves_input_order() {
        let locator = Arc::new(StubLocator::new(&[
            (Revision::Old, 3, Rect::new(0, 0.0, 0.0, 10.0, 10.0)),
            (Revision::New, 7, Rect::new(1, 0.0, 0.0, 10.0, 10.0)),
        ]));
        let raw = vec![
            RawHunk {
                mode: DiffMode::Delete,
                old: LineRange { start: 3, end: 3 },
                new: LineRange { start: 2, end: 2 },
            },
            RawHunk {
                mode: DiffMode::Add,
                old: LineRange { start: 6, end: 6 },
                new: LineRange { start: 7, end: 7 },
            },
        ];

        let pairs = translate_all(raw, body_lines(), locator, 0.0).await.unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].old.kind, ChangeKind::Deleted);
        assert_eq!(pairs[1].new.kind, ChangeKind::Added);
        assert_eq!(pairs[1].new.rects()[0].page, 1);
    }
}
