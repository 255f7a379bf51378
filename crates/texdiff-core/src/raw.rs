//! Raw line-diff hunks parsed from classic `diff` output.
//!
//! Only the hunk header lines (`5c5`, `10a12,14`, `3,4d2`, ...) are
//! consumed; everything else in the diff output is skipped.

use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// Change mode from the hunk header: `a`dd, `d`elete or `c`hange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    Add,
    Delete,
    Change,
}

/// An inclusive 1-based line range, `n` or `start,end` in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    fn parse(s: &str) -> Option<Self> {
        match s.split_once(',') {
            None => {
                let n = s.parse().ok()?;
                Some(Self { start: n, end: n })
            }
            Some((start, end)) => Some(Self {
                start: start.parse().ok()?,
                end: end.parse().ok()?,
            }),
        }
    }
}

/// One hunk header from the diff output, not yet located on any page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHunk {
    pub mode: DiffMode,
    pub old: LineRange,
    pub new: LineRange,
}

/// Extract all hunk headers from raw `diff` output, in order.
///
/// Lines that do not match the `<oldRange><mode><newRange>` header
/// convention (diff body lines, separators) are skipped, never an error.
pub fn parse_hunk_headers(diff_output: &str) -> Vec<RawHunk> {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HEADER_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^(?P<old>[0-9]+(?:,[0-9]+)?)(?P<mode>[adc])(?P<new>[0-9]+(?:,[0-9]+)?)$")
            .unwrap()
    });

    re.captures_iter(diff_output)
        .filter_map(|caps| {
            let mode = match caps.name("mode")?.as_str() {
                "a" => DiffMode::Add,
                "d" => DiffMode::Delete,
                "c" => DiffMode::Change,
                _ => return None,
            };
            Some(RawHunk {
                mode,
                old: LineRange::parse(caps.name("old")?.as_str())?,
                new: LineRange::parse(caps.name("new")?.as_str())?,
            })
        })
        .collect()
}
