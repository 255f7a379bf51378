//! Page counts from the `.synctex.gz` summary footer.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use texdiff_core::{PageCountError, PageCounter, Revision, Sides};

/// Reads each revision's total page count from its SyncTeX archive.
#[derive(Debug, Clone)]
pub struct SynctexPages {
    archives: Sides<PathBuf>,
}

impl SynctexPages {
    pub fn new(archives: Sides<PathBuf>) -> Self {
        Self { archives }
    }
}

impl PageCounter for SynctexPages {
    fn page_count(&self, revision: Revision) -> Result<usize, PageCountError> {
        let file = File::open(&self.archives[revision])?;
        let mut content = String::new();
        GzDecoder::new(file).read_to_string(&mut content)?;
        page_count_from_footer(&content)
    }
}

/// Extract the page count from decompressed SyncTeX content.
///
/// The SyncTeX summary footer stores the count on the 7th-from-last line,
/// behind a one-byte record type tag. A format quirk inherited from the
/// SyncTeX file layout, kept as-is.
pub fn page_count_from_footer(content: &str) -> Result<usize, PageCountError> {
    let lines: Vec<&str> = content.lines().collect();
    let line = lines
        .len()
        .checked_sub(7)
        .and_then(|i| lines.get(i))
        .ok_or_else(|| PageCountError::Malformed("fewer than 7 footer lines".into()))?;

    let digits = line
        .get(1..)
        .ok_or_else(|| PageCountError::Malformed(format!("footer line too short: {:?}", line)))?;

    digits
        .trim()
        .parse()
        .map_err(|_| PageCountError::Malformed(format!("bad page count line: {:?}", line)))
}
