//! Page location via `synctex view`.

use regex::Regex;
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;
use texdiff_core::{LocatorError, PageLocator, Rect, Revision, Sides};

/// Shells out to `synctex view` for every query.
///
/// One process per (revision, line, column); the caller is expected to
/// batch queries at hunk granularity to amortize the spawn overhead.
#[derive(Debug, Clone)]
pub struct SynctexView {
    tex: Sides<PathBuf>,
    pdf: Sides<PathBuf>,
}

impl SynctexView {
    pub fn new(tex: Sides<PathBuf>, pdf: Sides<PathBuf>) -> Self {
        Self { tex, pdf }
    }
}

impl PageLocator for SynctexView {
    fn locate(
        &self,
        revision: Revision,
        line: usize,
        column: usize,
    ) -> Result<Vec<Rect>, LocatorError> {
        let input = format!("{}:{}:{}", line, column, self.tex[revision].display());
        log::debug!("synctex view -i {}", input);

        let output = Command::new("synctex")
            .arg("view")
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&self.pdf[revision])
            .output()?;

        if !output.status.success() {
            return Err(LocatorError::Query {
                revision,
                line,
                status: output.status,
            });
        }

        parse_view_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse `synctex view` output into rectangles.
///
/// Each record carries a 1-based `Page:` plus `h:`/`v:` (position of the
/// box's bottom-left corner) and `W:`/`H:` (extent). The rectangle on the
/// 0-based page is `(h, v - H, h + W, v)`.
pub fn parse_view_output(text: &str) -> Result<Vec<Rect>, LocatorError> {
    static RECORD_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = RECORD_REGEX.get_or_init(|| {
        Regex::new(
            r"(?ms)^Page:(?P<p>[0-9]+).*?h:(?P<h>[0-9.]+).*?v:(?P<v>[0-9.]+).*?W:(?P<W>[0-9.]+).*?H:(?P<H>[0-9.]+)",
        )
        .unwrap()
    });

    let mut rects = Vec::new();
    for caps in re.captures_iter(text) {
        let page: usize = field(&caps, "p")?;
        let h: f64 = field(&caps, "h")?;
        let v: f64 = field(&caps, "v")?;
        let w: f64 = field(&caps, "W")?;
        let height: f64 = field(&caps, "H")?;

        let page = page
            .checked_sub(1)
            .ok_or_else(|| LocatorError::Malformed("page numbers are 1-based".into()))?;

        rects.push(Rect::new(page, h, v - height, h + w, v));
    }
    Ok(rects)
}

fn field<T: std::str::FromStr>(
    caps: &regex::Captures<'_>,
    name: &str,
) -> Result<T, LocatorError> {
    let text = caps
        .name(name)
        .ok_or_else(|| LocatorError::Malformed(format!("missing field {}", name)))?
        .as_str();
    text.parse()
        .map_err(|_| LocatorError::Malformed(format!("bad {} value {:?}", name, text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Trimmed-down `synctex view` output with two result records.
    const VIEW_OUTPUT: &str = "\
This is SyncTeX command line utility, version 1.5
SyncTeX result begin
Output:main.pdf
Page:1
x:133.768356
y:534.898132
h:133.768356
v:534.898132
W:343.710938
H:9.962640
before:
offset:0
middle:
after:
Page:2
x:133.768356
y:96.605362
h:133.768356
v:96.605362
W:343.710938
H:9.962640
before:
offset:0
middle:
after:
SyncTeX result end
";

    #[test]
    fn test_parse_two_records() {
        let rects = parse_view_output(VIEW_OUTPUT).unwrap();
        assert_eq!(rects.len(), 2);

        // 1-based pages become 0-based
        assert_eq!(rects[0].page, 0);
        assert_eq!(rects[1].page, 1);

        // (h, v - H, h + W, v)
        assert_eq!(rects[0].x1, 133.768356);
        assert_eq!(rects[0].y1, 534.898132 - 9.962640);
        assert_eq!(rects[0].x2, 133.768356 + 343.710938);
        assert_eq!(rects[0].y2, 534.898132);
    }

    #[test]
    fn test_no_records_is_empty() {
        let rects = parse_view_output("SyncTeX result begin\nSyncTeX result end\n").unwrap();
        assert!(rects.is_empty());
    }

    #[test]
    fn test_page_zero_is_malformed() {
        let output = "Page:0\nh:1.0\nv:2.0\nW:3.0\nH:4.0\n";
        assert!(matches!(
            parse_view_output(output),
            Err(LocatorError::Malformed(_))
        ));
    }
}
