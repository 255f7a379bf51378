//! Page composition: hunk pairs to the combined diff document.

use std::path::PathBuf;
use texdiff_core::{HunkPair, Revision, Sides};

/// Tuning knobs for page selection, plus the banner labels.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Only emit pages containing a diff (plus their surround).
    pub compact: bool,
    /// Pages of unchanged context kept around each changed page.
    pub surround: usize,
    /// Banner text per revision, typically the tree directory names.
    pub labels: Sides<String>,
}

/// Banner fill color: a distinct translucent strip per revision so the
/// interleaved pages are recognizable at a glance.
fn banner_color(revision: Revision) -> &'static str {
    match revision {
        Revision::Old => "olive",
        Revision::New => "blue",
    }
}

/// Full-width labelled strip across the top of the page.
fn banner_tex(revision: Revision, label: &str) -> String {
    format!(
        "\n\\coordinate (a) at ($ (current page.north east) + (0, 32) $); %\n\
         \\path [fill={}, fill opacity=0.2] (0, 0) rectangle (a); %\n\
         \\node [] at ($ (0,0)!0.5!(a) $) {{{}}}; %\n",
        banner_color(revision),
        label
    )
}

/// Concatenated overlay fragments per page, per revision, in hunk order.
fn overlay_tables(pairs: &[HunkPair], max_pages: usize) -> Sides<Vec<String>> {
    let mut tables = Sides::new(vec![String::new(); max_pages], vec![String::new(); max_pages]);
    for pair in pairs {
        for revision in Revision::BOTH {
            let hunk = pair.side(revision);
            for page in 0..max_pages {
                tables[revision][page].push_str(&hunk.overlay_tex(page));
            }
        }
    }
    tables
}

/// Pages to emit, in order.
///
/// Compact mode skips a page only when its whole surround window is
/// overlay-empty for both revisions, so changed pages keep their
/// configured context even when the neighbors themselves are unchanged.
fn emitted_pages(tables: &Sides<Vec<String>>, compact: bool, surround: usize) -> Vec<usize> {
    let max_pages = tables.old.len();
    (0..max_pages)
        .filter(|&page| {
            if !compact {
                return true;
            }
            let window = page.saturating_sub(surround)..(page + surround + 1).min(max_pages);
            window
                .into_iter()
                .any(|p| !tables.old[p].is_empty() || !tables.new[p].is_empty())
        })
        .collect()
}

/// Build the combined single-column diff document.
///
/// Pages are interleaved old/new. A revision shorter than the other gets a
/// blank placeholder page so the interleave stays aligned.
pub fn diff_document(
    pairs: &[HunkPair],
    counts: &Sides<usize>,
    pdfs: &Sides<PathBuf>,
    options: &ComposeOptions,
) -> String {
    let max_pages = counts.old.max(counts.new);
    let tables = overlay_tables(pairs, max_pages);
    let pages = emitted_pages(&tables, options.compact, options.surround);

    let mut doc = String::from(
        "\\documentclass[12pt]{article}\n\
         \n\
         \\usepackage{pdfpages}\n\
         \\usepackage{tikz}\n\
         \\usetikzlibrary{calc}\n\
         \n\
         \\begin{document}\n",
    );

    for page in pages {
        for revision in Revision::BOTH {
            if page < counts[revision] {
                doc.push_str(&format!(
                    "\\includepdf[fitpaper=true, pagecommand={{\\thispagestyle{{empty}}\
                     \\begin{{tikzpicture}}[x=1pt, y=-1pt, remember picture, overlay, \
                     shift={{(current page.north west)}}] %{}{}\\end{{tikzpicture}}}}, \
                     pages={{{}}}]{{{}}}\n",
                    banner_tex(revision, &options.labels[revision]),
                    tables[revision][page],
                    page + 1,
                    pdfs[revision].display()
                ));
            } else {
                // this revision ran out of pages
                doc.push_str("\\mbox{}\\newpage\n");
            }
        }
    }

    doc.push_str("\n\\end{document}\n");
    doc
}

/// Two-up landscape layout of the rendered diff for side-by-side review.
pub fn merge_document(diff_pdf: &str) -> String {
    format!(
        "\\documentclass[12pt]{{article}}\n\
         \n\
         \\usepackage{{pdfpages}}\n\
         \\usepackage[a4paper]{{geometry}}\n\
         \n\
         \\begin{{document}}\n\
         \\includepdf[pages=-, nup=1x2, landscape, frame]{{{}}}\n\
         \\end{{document}}\n",
        diff_pdf
    )
}
