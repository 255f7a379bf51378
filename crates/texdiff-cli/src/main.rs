//! `texdiff` — visual page-by-page PDF diff for LaTeX documents.
//!
//! Reads two revision trees (`old/`, `new/`), diffs their main source
//! files, maps every changed line to page rectangles via SyncTeX, and
//! renders an interleaved overlay PDF (plus a two-up side-by-side layout)
//! into the output directory.

mod config;
mod system;

use anyhow::Context;
use config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use system::{Pdflatex, SystemDiff};
use texdiff_compose::{
    diff_document, merge_document, render_documents, translate_all, write_documents,
    ComposeOptions, DIFF_PDF,
};
use texdiff_core::{DiffSource, DocumentRange, PageCounter, Revision, Sides};
use texdiff_synctex::{SynctexPages, SynctexView};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    run(&config)
}

fn run(config: &Config) -> anyhow::Result<()> {
    let dirs = Sides::new(
        PathBuf::from(&config.old_dir),
        PathBuf::from(&config.new_dir),
    );
    let tex = absolute_paths(&dirs, &config.tex_name)?;
    let pdf = absolute_paths(&dirs, &config.pdf_name)?;
    let synctex = absolute_paths(&dirs, &config.synctex_name)?;

    let counter = SynctexPages::new(synctex);
    let counts = Sides::new(
        counter.page_count(Revision::Old)?,
        counter.page_count(Revision::New)?,
    );
    log::debug!("page counts: old={}, new={}", counts.old, counts.new);

    let ranges = Sides::new(body_range(&tex.old)?, body_range(&tex.new)?);

    log::info!("Finding diffs");
    let raw = SystemDiff.hunks(&tex.old, &tex.new)?;
    if raw.is_empty() {
        log::info!(
            "No differences between {} and {}",
            tex.old.display(),
            tex.new.display()
        );
        return Ok(());
    }

    log::info!("Locating {} changed regions via SyncTeX", raw.len());
    let locator = Arc::new(SynctexView::new(tex, pdf.clone()));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .max_blocking_threads(config.jobs)
        .build()
        .context("failed to start the worker runtime")?;
    let pairs = runtime.block_on(translate_all(raw, ranges, locator, config.combine_rects))?;

    let options = ComposeOptions {
        compact: config.compact,
        surround: config.compact_surround,
        labels: dirs.map(|dir| label(dir)),
    };
    let output_dir = PathBuf::from(&config.output_dir);
    write_documents(
        &output_dir,
        &diff_document(&pairs, &counts, &pdf, &options),
        &merge_document(DIFF_PDF),
    )
    .with_context(|| format!("failed to write documents to {}", output_dir.display()))?;

    log::info!("Rendering PDF");
    render_documents(&Pdflatex, &output_dir)?;
    log::info!("Diff written to {}", output_dir.join(DIFF_PDF).display());
    Ok(())
}

fn absolute_paths(dirs: &Sides<PathBuf>, name: &str) -> anyhow::Result<Sides<PathBuf>> {
    Ok(Sides::new(
        std::path::absolute(dirs.old.join(name))?,
        std::path::absolute(dirs.new.join(name))?,
    ))
}

fn body_range(tex: &Path) -> anyhow::Result<DocumentRange> {
    let source =
        fs::read_to_string(tex).with_context(|| format!("failed to read {}", tex.display()))?;
    Ok(DocumentRange::from_source(&source))
}

fn label(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
