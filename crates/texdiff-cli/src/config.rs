//! Application configuration
//!
//! Loaded from an optional `texdiff.toml` in the working directory; every
//! field has a default so the file can be partial or absent.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "texdiff.toml";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the old revision's sources and PDF
    #[serde(default = "default_old_dir")]
    pub old_dir: String,

    /// Directory holding the new revision's sources and PDF
    #[serde(default = "default_new_dir")]
    pub new_dir: String,

    /// Directory the diff documents and PDFs are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Main source file name inside each revision directory
    #[serde(default = "default_tex_name")]
    pub tex_name: String,

    /// Compiled PDF name inside each revision directory
    #[serde(default = "default_pdf_name")]
    pub pdf_name: String,

    /// SyncTeX archive name inside each revision directory
    #[serde(default = "default_synctex_name")]
    pub synctex_name: String,

    /// Only emit pages containing a diff
    #[serde(default = "default_compact")]
    pub compact: bool,

    /// Pages of context kept around each changed page in compact mode
    #[serde(default)]
    pub compact_surround: usize,

    /// Rectangle combination threshold in [0, 1); 0 disables combination
    #[serde(default = "default_combine_rects")]
    pub combine_rects: f64,

    /// Parallel SyncTeX query jobs
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_old_dir() -> String {
    "old".to_string()
}

fn default_new_dir() -> String {
    "new".to_string()
}

fn default_output_dir() -> String {
    "diff".to_string()
}

fn default_tex_name() -> String {
    "main.tex".to_string()
}

fn default_pdf_name() -> String {
    "main.pdf".to_string()
}

fn default_synctex_name() -> String {
    "main.synctex.gz".to_string()
}

fn default_compact() -> bool {
    true
}

fn default_combine_rects() -> f64 {
    0.0001
}

fn default_jobs() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            old_dir: default_old_dir(),
            new_dir: default_new_dir(),
            output_dir: default_output_dir(),
            tex_name: default_tex_name(),
            pdf_name: default_pdf_name(),
            synctex_name: default_synctex_name(),
            compact: default_compact(),
            compact_surround: 0,
            combine_rects: default_combine_rects(),
            jobs: default_jobs(),
        }
    }
}

impl Config {
    /// Load from `texdiff.toml` in the working directory, or use defaults.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Self {
        let config = match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No config file, using defaults");
                Self::default()
            }
        };
        config.validated()
    }

    /// Clamp out-of-range knobs back to their defaults.
    fn validated(mut self) -> Self {
        if !(0.0..1.0).contains(&self.combine_rects) {
            log::warn!(
                "combine_rects {} outside [0, 1), using {}",
                self.combine_rects,
                default_combine_rects()
            );
            self.combine_rects = default_combine_rects();
        }
        if self.jobs == 0 {
            log::warn!("jobs must be at least 1, using 1");
            self.jobs = 1;
        }
        self
    }
}
