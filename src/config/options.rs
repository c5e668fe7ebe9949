// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Everything a generation run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenOptions {
    pub header_path: PathBuf,
    pub html_path: PathBuf,
    /// Print the regenerated page instead of overwriting it.
    pub dry_run: bool,
    /// Also write the normalized catalog here as JSON.
    pub catalog_out: Option<PathBuf>,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            header_path: PathBuf::from(DEFAULT_HEADER_PATH),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            dry_run: false,
            catalog_out: None,
        }
    }
}

impl GenOptions {
    pub fn with_paths(header: impl Into<PathBuf>, html: impl Into<PathBuf>) -> Self {
        Self {
            header_path: header.into(),
            html_path: html.into(),
            ..Self::default()
        }
    }
}
