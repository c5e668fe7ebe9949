// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::catalog::Catalog;
use crate::core::text::unify_newlines;
use crate::error::{GenError, Result};
use crate::render::Blocks;
use crate::splice::Splice;

/// Whole file as text, line endings unified to `\n`.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .map_err(|source| GenError::Read { path: path.to_path_buf(), source })?;
    if text.contains('\r') {
        return Ok(unify_newlines(&text).into_owned());
    }
    Ok(text)
}

/// prefix, region 1, middle, region 2, suffix.
pub fn compose(splice: &Splice<'_>, blocks: &Blocks) -> String {
    let mut out = String::new();
    splice.prefix.iter().for_each(|l| out.push_str(l));
    out.push_str(&blocks.first_region());
    splice.middle.iter().for_each(|l| out.push_str(l));
    out.push_str(&blocks.second_region());
    splice.suffix.iter().for_each(|l| out.push_str(l));
    out
}

/// Truncate and overwrite in place. Not atomic.
pub fn overwrite(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source| GenError::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    out.write_all(contents.as_bytes()).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    Ok(())
}

/// Pretty-printed JSON dump of the normalized catalog. Returns the path written.
pub fn write_catalog_json(path: &Path, catalog: &Catalog) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');
    overwrite(path, &json)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| GenError::Write { path: dir.to_path_buf(), source })
}
