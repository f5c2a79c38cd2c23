//! Stylesheet discovery

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::naming::{is_stylesheet_name, STYLESHEET_SUFFIX};
use crate::error::{Result, TypegenError};

/// Find every CSS Module file under `root`
///
/// Walks depth-first with siblings in file-name order, so the result is stable
/// for a given tree. Symbolic links are not followed and never returned.
///
/// # Errors
///
/// - [`TypegenError::NotFound`] if `root` is missing, not a directory, or unreadable
/// - [`TypegenError::Io`] if a directory below `root` cannot be read
pub fn stylesheets(root: &Path) -> Result<Vec<PathBuf>> {
    fs::read_dir(root).map_err(|e| TypegenError::not_found(root, e))?;

    let mut found = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(root, e))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let is_stylesheet = match entry.file_name().to_str() {
            Some(name) => is_stylesheet_name(name),
            None => {
                if entry
                    .file_name()
                    .to_string_lossy()
                    .ends_with(STYLESHEET_SUFFIX)
                {
                    warn!(
                        path = %entry.path().display(),
                        "Skipping stylesheet with non-UTF-8 file name"
                    );
                }
                false
            }
        };

        if is_stylesheet {
            found.push(entry.into_path());
        }
    }

    info!(
        root = %root.display(),
        count = found.len(),
        "Discovered CSS Module files"
    );

    Ok(found)
}

fn walk_error(root: &Path, err: walkdir::Error) -> TypegenError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    TypegenError::Io { path, source }
}
