use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, UploadError};

/// File name suffix (matched case-insensitively) of uploadable resources.
pub const DOCUMENT_EXTENSION: &str = ".json";

/// List the resource files directly inside `dir`.
///
/// The scan is not recursive and keeps the order the directory listing
/// returns. Entries that are not regular files are ignored even when their
/// name matches.
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let scan_err = |source| UploadError::Scan {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let path = entry.map_err(scan_err)?.path();
        if has_document_extension(&path) && path.is_file() {
            files.push(path);
        }
    }

    debug!("found {} resource file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Directory holding the running executable, with symlinks resolved.
pub fn default_scan_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(UploadError::ExecutableDir)?;
    let exe = exe.canonicalize().map_err(UploadError::ExecutableDir)?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// Explicit paths win; otherwise every resource file found in `scan_dir`,
/// or in [`default_scan_dir`] when none is given.
///
/// The scan directory is only looked up when there is something to scan.
pub fn resolve_inputs(explicit: Vec<PathBuf>, scan_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        return Ok(explicit);
    }
    match scan_dir {
        Some(dir) => collect_files(dir),
        None => collect_files(&default_scan_dir()?),
    }
}

fn has_document_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(DOCUMENT_EXTENSION))
}
