use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, UploadError};
use crate::resource::Resource;

/// Read and parse every file, in order.
///
/// Stops at the first unreadable or malformed file; nothing after it is read.
pub fn load_resources(paths: &[PathBuf]) -> Result<Vec<Resource>> {
    paths.iter().map(|p| load_resource(p)).collect()
}

fn load_resource(path: &Path) -> Result<Resource> {
    let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let resource = Resource::parse(&bytes).map_err(|source| UploadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "loaded {} ({})",
        path.display(),
        resource.reference().as_deref().unwrap_or("unidentified")
    );
    Ok(resource)
}
