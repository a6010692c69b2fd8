//! Per-project filesystem helpers.
//!
//! Every project owns a directory under the configured projects-home root;
//! these helpers build paths inside it and manage the shareable marker file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::ServerResult;

/// Marker file signalling that a project is shared.
pub const SHAREABLE_FILENAME: &str = "shareable";

/// Mode for directories created under the projects home.
#[cfg(unix)]
const PROJECT_DIR_MODE: u32 = 0o775;

/// Returns the path to `filename` inside the given project, together with
/// its parent directory.
pub fn project_file_path(
    projects_home: &Path,
    project_id: &str,
    filename: &str,
) -> (PathBuf, PathBuf) {
    let path = projects_home.join(project_id).join(filename);
    let parent = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| projects_home.to_path_buf());
    (path, parent)
}

/// Creates the parent directory of `path`, with ancestors, if missing.
#[instrument]
pub fn create_parent(path: &Path) -> ServerResult<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.exists() {
        return Ok(());
    }
    debug!(parent = %parent.display(), "parent does not exist, creating");
    create_dir_all_with_mode(parent)?;
    Ok(())
}

#[cfg(unix)]
fn create_dir_all_with_mode(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new()
        .recursive(true)
        .mode(PROJECT_DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
fn create_dir_all_with_mode(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

/// Deletes the project's shareable marker file if present.
///
/// Returns whether the file existed.
#[instrument]
pub fn delete_shareable_file(projects_home: &Path, project_id: &str) -> ServerResult<bool> {
    let (path, _parent) = project_file_path(projects_home, project_id, SHAREABLE_FILENAME);
    if !path.exists() {
        debug!(%project_id, path = %path.display(), "no shareable file to delete");
        return Ok(false);
    }
    debug!(%project_id, path = %path.display(), "deleting shareable file");
    fs::remove_file(&path)?;
    Ok(true)
}
