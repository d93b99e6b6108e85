//! Subdirectory extraction from gzipped repository tarballs
//!
//! Repository archives wrap every entry in a single root directory
//! (`<repo>-<sha>/`). Only entries below `<root>/<subpath>/` are unpacked,
//! with that prefix stripped, so the template lands directly in the
//! destination directory.

use camino::Utf8Path;
use flate2::read::GzDecoder;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tar::Archive;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Extract `subpath` from a `.tar.gz` archive into `destination`
///
/// Existing files are overwritten. Returns the number of files written.
///
/// # Errors
/// Returns error if:
/// - The archive is corrupt
/// - An entry contains `..` or an absolute path
/// - No entry lives under `subpath`
pub fn extract_subdirectory(data: &[u8], subpath: &str, destination: &Utf8Path) -> Result<usize> {
    let prefix = normal_components(Path::new(subpath))?;
    if prefix.is_empty() {
        return Err(Error::subpath_not_found(subpath));
    }

    fs::create_dir_all(destination)?;

    let mut archive = Archive::new(GzDecoder::new(data));
    archive.set_overwrite(true);

    let mut found = false;
    let mut files = 0usize;

    for entry in archive.entries()? {
        let mut entry = entry?;
        let entry_type = entry.header().entry_type();

        if !(entry_type.is_file() || entry_type.is_dir()) {
            trace!("Skipping archive entry of type {:?}", entry_type);
            continue;
        }

        let path = entry.path()?.into_owned();
        let components = normal_components(&path)?;

        // First component is the archive root
        let Some(relative) = components
            .get(1..)
            .and_then(|rest| rest.strip_prefix(prefix.as_slice()))
        else {
            continue;
        };

        found = true;
        if relative.is_empty() {
            continue;
        }

        let target: PathBuf = relative
            .iter()
            .fold(destination.as_std_path().to_path_buf(), |acc, c| acc.join(c));

        if entry_type.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        entry.unpack(&target)?;
        files += 1;
        trace!("Extracted {}", target.display());
    }

    if !found {
        return Err(Error::subpath_not_found(subpath));
    }

    debug!("Extracted {} file(s) from {} into {}", files, subpath, destination);
    Ok(files)
}

/// Split a path into its normal components, rejecting anything that could escape
fn normal_components(path: &Path) -> Result<Vec<&OsStr>> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::unsafe_archive_path(path.display().to_string()));
            }
        }
    }
    Ok(parts)
}
