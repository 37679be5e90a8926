//! Keystore resolution.
//!
//! Turns the keystore reference input into a filesystem path: `file://`
//! references resolve locally, anything else is fetched into the scratch
//! directory with a single blocking GET. The file's content is never
//! inspected here.

use std::fs::File;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Scheme prefix marking a keystore reference as a local path.
pub const LOCAL_FILE_SCHEME: &str = "file://";

/// Fixed name the downloaded keystore is stored under.
pub const KEYSTORE_FILE_NAME: &str = "keystore.jks";

/// Resolve a keystore reference to an absolute filesystem path.
///
/// `file://` references are stripped and absolutized; remote URLs are
/// downloaded to `<scratch_dir>/keystore.jks`. The caller guarantees the
/// reference is non-empty.
///
/// # Errors
///
/// Returns `PathResolution` for a local reference that cannot be
/// absolutized, `Download` for any network or write failure.
pub fn resolve(reference: &str, scratch_dir: &Path) -> Result<PathBuf> {
    if let Some(raw) = reference.strip_prefix(LOCAL_FILE_SCHEME) {
        local_path(raw)
    } else {
        let dest = scratch_dir.join(KEYSTORE_FILE_NAME);
        download(reference, &dest)?;
        Ok(dest)
    }
}

/// Expand a leading `~`, absolutize against the working directory and
/// clean out `.`/`..` segments lexically.
fn local_path(raw: &str) -> Result<PathBuf> {
    if raw.is_empty() {
        return Err(Error::PathResolution {
            path: raw.to_string(),
            reason: "empty path".to_string(),
        });
    }

    let expanded = if raw == "~" {
        home_dir(raw)?
    } else if let Some(rest) = raw.strip_prefix("~/") {
        home_dir(raw)?.join(rest)
    } else {
        PathBuf::from(raw)
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::PathResolution {
            path: raw.to_string(),
            reason: format!("cannot determine working directory: {}", e),
        })?;
        cwd.join(expanded)
    };

    Ok(clean(&absolute))
}

/// Lexically normalize an absolute path: drop `.` components and resolve
/// `..` against the preceding component. `..` at the root stays at the
/// root. The filesystem is never consulted.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

fn home_dir(raw: &str) -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| Error::PathResolution {
        path: raw.to_string(),
        reason: "cannot determine home directory".to_string(),
    })
}

/// Fetch `url` with a single GET and stream the body into `dest`.
///
/// No retries and no timeout: the one download blocks the run until it
/// completes or fails. File and connection handles close on every exit
/// path via drop.
fn download(url: &str, dest: &Path) -> Result<()> {
    let download_err = |reason: String| Error::Download {
        url: url.to_string(),
        reason,
    };

    debug!("downloading keystore from {} to {}", url, dest.display());

    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .map_err(|e| download_err(e.to_string()))?;

    let mut response = client
        .get(url)
        .send()
        .map_err(|e| download_err(e.to_string()))?
        .error_for_status()
        .map_err(|e| download_err(e.to_string()))?;

    let mut file = File::create(dest).map_err(|e| download_err(e.to_string()))?;
    response
        .copy_to(&mut file)
        .map_err(|e| download_err(e.to_string()))?;

    Ok(())
}
