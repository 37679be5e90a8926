//! Artifact persistence and pipeline handoff.
//!
//! Serializes the unredacted document to `build.json` in the scratch
//! directory and exports its path to the surrounding pipeline with envman.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::document::BuildConfiguration;
use crate::error::{Error, Result};

/// File name of the persisted artifact.
pub const CONFIG_FILE_NAME: &str = "build.json";

/// Environment variable the artifact path is published under.
pub const OUTPUT_KEY: &str = "BITRISE_CORDOVA_BUILD_CONFIGURATION";

/// Serialize the document and write it to `<scratch_dir>/build.json`.
///
/// The document is written with 2-space indentation and stable key order.
/// The write goes through a temp file in the same directory and an atomic
/// rename, so a failed run never leaves a partial artifact behind.
pub fn write_document(document: &BuildConfiguration, scratch_dir: &Path) -> Result<PathBuf> {
    let bytes = serde_json::to_vec_pretty(document)?;

    let path = scratch_dir.join(CONFIG_FILE_NAME);
    let persist_err = |e: std::io::Error| Error::Persistence {
        path: path.display().to_string(),
        source: e,
    };

    let mut file = NamedTempFile::new_in(scratch_dir).map_err(persist_err)?;
    file.write_all(&bytes).map_err(persist_err)?;
    file.persist(&path).map_err(|e| persist_err(e.error))?;

    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Publish a value to the pipeline's shared variable space via envman.
///
/// Runs `envman add --key <key>` with the value on stdin, matching how
/// later pipeline stages expect outputs to be exported.
pub fn export_output(key: &'static str, value: &str) -> Result<()> {
    let publish_err = |reason: String| Error::Publish { key, reason };

    let envman =
        which::which("envman").map_err(|_| publish_err("envman not found in PATH".to_string()))?;

    let mut child = Command::new(envman)
        .args(["add", "--key", key])
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| publish_err(e.to_string()))?;

    // stdin handle is dropped after the write so envman sees EOF
    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| publish_err("failed to open envman stdin".to_string()))?;
        stdin
            .write_all(value.as_bytes())
            .map_err(|e| publish_err(e.to_string()))?;
    }

    let status = child.wait().map_err(|e| publish_err(e.to_string()))?;
    if !status.success() {
        return Err(publish_err(format!("envman exited with {}", status)));
    }

    Ok(())
}
