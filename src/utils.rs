//! Utility functions for logging and file system checks.

use std::error::Error;
use std::fs as stdfs;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to the nearest
/// character boundary, article text is rarely plain ASCII) with an ellipsis
/// and byte count appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Ensure the directory holding `path` exists and is writable.
///
/// Creates the parent directory if needed, then performs a write test by
/// creating and immediately deleting a probe file. Run before any network
/// work so an unwritable output location fails fast.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_parent(path: &str) -> Result<(), Box<dyn Error>> {
    let parent = match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if let Err(e) = fs::create_dir_all(&parent).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = parent.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
