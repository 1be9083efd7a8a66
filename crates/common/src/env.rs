//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is opened.

use std::path::Path;

use tracing::info;

/// Ensure the directory holding a file-backed database exists.
pub async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.as_os_str().is_empty() || tokio::fs::metadata(dir).await.is_ok() {
        return Ok(());
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(dir = %dir.display(), "created data directory");
    Ok(())
}
