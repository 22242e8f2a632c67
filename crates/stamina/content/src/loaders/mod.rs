//! Loaders for reading mod configuration and host data from files.
//!
//! All loaders parse into the formats defined in [`crate::formats`] or
//! directly into `stamina-core` types.

pub mod config;
pub mod globals;

pub use config::{ConfigFormat, ConfigLoader};
pub use globals::{GlobalsDocument, JsonStaminaTable, STAMINA_POINTER, read_field};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Async variant of [`read_file`] for hosts that load on a runtime.
pub(crate) async fn read_file_async(path: &Path) -> LoadResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", parent.display(), e))?;
    }
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}
