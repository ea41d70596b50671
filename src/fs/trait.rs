//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Read-only view of the file system used when inspecting a host
pub trait FileSystem: Send + Sync {
    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;
}
