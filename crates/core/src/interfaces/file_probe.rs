//! Filesystem access interface
//!
//! Every filesystem touch made while resolving a startup command goes
//! through this trait, so resolution can run against an in-memory tree.

use std::io;
use std::path::Path;

/// Trait for the filesystem operations the resolver performs
pub trait FileProbe: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Add execute permission for everyone. Returns whether anything changed.
    fn add_execute_permission(&self, path: &Path) -> io::Result<bool>;

    /// Write `contents` to a new file at `path`
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}
