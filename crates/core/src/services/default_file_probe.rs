//! Default file probe implementation
//!
//! Provides standard file system based probing.

use crate::interfaces::FileProbe;
use std::fs;
use std::io;
use std::path::Path;

/// Default implementation of FileProbe using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFileProbe;

impl DefaultFileProbe {
    pub fn new() -> Self {
        Self
    }
}

impl FileProbe for DefaultFileProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    #[cfg(unix)]
    fn add_execute_permission(&self, path: &Path) -> io::Result<bool> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)?.permissions();
        let mode = perms.mode();
        if mode & 0o111 == 0o111 {
            return Ok(false);
        }
        perms.set_mode(mode | 0o111);
        fs::set_permissions(path, perms)?;
        Ok(true)
    }

    #[cfg(not(unix))]
    fn add_execute_permission(&self, _path: &Path) -> io::Result<bool> {
        Ok(false)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
