// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers for tests that need real clouds.yaml files on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree of clouds.yaml files, removed on drop.
pub struct CloudsFixture {
    dir: TempDir,
}

impl CloudsFixture {
    /// Create an empty fixture directory
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// The fixture's root directory
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path below the fixture root, without creating anything.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Create a directory below the fixture root
    pub fn mkdir(&self, relative: &str) -> io::Result<PathBuf> {
        let path = self.path(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_root() {
        let fixture = CloudsFixture::new().unwrap();
        let path = fixture.write("nested/dir/clouds.yaml", "clouds: {}\n").unwrap();

        assert!(path.starts_with(fixture.root()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "clouds: {}\n");
        assert!(fixture.mkdir("empty").unwrap().is_dir());
    }

    #[test]
    fn test_root_removed_on_drop() {
        let fixture = CloudsFixture::new().unwrap();
        let root = fixture.root().to_path_buf();
        assert!(root.is_dir());

        drop(fixture);
        assert!(!root.exists());
    }
}
