//! File access behind a trait so commands can run against an in-memory store in tests.

use std::io;
use std::path::Path;

/// The file operations commands need. `RealFs` hits the disk, `mock::MockFs` keeps files in memory.
pub trait FileSystem: Send + Sync {
    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate `path` and write `content`.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Shared real file system handle.
pub fn default_fs() -> &'static RealFs {
    static INSTANCE: RealFs = RealFs;
    &INSTANCE
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::RwLock;

    #[derive(Debug, Default)]
    pub struct MockFs {
        files: RwLock<HashMap<PathBuf, String>>,
    }

    impl MockFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
            self.files
                .write()
                .unwrap()
                .insert(path.as_ref().to_path_buf(), content.into());
            self
        }

        pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files.read().unwrap().get(path.as_ref()).cloned()
        }
    }

    impl FileSystem for MockFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.get(path).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("file not found: {}", path.display()),
                )
            })
        }

        fn write(&self, path: &Path, content: &str) -> io::Result<()> {
            self.files
                .write()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.read().unwrap().contains_key(path)
        }
    }
}
