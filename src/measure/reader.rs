//! Artifact readers

use std::io;
use std::path::Path;

/// Reads artifact contents for measurement
pub trait FileReader: Send + Sync {
    /// Read the full contents of `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads artifacts from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        std::fs::write(&path, b"console.log(1);").unwrap();

        assert_eq!(FsReader.read(&path).unwrap(), b"console.log(1);");
    }

    #[test]
    fn missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let err = FsReader.read(&dir.path().join("nope.js")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
