use crate::error::{BakeError, BakeResult};
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_source(path: &Path) -> BakeResult<Vec<u8>> {
    fs::read(path).map_err(|e| BakeError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `bytes` to `dest`, creating missing parent directories first
pub fn write_output(dest: &Path, bytes: &[u8]) -> BakeResult<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }
    fs::write(dest, bytes).map_err(|e| BakeError::Write {
        path: dest.to_path_buf(),
        source: e,
    })
}

/// Create each directory up front; failures are logged and skipped
pub fn ensure_dirs(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut created = Vec::new();
    for dir in dirs {
        match create_dir(dir) {
            Ok(()) => created.push(dir.clone()),
            Err(e) => tracing::warn!("{}", e),
        }
    }
    created
}

fn create_dir(path: &Path) -> BakeResult<()> {
    fs::create_dir_all(path).map_err(|e| BakeError::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("nope.svg")).unwrap_err();
        assert!(matches!(err, BakeError::SourceRead { .. }));
    }

    #[test]
    fn test_write_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a/b/c/out.png");
        write_output(&dest, b"data").unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"data");
    }

    #[test]
    fn test_write_blocked_by_file_parent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let err = write_output(&blocker.join("out.png"), b"data").unwrap_err();
        assert!(matches!(err, BakeError::CreateDir { .. }));
    }

    #[test]
    fn test_ensure_dirs_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let good = dir.path().join("covers");

        let created = ensure_dirs(&[blocker.join("sub"), good.clone()]);
        assert_eq!(created, vec![good.clone()]);
        assert!(good.is_dir());
    }
}
