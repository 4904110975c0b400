use crate::error::{Result, SyncError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single file inside a content root.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the content root; mirrored at every target.
    pub rel: PathBuf,
    /// Absolute location on disk.
    pub abs: PathBuf,
}

/// The source tree to distribute. Scanned once at open time; never written to.
#[derive(Debug, Clone)]
pub struct ContentRoot {
    root: PathBuf,
    files: Vec<SourceFile>,
}

impl ContentRoot {
    /// Open and scan a content root.
    ///
    /// Fails with `SourceMissing` if `path` is not a directory and with
    /// `SourceEmpty` if the tree contains no files — an empty source means
    /// there is nothing to synchronize. Symlinks are followed, so a link to a
    /// skill document installs as a regular file; a link that cycles back to
    /// an ancestor is skipped, the walk already covers everything behind it.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(SyncError::SourceMissing(path.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.loop_ancestor().is_some() => continue,
                Err(e) => return Err(e.into()),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(path)
                .expect("walkdir yields paths under its root")
                .to_path_buf();
            files.push(SourceFile {
                rel,
                abs: entry.path().to_path_buf(),
            });
        }

        if files.is_empty() {
            return Err(SyncError::SourceEmpty(path.to_path_buf()));
        }

        Ok(Self {
            root: path.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files in deterministic (name-sorted) walk order.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_root_errors() {
        let dir = TempDir::new().unwrap();
        let result = ContentRoot::open(&dir.path().join("nope"));
        assert!(matches!(result, Err(SyncError::SourceMissing(_))));
    }

    #[test]
    fn file_as_root_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        std::fs::write(&path, b"x").unwrap();
        let result = ContentRoot::open(&path);
        assert!(matches!(result, Err(SyncError::SourceMissing(_))));
    }

    #[test]
    fn empty_root_errors() {
        let dir = TempDir::new().unwrap();
        let result = ContentRoot::open(dir.path());
        assert!(matches!(result, Err(SyncError::SourceEmpty(_))));
    }

    #[test]
    fn dirs_without_files_count_as_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        let result = ContentRoot::open(dir.path());
        assert!(matches!(result, Err(SyncError::SourceEmpty(_))));
    }

    #[test]
    fn scan_collects_nested_files_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("a")).unwrap();
        std::fs::write(dir.path().join("b.txt"), b"world").unwrap();
        std::fs::write(dir.path().join("a/one.txt"), b"hello").unwrap();

        let root = ContentRoot::open(dir.path()).unwrap();
        assert_eq!(root.file_count(), 2);

        let rels: Vec<_> = root.files().iter().map(|f| f.rel.clone()).collect();
        assert_eq!(rels, vec![PathBuf::from("a/one.txt"), PathBuf::from("b.txt")]);
        assert_eq!(root.files()[0].abs, dir.path().join("a/one.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn scan_skips_link_cycles() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("a")).unwrap();
        std::fs::write(dir.path().join("a/one.txt"), b"hello").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"world").unwrap();
        // A link under a/ pointing back at the root.
        std::os::unix::fs::symlink(dir.path(), dir.path().join("a/loop")).unwrap();

        let root = ContentRoot::open(dir.path()).unwrap();

        let rels: Vec<_> = root.files().iter().map(|f| f.rel.clone()).collect();
        assert_eq!(rels, vec![PathBuf::from("a/one.txt"), PathBuf::from("b.txt")]);
    }
}
