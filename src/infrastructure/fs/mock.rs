//! In-memory file system for unit tests

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

/// In-memory file system with failure injection
#[derive(Default)]
pub struct MockFileSystem {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    fail_writes: Mutex<BTreeSet<PathBuf>>,
    fail_reads: Mutex<BTreeSet<PathBuf>>,
    fail_removes: Mutex<BTreeSet<PathBuf>>,
    fail_create_dir: Mutex<bool>,
    fail_list: Mutex<bool>,
    /// Every mutating call, in order
    ops: Mutex<Vec<String>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its directory) without recording an operation
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.lock().unwrap().insert(parent.to_path_buf());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path, content.as_bytes().to_vec());
        self
    }

    pub fn fail_write(self, path: impl Into<PathBuf>) -> Self {
        self.fail_writes.lock().unwrap().insert(path.into());
        self
    }

    pub fn fail_read(self, path: impl Into<PathBuf>) -> Self {
        self.fail_reads.lock().unwrap().insert(path.into());
        self
    }

    pub fn fail_remove(self, path: impl Into<PathBuf>) -> Self {
        self.fail_removes.lock().unwrap().insert(path.into());
        self
    }

    pub fn fail_create_dir(self) -> Self {
        *self.fail_create_dir.lock().unwrap() = true;
        self
    }

    pub fn fail_list(self) -> Self {
        *self.fail_list.lock().unwrap() = true;
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }

    fn record(&self, op: &str, path: &Path) {
        self.ops
            .lock()
            .unwrap()
            .push(format!("{op} {}", path.display()));
    }
}

fn denied(path: &Path) -> FsError {
    FsError::PermissionDenied(path.to_path_buf())
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        if self.fail_reads.lock().unwrap().contains(path) {
            return Err(denied(path));
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.record("write", path);
        if self.fail_writes.lock().unwrap().contains(path) {
            return Err(denied(path));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        self.record("remove", path);
        if self.fail_removes.lock().unwrap().contains(path) {
            return Err(denied(path));
        }
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.record("mkdir", path);
        if *self.fail_create_dir.lock().unwrap() {
            return Err(denied(path));
        }
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        if *self.fail_list.lock().unwrap() {
            return Err(denied(path));
        }
        if !self.exists(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|file| file.parent() == Some(path))
            .map(|file| DirEntry {
                path: file.clone(),
                is_file: true,
            })
            .collect())
    }
}
