use crate::error::StorageError;
use search_core::persist::write_atomic;
use search_core::DocumentId;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Destination for cleaned page text.
pub trait DocumentStore {
    fn save(&self, text: &str, id: &DocumentId) -> Result<(), StorageError>;
}

/// One `{id}.txt` file per document under a root directory.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create the root directory if needed. Fails when there is nowhere to
    /// write at all.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| StorageError::from_io(root.clone(), e))?;
        let meta = fs::metadata(&root).map_err(|e| StorageError::from_io(root.clone(), e))?;
        if !meta.is_dir() {
            return Err(StorageError::PathInvalid { path: root });
        }
        if meta.permissions().readonly() {
            return Err(StorageError::PermissionDenied { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn path_for(&self, id: &DocumentId) -> PathBuf { self.root.join(id.file_name()) }
}

impl DocumentStore for FsDocumentStore {
    fn save(&self, text: &str, id: &DocumentId) -> Result<(), StorageError> {
        let path = self.path_for(id);
        let name = Path::new(id.as_str());
        if id.as_str().is_empty() || name.components().count() != 1 || !matches!(name.components().next(), Some(Component::Normal(_))) {
            return Err(StorageError::PathInvalid { path });
        }
        write_atomic(&path, text.as_bytes()).map_err(|e| StorageError::from_io(path.clone(), e))?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "saved document");
        Ok(())
    }
}
