// File: ./src/source.rs
/*! Vault abstraction: where documents and their structural metadata come
from.

The scan engine never touches the filesystem directly; it works against a
`VaultSource`, which supplies document listings with timestamps, a
structural index per document, asynchronous content reads and the single
write operation the status mutator needs. Two implementations are
provided:

- `FsVault`: a directory of `*.md` files, indexed once at open time.
- `MemoryVault`: an in-memory fixture source for tests.
*/

use crate::index::{self, DocumentStructure};
use crate::storage::FileStore;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use walkdir::WalkDir;

/// Listing entry for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMeta {
    /// Vault-relative path.
    pub path: Utf8PathBuf,
    pub name: String,
    pub modified: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

impl DocumentMeta {
    /// Display label: the file name minus a `.md` extension.
    pub fn label(&self) -> String {
        self.name
            .strip_suffix(".md")
            .unwrap_or(&self.name)
            .to_string()
    }
}

pub trait VaultSource: Send + Sync {
    fn documents(&self) -> Vec<DocumentMeta>;

    /// Structural metadata for one document, as known to the source's
    /// index. `None` when the document is unknown.
    fn structure(&self, path: &Utf8Path) -> Option<DocumentStructure>;

    fn read(&self, path: &Utf8Path) -> impl Future<Output = Result<String>> + Send;

    fn write(&self, path: &Utf8Path, content: &str) -> impl Future<Output = Result<()>> + Send;
}

// --- Filesystem implementation ---

#[derive(Debug)]
pub struct FsVault {
    root: Utf8PathBuf,
    docs: HashMap<Utf8PathBuf, (DocumentMeta, DocumentStructure)>,
}

impl FsVault {
    /// Walks `root` for markdown files and builds the structural index.
    /// Non-UTF-8 paths and unreadable files are skipped with a warning.
    pub fn open(root: impl Into<Utf8PathBuf>) -> Result<Self> {
        let root = root.into();
        let mut docs = HashMap::new();

        for entry in WalkDir::new(root.as_std_path()) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Skipping unreadable vault entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(path) = Utf8Path::from_path(entry.path()) else {
                log::warn!("Skipping non-UTF-8 path: {:?}", entry.path());
                continue;
            };
            if path.extension() != Some("md") {
                continue;
            }

            let rel = path
                .strip_prefix(&root)
                .unwrap_or(path)
                .to_path_buf();
            let content = match std::fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    log::warn!("Skipping unreadable file '{}': {}", path, e);
                    continue;
                }
            };

            let fs_meta = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("Skipping unstattable file '{}': {}", path, e);
                    continue;
                }
            };
            let modified = fs_meta
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());
            // Creation time is not available on every filesystem; fall back
            // to the modification time.
            let created = fs_meta
                .created()
                .map(DateTime::<Utc>::from)
                .unwrap_or(modified);

            let meta = DocumentMeta {
                name: rel
                    .file_name()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| rel.to_string()),
                path: rel.clone(),
                modified,
                created,
            };
            let structure = index::index_document(&content);
            docs.insert(rel, (meta, structure));
        }

        log::debug!("Indexed {} markdown files under '{}'", docs.len(), root);
        Ok(Self { root, docs })
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl VaultSource for FsVault {
    fn documents(&self) -> Vec<DocumentMeta> {
        let mut metas: Vec<DocumentMeta> =
            self.docs.values().map(|(meta, _)| meta.clone()).collect();
        metas.sort_by(|a, b| a.path.cmp(&b.path));
        metas
    }

    fn structure(&self, path: &Utf8Path) -> Option<DocumentStructure> {
        self.docs.get(path).map(|(_, s)| s.clone())
    }

    async fn read(&self, path: &Utf8Path) -> Result<String> {
        let full = self.root.join(path);
        tokio::fs::read_to_string(&full)
            .await
            .with_context(|| format!("Failed to read document '{}'", full))
    }

    async fn write(&self, path: &Utf8Path, content: &str) -> Result<()> {
        let full = self.root.join(path);
        FileStore::with_lock(full.as_std_path(), || {
            FileStore::atomic_write(full.as_std_path(), content)
        })
        .with_context(|| format!("Failed to write document '{}'", full))
    }
}

// --- In-memory implementation (test fixtures) ---

#[derive(Debug)]
struct StoredDoc {
    meta: DocumentMeta,
    content: String,
    structure: DocumentStructure,
}

/// A vault held entirely in memory. Inserting a document indexes it
/// immediately, the way `FsVault::open` does for files on disk.
#[derive(Debug, Default)]
pub struct MemoryVault {
    docs: Mutex<HashMap<Utf8PathBuf, StoredDoc>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &self,
        path: impl Into<Utf8PathBuf>,
        content: impl Into<String>,
        modified: DateTime<Utc>,
        created: DateTime<Utc>,
    ) {
        let path = path.into();
        let content = content.into();
        let meta = DocumentMeta {
            name: path
                .file_name()
                .map(|n| n.to_string())
                .unwrap_or_else(|| path.to_string()),
            path: path.clone(),
            modified,
            created,
        };
        let structure = index::index_document(&content);
        self.docs.lock().expect("memory vault poisoned").insert(
            path,
            StoredDoc {
                meta,
                content,
                structure,
            },
        );
    }

    /// Current content of a stored document, if present.
    pub fn content_of(&self, path: &Utf8Path) -> Option<String> {
        self.docs
            .lock()
            .expect("memory vault poisoned")
            .get(path)
            .map(|d| d.content.clone())
    }
}

impl VaultSource for MemoryVault {
    fn documents(&self) -> Vec<DocumentMeta> {
        let docs = self.docs.lock().expect("memory vault poisoned");
        let mut metas: Vec<DocumentMeta> = docs.values().map(|d| d.meta.clone()).collect();
        metas.sort_by(|a, b| a.path.cmp(&b.path));
        metas
    }

    fn structure(&self, path: &Utf8Path) -> Option<DocumentStructure> {
        self.docs
            .lock()
            .expect("memory vault poisoned")
            .get(path)
            .map(|d| d.structure.clone())
    }

    async fn read(&self, path: &Utf8Path) -> Result<String> {
        self.docs
            .lock()
            .expect("memory vault poisoned")
            .get(path)
            .map(|d| d.content.clone())
            .ok_or_else(|| anyhow::anyhow!("No such document '{}'", path))
    }

    async fn write(&self, path: &Utf8Path, content: &str) -> Result<()> {
        let mut docs = self.docs.lock().expect("memory vault poisoned");
        let doc = docs
            .get_mut(path)
            .ok_or_else(|| anyhow::anyhow!("No such document '{}'", path))?;
        doc.content = content.to_string();
        doc.structure = index::index_document(content);
        Ok(())
    }
}
