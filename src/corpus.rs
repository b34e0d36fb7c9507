// src/corpus.rs
//! Corpus enumeration: one folder of documents, walked non-recursively in
//! a stable name order, read permissively (decoding problems are
//! substituted, never fatal).

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{NpcaError, Result};

/// An ordered set of document paths.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<PathBuf>,
}

impl Corpus {
    /// Enumerates the documents directly inside `dir`, sorted by file name
    /// so batch output order is reproducible across platforms.
    ///
    /// # Errors
    /// `Io` when the directory cannot be walked; `Config` when it holds no
    /// documents at all (an empty corpus cannot produce a report).
    pub fn discover(dir: &Path) -> Result<Self> {
        let mut documents = Vec::new();
        let walker = WalkDir::new(dir)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                documents.push(entry.path().to_path_buf());
            }
        }

        if documents.is_empty() {
            return Err(NpcaError::Config(format!(
                "no input documents found in {}",
                dir.display()
            )));
        }
        Ok(Self { documents })
    }

    #[must_use]
    pub fn from_paths(documents: Vec<PathBuf>) -> Self {
        Self { documents }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.documents.iter()
    }

    /// Reads one document's bytes, substituting invalid UTF-8 rather than
    /// failing: corpora routinely mix encodings and a single odd byte must
    /// not kill a run.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| NpcaError::io(e, path))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Base name of a document path, for the report's `file` column.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
