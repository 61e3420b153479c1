use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// Identifier namespace shared by every corpus document.
pub const DOC_NAMESPACE: &str = "primevue";

/// Prefix of every document id (`/primevue/components/button`).
pub const DOC_ID_PREFIX: &str = "/primevue/";

/// Scheme prefix of every resource URI (`primevue://components/button`).
pub const RESOURCE_URI_PREFIX: &str = "primevue://";

/// Display category for documents whose `metadata.file` is empty.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One documentation page, deserialized from a single corpus JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: DocContent,
    pub metadata: DocMetadata,
}

/// Typed document body. `kind` is a mime-like tag (`text/markdown`);
/// `value` is the raw page text, or the converter's placeholder when the
/// source page had no content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Provenance recorded by the markdown-to-JSON converter.
///
/// `file` is the path relative to the corpus root, forward-slash separated
/// regardless of platform; its first segment is the document's category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocMetadata {
    pub source: String,
    pub file: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Document {
    /// Display category: the first path segment of `metadata.file`, or
    /// [`UNKNOWN_CATEGORY`] when the path is empty.
    pub fn category(&self) -> &str {
        self.metadata
            .file
            .split('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// Resource URI for this document, built by rewriting the id's
    /// `/primevue/` prefix to `primevue://`. Ids without the expected
    /// prefix are returned unchanged.
    pub fn resource_uri(&self) -> String {
        match self.id.strip_prefix(DOC_ID_PREFIX) {
            Some(doc_path) => format!("{RESOURCE_URI_PREFIX}{doc_path}"),
            None => self.id.clone(),
        }
    }
}

/// Map a resource path (`components/button`) back to the storage id it
/// addresses (`/primevue/components/button`).
pub fn doc_id_for_path(doc_path: &str) -> String {
    format!("/{DOC_NAMESPACE}/{doc_path}")
}

/// Non-fatal problem encountered while loading the corpus.
///
/// Loading is fail-soft: every warning corresponds to content that was
/// skipped, never to an aborted load. Callers decide how to surface these.
#[derive(Debug, thiserror::Error)]
pub enum LoadWarning {
    #[error("cannot walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("duplicate document id {id}, skipping {}", path.display())]
    DuplicateId { id: String, path: PathBuf },
}

/// In-memory corpus, keyed by document id.
///
/// Built once at startup and never mutated afterwards; the ordered map
/// gives iteration a deterministic lexicographic-by-id order, which the
/// query engine relies on as its base ordering.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: BTreeMap<String, Document>,
}

impl DocumentStore {
    /// Load every `*.json` file under `root` (any nesting depth, sorted
    /// traversal order) as a [`Document`].
    ///
    /// Fail-soft: an unreadable file, malformed JSON, or a duplicate id
    /// skips that file and records a [`LoadWarning`]; an unreadable root
    /// yields an empty store and a single warning. The first-loaded
    /// document wins a duplicate id.
    pub fn load(root: &Path) -> (Self, Vec<LoadWarning>) {
        let mut store = Self::default();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warnings.push(LoadWarning::Walk(e));
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_json_file(entry.path()) {
                continue;
            }

            let path = entry.path();
            let raw = match std::fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(e) => {
                    warnings.push(LoadWarning::Read {
                        path: path.to_path_buf(),
                        source: e,
                    });
                    continue;
                }
            };

            let doc: Document = match serde_json::from_str(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    warnings.push(LoadWarning::Parse {
                        path: path.to_path_buf(),
                        source: e,
                    });
                    continue;
                }
            };

            if store.docs.contains_key(&doc.id) {
                warnings.push(LoadWarning::DuplicateId {
                    id: doc.id,
                    path: path.to_path_buf(),
                });
                continue;
            }
            store.docs.insert(doc.id.clone(), doc);
        }

        (store, warnings)
    }

    /// Exact-match lookup by id. `None` is an ordinary outcome here;
    /// callers use it for fallback chains, so a missing key never errors.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    /// All documents in lexicographic id order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.values()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

fn is_json_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}
