use serde::{Deserialize, Serialize};

use crate::locator::{Resolved, build};
use crate::resource::ResourceCatalog;
use crate::selection::ValidSelection;

pub const MANIFEST_VERSION: &str = "1.0";

/// Serializable listing of every document the viewer can point at.
///
/// The offline pipeline uses it to know which files to produce; `fingerprint`
/// changes whenever a path or title changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub version: String,
    pub fingerprint: String,
    pub entries: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub selection: ValidSelection,
    pub path: String,
    pub title: String,
    // Filled by verification against a plots directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl CatalogManifest {
    pub fn from_catalog(catalog: &ResourceCatalog) -> Self {
        let entries: Vec<ManifestEntry> = catalog
            .resolvable_selections()
            .into_iter()
            .filter_map(|selection| match build(&selection) {
                Resolved::Visualization(locator) => Some(ManifestEntry {
                    selection,
                    path: locator.path,
                    title: locator.title,
                    content_hash: None,
                }),
                Resolved::Informational => None,
            })
            .collect();
        let fingerprint = fingerprint(&entries);
        Self {
            version: MANIFEST_VERSION.to_string(),
            fingerprint,
            entries,
        }
    }

    pub fn entry_for_path(&self, path: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.path == path)
    }
}

/// blake3 over `path \t title \n` lines in listing order. Content hashes are
/// not part of it: the fingerprint identifies the catalog, not the files.
fn fingerprint(entries: &[ManifestEntry]) -> String {
    let mut hasher = blake3::Hasher::new();
    for e in entries {
        hasher.update(e.path.as_bytes());
        hasher.update(b"\t");
        hasher.update(e.title.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex().to_string()
}

pub fn content_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}
