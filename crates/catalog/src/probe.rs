//! Existence checks for resolved documents.
//!
//! The viewer never probes while the user is clicking around: a locator whose
//! document is missing is simply handed to the display surface. Probes are for
//! offline verification of a plots directory.

use std::collections::BTreeSet;

use crate::CatalogError;
use crate::locator::ResourceLocator;

pub trait ResourceProbe {
    fn exists(&self, locator: &ResourceLocator) -> Result<bool, CatalogError>;

    /// Raw document bytes, or `None` when the document is missing.
    fn read(&self, locator: &ResourceLocator) -> Result<Option<Vec<u8>>, CatalogError>;
}

#[derive(Debug, Default)]
pub struct InMemoryProbe {
    documents: BTreeSet<String>,
}

impl InMemoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        self.documents.insert(path.into())
    }
}

impl FromIterator<String> for InMemoryProbe {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl ResourceProbe for InMemoryProbe {
    fn exists(&self, locator: &ResourceLocator) -> Result<bool, CatalogError> {
        Ok(self.documents.contains(&locator.path))
    }

    fn read(&self, locator: &ResourceLocator) -> Result<Option<Vec<u8>>, CatalogError> {
        // Only presence is tracked; the path itself stands in for the content.
        Ok(self
            .documents
            .get(&locator.path)
            .map(|p| p.as_bytes().to_vec()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod fs_probe {
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::ResourceProbe;
    use crate::CatalogError;
    use crate::locator::ResourceLocator;

    /// Probe rooted at a local plots directory.
    #[derive(Debug, Clone)]
    pub struct FsProbe {
        root: PathBuf,
    }

    impl FsProbe {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        fn path_of(&self, locator: &ResourceLocator) -> PathBuf {
            // Locator paths always use '/', whatever the host separator is.
            locator
                .path
                .split('/')
                .fold(self.root.clone(), |acc, seg| acc.join(seg))
        }
    }

    impl ResourceProbe for FsProbe {
        fn exists(&self, locator: &ResourceLocator) -> Result<bool, CatalogError> {
            let path = self.path_of(locator);
            match std::fs::metadata(&path) {
                Ok(meta) => Ok(meta.is_file()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
                Err(e) => Err(CatalogError::Io(format!("stat {path:?}: {e}"))),
            }
        }

        fn read(&self, locator: &ResourceLocator) -> Result<Option<Vec<u8>>, CatalogError> {
            let path = self.path_of(locator);
            match std::fs::read(&path) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(CatalogError::Io(format!("read {path:?}: {e}"))),
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
pub use fs_probe::FsProbe;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_probe_tracks_paths() {
        let mut probe = InMemoryProbe::new();
        assert!(probe.insert("states_overview.html"));
        let hit = ResourceLocator {
            path: "states_overview.html".to_string(),
            title: "Mapa Geral dos Estados".to_string(),
        };
        let miss = ResourceLocator {
            path: "by-state/SP_map.html".to_string(),
            title: "Mapa por Estado".to_string(),
        };
        assert!(probe.exists(&hit).unwrap());
        assert!(!probe.exists(&miss).unwrap());
        assert!(probe.read(&miss).unwrap().is_none());
    }
}
