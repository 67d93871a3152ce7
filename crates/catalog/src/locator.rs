use serde::{Deserialize, Serialize};

use crate::resource::{PathTemplate, ResourceCatalog};
use crate::selection::ValidSelection;

/// Path of a pre-rendered visualization (relative to the plots root) plus the
/// title shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceLocator {
    pub path: String,
    pub title: String,
}

/// What a validated selection turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Visualization(ResourceLocator),
    /// The home narrative; there is no document behind it.
    Informational,
}

impl Resolved {
    pub fn locator(&self) -> Option<&ResourceLocator> {
        match self {
            Resolved::Visualization(locator) => Some(locator),
            Resolved::Informational => None,
        }
    }
}

/// Maps a validated selection to what should be displayed.
///
/// Titles are per category: the region or level picked is not part of it.
pub fn build(selection: &ValidSelection) -> Resolved {
    let catalog = ResourceCatalog::new();
    let entry = catalog.entry(selection.category());
    let path = match (*selection, entry.template) {
        (_, PathTemplate::Fixed(path)) => path.to_string(),
        (ValidSelection::ByState { region }, _) => PathTemplate::region_path(region),
        (ValidSelection::ByClassification { axis, level }, _) => {
            PathTemplate::classification_path(axis, level)
        }
        _ => return Resolved::Informational,
    };
    tracing::debug!(category = %selection.category(), %path, "resolved locator");
    Resolved::Visualization(ResourceLocator {
        path,
        title: entry.title.to_string(),
    })
}
