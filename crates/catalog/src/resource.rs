use crate::category::Category;
use crate::locator::{ResourceLocator, Resolved, build};
use crate::classification::{ClassificationAxis, ClassificationLevel};
use crate::region::RegionCode;
use crate::selection::ValidSelection;

/// How a category maps onto a document path, relative to the plots root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTemplate {
    /// Home shows built-in content and has no document.
    None,
    Fixed(&'static str),
    /// `by-state/{region}_map.html`
    ByRegion,
    /// `by-category/{axis}/{level}_{axis}.html`
    ByClassification,
}

impl PathTemplate {
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            PathTemplate::None => None,
            PathTemplate::Fixed(path) => Some(path),
            PathTemplate::ByRegion => Some("by-state/{region}_map.html"),
            PathTemplate::ByClassification => Some("by-category/{axis}/{level}_{axis}.html"),
        }
    }

    pub(crate) fn region_path(region: RegionCode) -> String {
        format!("by-state/{}_map.html", region.code())
    }

    pub(crate) fn classification_path(
        axis: ClassificationAxis,
        level: ClassificationLevel,
    ) -> String {
        let axis = axis.token();
        format!("by-category/{axis}/{}_{axis}.html", level.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: Category,
    pub title: &'static str,
    pub template: PathTemplate,
}

/// Read-only table of everything the viewer can display.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceCatalog;

const ENTRIES: [CatalogEntry; 6] = [
    CatalogEntry {
        category: Category::Home,
        title: "Página Inicial",
        template: PathTemplate::None,
    },
    CatalogEntry {
        category: Category::Points,
        title: "Mapa de Pontos do Brasil",
        template: PathTemplate::Fixed("spatial_distribution_brazil.html"),
    },
    CatalogEntry {
        category: Category::Biomes,
        title: "Mapa de Biomas do Brasil",
        template: PathTemplate::Fixed("spatial_distribution_by_biome.html"),
    },
    CatalogEntry {
        category: Category::GeneralByState,
        title: "Mapa Geral dos Estados",
        template: PathTemplate::Fixed("states_overview.html"),
    },
    CatalogEntry {
        category: Category::ByState,
        title: "Mapa por Estado",
        template: PathTemplate::ByRegion,
    },
    CatalogEntry {
        category: Category::ByClassification,
        title: "Mapa por Classificação",
        template: PathTemplate::ByClassification,
    },
];

impl ResourceCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Entries in menu order.
    pub fn entries(&self) -> &'static [CatalogEntry] {
        &ENTRIES
    }

    pub fn entry(&self, category: Category) -> &'static CatalogEntry {
        // ENTRIES is indexed in the same order as Category::ALL.
        let idx = Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or_default();
        &ENTRIES[idx]
    }

    pub fn template(&self, category: Category) -> PathTemplate {
        self.entry(category).template
    }

    /// Every selection that resolves to a document, in menu order, regions in
    /// canonical order and levels in axis order.
    pub fn resolvable_selections(&self) -> Vec<ValidSelection> {
        let mut out = vec![
            ValidSelection::Points,
            ValidSelection::Biomes,
            ValidSelection::GeneralByState,
        ];
        out.extend(
            crate::options::regions()
                .iter()
                .map(|&region| ValidSelection::ByState { region }),
        );
        for &axis in crate::options::axes() {
            out.extend(
                crate::options::options_for(axis)
                    .iter()
                    .map(|&level| ValidSelection::ByClassification { axis, level }),
            );
        }
        out
    }

    /// Locator of every document the viewer can display.
    pub fn all_locators(&self) -> Vec<ResourceLocator> {
        self.resolvable_selections()
            .iter()
            .filter_map(|selection| match build(selection) {
                Resolved::Visualization(locator) => Some(locator),
                Resolved::Informational => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_category_order() {
        let catalog = ResourceCatalog::new();
        let cats: Vec<Category> = catalog.entries().iter().map(|e| e.category).collect();
        assert_eq!(cats, Category::ALL.to_vec());
        for c in Category::ALL {
            assert_eq!(catalog.entry(c).category, c);
        }
    }

    #[test]
    fn only_home_lacks_a_template() {
        let catalog = ResourceCatalog::new();
        for c in Category::ALL {
            assert_eq!(catalog.template(c).pattern().is_none(), c == Category::Home);
        }
    }

    #[test]
    fn resolvable_selection_count() {
        // 3 fixed + 27 regions + 5 frp levels + 3 fire risk levels.
        assert_eq!(ResourceCatalog::new().resolvable_selections().len(), 38);
    }

    #[test]
    fn every_locator_is_distinct() {
        let locators = ResourceCatalog::new().all_locators();
        assert_eq!(locators.len(), 38);
        let paths: std::collections::HashSet<&str> =
            locators.iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths.len(), 38);
        assert_eq!(locators[0].path, "spatial_distribution_brazil.html");
        assert_eq!(locators[37].path, "by-category/fire_risk/High_fire_risk.html");
    }
}
