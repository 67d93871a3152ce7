use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Top-level visualization mode picked from the category menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Home,
    Points,
    Biomes,
    #[serde(rename = "states_overview")]
    GeneralByState,
    ByState,
    ByClassification,
}

impl Category {
    /// Menu order.
    pub const ALL: [Category; 6] = [
        Category::Home,
        Category::Points,
        Category::Biomes,
        Category::GeneralByState,
        Category::ByState,
        Category::ByClassification,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Category::Home => "home",
            Category::Points => "points",
            Category::Biomes => "biomes",
            Category::GeneralByState => "states_overview",
            Category::ByState => "by_state",
            Category::ByClassification => "by_classification",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Home => "Página Inicial",
            Category::Points => "Mapa de Pontos",
            Category::Biomes => "Mapa de Biomas",
            Category::GeneralByState => "Mapa Geral dos Estados",
            Category::ByState => "Mapa por Estado",
            Category::ByClassification => "Mapa por Classificação",
        }
    }

    pub fn parse(token: &str) -> Result<Self, CatalogError> {
        let token = token.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.token() == token)
            .ok_or_else(|| CatalogError::UnresolvableCategory(token.to_string()))
    }

    /// `ByState` and `ByClassification` need dependent selectors before
    /// anything can be displayed; the rest resolve as soon as they are chosen.
    pub fn needs_sub_selection(self) -> bool {
        matches!(self, Category::ByState | Category::ByClassification)
    }

    pub fn declares(self, field: Field) -> bool {
        match field {
            Field::Region => self == Category::ByState,
            Field::Axis | Field::Level => self == Category::ByClassification,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Sub-selection fields a category may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Region,
    Axis,
    Level,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Region => "region",
            Field::Axis => "axis",
            Field::Level => "level",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
