//! Static catalog of the wildfire visualizations and the pure logic that turns
//! a user's selection into a document locator.

pub mod category;
pub mod classification;
pub mod locator;
pub mod manifest;
pub mod options;
pub mod probe;
pub mod region;
pub mod resource;
pub mod selection;
pub mod validate;

pub use category::*;
pub use classification::*;
pub use locator::*;
pub use manifest::*;
pub use options::*;
pub use probe::*;
pub use region::*;
pub use resource::*;
pub use selection::*;
pub use validate::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnresolvableCategory(String),
    UnknownRegion(String),
    UnknownAxis(String),
    UnknownLevel(String),
    LevelNotInAxis {
        axis: Option<ClassificationAxis>,
        level: ClassificationLevel,
    },
    FieldNotApplicable {
        category: Category,
        field: Field,
    },
    Io(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnresolvableCategory(token) => write!(f, "unknown category: {token:?}"),
            CatalogError::UnknownRegion(code) => write!(f, "unknown region code: {code:?}"),
            CatalogError::UnknownAxis(token) => {
                write!(f, "unknown classification axis: {token:?}")
            }
            CatalogError::UnknownLevel(token) => {
                write!(f, "unknown classification level: {token:?}")
            }
            CatalogError::LevelNotInAxis {
                axis: Some(axis),
                level,
            } => write!(f, "level {level} is not offered for axis {axis}"),
            CatalogError::LevelNotInAxis { axis: None, level } => {
                write!(f, "level {level} chosen before any axis")
            }
            CatalogError::FieldNotApplicable { category, field } => {
                write!(f, "category {category} has no {field} field")
            }
            CatalogError::Io(msg) => write!(f, "catalog io error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}
