use serde::{Deserialize, Serialize};

use crate::CatalogError;
use crate::category::{Category, Field};
use crate::classification::{ClassificationAxis, ClassificationLevel};
use crate::options::axes;
use crate::region::RegionCode;

/// Working state while the user refines a category.
///
/// Fields other than `category` only carry meaning for the category that
/// declares them; setters refuse the others so stale values cannot leak from a
/// previous category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct Selection {
    category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<RegionCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    axis: Option<ClassificationAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<ClassificationLevel>,
}

impl Selection {
    /// Fresh selection for `category`, as shown right after it is chosen.
    pub fn new(category: Category) -> Self {
        let axis = match category {
            Category::ByClassification => axes().first().copied(),
            _ => None,
        };
        Self {
            category,
            region: None,
            axis,
            level: None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn region(&self) -> Option<RegionCode> {
        self.region
    }

    pub fn axis(&self) -> Option<ClassificationAxis> {
        self.axis
    }

    pub fn level(&self) -> Option<ClassificationLevel> {
        self.level
    }

    pub fn set_region(&mut self, region: Option<RegionCode>) -> Result<(), CatalogError> {
        self.ensure_declared(Field::Region)?;
        self.region = region;
        Ok(())
    }

    /// Sets the axis. Any previously chosen level is dropped, even when the
    /// new axis happens to offer the same level.
    ///
    /// Returns `true` if the axis changed.
    pub fn set_axis(&mut self, axis: Option<ClassificationAxis>) -> Result<bool, CatalogError> {
        self.ensure_declared(Field::Axis)?;
        let changed = self.axis != axis;
        self.axis = axis;
        self.level = None;
        Ok(changed)
    }

    pub fn set_level(&mut self, level: Option<ClassificationLevel>) -> Result<(), CatalogError> {
        self.ensure_declared(Field::Level)?;
        if let Some(level) = level {
            match self.axis {
                Some(axis) if axis.contains(level) => {}
                axis => return Err(CatalogError::LevelNotInAxis { axis, level }),
            }
        }
        self.level = level;
        Ok(())
    }

    fn ensure_declared(&self, field: Field) -> Result<(), CatalogError> {
        if self.category.declares(field) {
            Ok(())
        } else {
            Err(CatalogError::FieldNotApplicable {
                category: self.category,
                field,
            })
        }
    }
}

/// Wire form of [`Selection`]; converted through the setters so decoded
/// selections hold the same guarantees as edited ones.
#[derive(Deserialize)]
struct RawSelection {
    category: Category,
    #[serde(default)]
    region: Option<RegionCode>,
    #[serde(default)]
    axis: Option<ClassificationAxis>,
    #[serde(default)]
    level: Option<ClassificationLevel>,
}

impl TryFrom<RawSelection> for Selection {
    type Error = CatalogError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        let mut selection = Selection::new(raw.category);
        if raw.region.is_some() || raw.category.declares(Field::Region) {
            selection.set_region(raw.region)?;
        }
        if raw.axis.is_some() || raw.category.declares(Field::Axis) {
            selection.set_axis(raw.axis)?;
        }
        if raw.level.is_some() || raw.category.declares(Field::Level) {
            selection.set_level(raw.level)?;
        }
        Ok(selection)
    }
}

/// Selection that passed [`crate::validate`]. Each variant carries exactly the
/// fields its locator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ValidSelection {
    Home,
    Points,
    Biomes,
    #[serde(rename = "states_overview")]
    GeneralByState,
    ByState {
        region: RegionCode,
    },
    ByClassification {
        axis: ClassificationAxis,
        level: ClassificationLevel,
    },
}

impl ValidSelection {
    pub fn category(&self) -> Category {
        match self {
            ValidSelection::Home => Category::Home,
            ValidSelection::Points => Category::Points,
            ValidSelection::Biomes => Category::Biomes,
            ValidSelection::GeneralByState => Category::GeneralByState,
            ValidSelection::ByState { .. } => Category::ByState,
            ValidSelection::ByClassification { .. } => Category::ByClassification,
        }
    }
}

#[cfg(test)]
impl Selection {
    /// Builds a selection without the setter checks, for exercising
    /// validation against inconsistent state.
    pub(crate) fn unchecked(
        category: Category,
        axis: Option<ClassificationAxis>,
        level: Option<ClassificationLevel>,
    ) -> Self {
        Self {
            category,
            region: None,
            axis,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_classification_starts_on_first_axis_without_level() {
        let s = Selection::new(Category::ByClassification);
        assert_eq!(s.axis(), Some(ClassificationAxis::FireRadiativePower));
        assert_eq!(s.level(), None);
        assert_eq!(s.region(), None);
    }

    #[test]
    fn changing_axis_resets_level() {
        let mut s = Selection::new(Category::ByClassification);
        s.set_level(Some(ClassificationLevel::Medium)).unwrap();
        assert!(s.set_axis(Some(ClassificationAxis::FireRisk)).unwrap());
        assert_eq!(s.level(), None);
    }

    #[test]
    fn reselecting_same_axis_still_resets_level() {
        let mut s = Selection::new(Category::ByClassification);
        s.set_level(Some(ClassificationLevel::Low)).unwrap();
        assert!(!s.set_axis(Some(ClassificationAxis::FireRadiativePower)).unwrap());
        assert_eq!(s.level(), None);
    }

    #[test]
    fn level_outside_axis_is_rejected() {
        let mut s = Selection::new(Category::ByClassification);
        s.set_axis(Some(ClassificationAxis::FireRisk)).unwrap();
        let err = s.set_level(Some(ClassificationLevel::VeryHigh)).unwrap_err();
        assert_eq!(
            err,
            CatalogError::LevelNotInAxis {
                axis: Some(ClassificationAxis::FireRisk),
                level: ClassificationLevel::VeryHigh,
            }
        );
        assert_eq!(s.level(), None);
    }

    #[test]
    fn undeclared_fields_are_refused() {
        let mut s = Selection::new(Category::Points);
        assert_eq!(
            s.set_region(Some(RegionCode::SP)),
            Err(CatalogError::FieldNotApplicable {
                category: Category::Points,
                field: Field::Region,
            })
        );
        let mut s = Selection::new(Category::ByState);
        assert!(s.set_axis(Some(ClassificationAxis::FireRisk)).is_err());
        assert_eq!(s.axis(), None);
    }

    #[test]
    fn valid_selection_serializes_with_category_tag() {
        let v = ValidSelection::ByState {
            region: RegionCode::SP,
        };
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"category":"by_state","region":"SP"}"#);
        assert_eq!(v.category(), Category::ByState);
    }

    #[test]
    fn decoding_refuses_undeclared_fields() {
        let err = serde_json::from_str::<Selection>(r#"{"category":"points","region":"SP"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("has no region field"), "{err}");
    }

    #[test]
    fn decoding_refuses_level_outside_axis() {
        let decoded = serde_json::from_str::<Selection>(
            r#"{"category":"by_classification","axis":"fire_risk","level":"VeryHigh"}"#,
        );
        assert!(decoded.is_err());
    }

    #[test]
    fn decoding_goes_through_setters() {
        let s: Selection = serde_json::from_str(
            r#"{"category":"by_classification","axis":"fire_risk","level":"High"}"#,
        )
        .unwrap();
        assert_eq!(s.axis(), Some(ClassificationAxis::FireRisk));
        assert_eq!(s.level(), Some(ClassificationLevel::High));

        let mut edited = Selection::new(Category::ByState);
        edited.set_region(Some(RegionCode::SP)).unwrap();
        let json = serde_json::to_string(&edited).unwrap();
        assert_eq!(json, r#"{"category":"by_state","region":"SP"}"#);
        assert_eq!(serde_json::from_str::<Selection>(&json).unwrap(), edited);
    }
}
