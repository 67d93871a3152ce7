use crate::category::{Category, Field};
use crate::options::options_for;
use crate::selection::{Selection, ValidSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// "Generate" was requested before the category's fields were complete.
    MissingField(Field),
}

impl ValidationError {
    /// Message shown to the user when generation is blocked.
    pub fn notice(&self) -> &'static str {
        match self {
            ValidationError::MissingField(Field::Region) => "Por favor, selecione um estado.",
            ValidationError::MissingField(Field::Axis) => {
                "Por favor, selecione um tipo de classificação."
            }
            ValidationError::MissingField(Field::Level) => {
                "Por favor, selecione um nível de classificação."
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "missing selection field: {field}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks that `selection` is complete for its category.
///
/// A classification selection with no axis, no level, or a level the axis
/// does not offer is reported as a missing level: in every case the level
/// selector is what the user has to fix.
pub fn validate(selection: &Selection) -> Result<ValidSelection, ValidationError> {
    let valid = match selection.category() {
        Category::Home => ValidSelection::Home,
        Category::Points => ValidSelection::Points,
        Category::Biomes => ValidSelection::Biomes,
        Category::GeneralByState => ValidSelection::GeneralByState,
        Category::ByState => {
            let region = selection
                .region()
                .ok_or(ValidationError::MissingField(Field::Region))?;
            ValidSelection::ByState { region }
        }
        Category::ByClassification => match (selection.axis(), selection.level()) {
            (Some(axis), Some(level)) if options_for(axis).contains(&level) => {
                ValidSelection::ByClassification { axis, level }
            }
            _ => return Err(ValidationError::MissingField(Field::Level)),
        },
    };
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{ClassificationAxis, ClassificationLevel};
    use crate::region::RegionCode;

    #[test]
    fn immediate_categories_validate_trivially() {
        for c in [
            Category::Home,
            Category::Points,
            Category::Biomes,
            Category::GeneralByState,
        ] {
            let v = validate(&Selection::new(c)).unwrap();
            assert_eq!(v.category(), c);
        }
    }

    #[test]
    fn by_state_without_region_is_missing_region() {
        let s = Selection::new(Category::ByState);
        assert_eq!(
            validate(&s),
            Err(ValidationError::MissingField(Field::Region))
        );
    }

    #[test]
    fn by_state_with_region_is_valid() {
        let mut s = Selection::new(Category::ByState);
        s.set_region(Some(RegionCode::SP)).unwrap();
        assert_eq!(
            validate(&s),
            Ok(ValidSelection::ByState {
                region: RegionCode::SP
            })
        );
    }

    #[test]
    fn placeholder_level_blocks_generation() {
        let s = Selection::new(Category::ByClassification);
        assert_eq!(validate(&s), Err(ValidationError::MissingField(Field::Level)));
    }

    #[test]
    fn missing_axis_is_reported_on_level() {
        let mut s = Selection::new(Category::ByClassification);
        s.set_axis(None).unwrap();
        assert_eq!(validate(&s), Err(ValidationError::MissingField(Field::Level)));
    }

    #[test]
    fn level_outside_axis_options_is_reported_on_level() {
        let s = Selection::unchecked(
            Category::ByClassification,
            Some(ClassificationAxis::FireRisk),
            Some(ClassificationLevel::VeryHigh),
        );
        assert_eq!(validate(&s), Err(ValidationError::MissingField(Field::Level)));

        let s = Selection::unchecked(
            Category::ByClassification,
            Some(ClassificationAxis::FireRisk),
            Some(ClassificationLevel::Medium),
        );
        assert_eq!(
            validate(&s),
            Ok(ValidSelection::ByClassification {
                axis: ClassificationAxis::FireRisk,
                level: ClassificationLevel::Medium,
            })
        );
    }

    #[test]
    fn complete_classification_is_valid() {
        let mut s = Selection::new(Category::ByClassification);
        s.set_level(Some(ClassificationLevel::High)).unwrap();
        assert_eq!(
            validate(&s),
            Ok(ValidSelection::ByClassification {
                axis: ClassificationAxis::FireRadiativePower,
                level: ClassificationLevel::High,
            })
        );
    }

    #[test]
    fn notices_name_the_selector_to_fix() {
        assert_eq!(
            ValidationError::MissingField(Field::Level).notice(),
            "Por favor, selecione um nível de classificação."
        );
        assert_eq!(
            ValidationError::MissingField(Field::Region).to_string(),
            "missing selection field: region"
        );
    }
}
