use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Classification dimension offered by the "by classification" category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationAxis {
    #[serde(rename = "frp")]
    FireRadiativePower,
    #[serde(rename = "fire_risk")]
    FireRisk,
}

/// Ordered severity label. Which levels exist depends on the axis, see
/// [`crate::options_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassificationLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

pub(crate) const AXES: [ClassificationAxis; 2] = [
    ClassificationAxis::FireRadiativePower,
    ClassificationAxis::FireRisk,
];

pub(crate) const FRP_LEVELS: [ClassificationLevel; 5] = [
    ClassificationLevel::VeryLow,
    ClassificationLevel::Low,
    ClassificationLevel::Medium,
    ClassificationLevel::High,
    ClassificationLevel::VeryHigh,
];

pub(crate) const FIRE_RISK_LEVELS: [ClassificationLevel; 3] = [
    ClassificationLevel::Low,
    ClassificationLevel::Medium,
    ClassificationLevel::High,
];

impl ClassificationAxis {
    /// Token used both as the control value and as a path segment.
    pub fn token(self) -> &'static str {
        match self {
            ClassificationAxis::FireRadiativePower => "frp",
            ClassificationAxis::FireRisk => "fire_risk",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClassificationAxis::FireRadiativePower => "Potência do Fogo",
            ClassificationAxis::FireRisk => "Risco de Fogo",
        }
    }

    pub fn parse(token: &str) -> Result<Self, CatalogError> {
        let token = token.trim();
        AXES.into_iter()
            .find(|a| a.token() == token)
            .ok_or_else(|| CatalogError::UnknownAxis(token.to_string()))
    }

    pub fn levels(self) -> &'static [ClassificationLevel] {
        match self {
            ClassificationAxis::FireRadiativePower => &FRP_LEVELS,
            ClassificationAxis::FireRisk => &FIRE_RISK_LEVELS,
        }
    }

    pub fn contains(self, level: ClassificationLevel) -> bool {
        self.levels().contains(&level)
    }
}

impl std::fmt::Display for ClassificationAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl ClassificationLevel {
    pub fn token(self) -> &'static str {
        match self {
            ClassificationLevel::VeryLow => "VeryLow",
            ClassificationLevel::Low => "Low",
            ClassificationLevel::Medium => "Medium",
            ClassificationLevel::High => "High",
            ClassificationLevel::VeryHigh => "VeryHigh",
        }
    }

    /// Display label. Fire radiative power ("potência") takes the feminine
    /// adjective forms, fire risk ("risco") the masculine ones.
    pub fn label(self, axis: ClassificationAxis) -> &'static str {
        match (axis, self) {
            (ClassificationAxis::FireRadiativePower, ClassificationLevel::VeryLow) => "Muito Baixa",
            (ClassificationAxis::FireRadiativePower, ClassificationLevel::Low) => "Baixa",
            (ClassificationAxis::FireRadiativePower, ClassificationLevel::Medium) => "Média",
            (ClassificationAxis::FireRadiativePower, ClassificationLevel::High) => "Alta",
            (ClassificationAxis::FireRadiativePower, ClassificationLevel::VeryHigh) => "Muito Alta",
            (ClassificationAxis::FireRisk, ClassificationLevel::VeryLow) => "Muito Baixo",
            (ClassificationAxis::FireRisk, ClassificationLevel::Low) => "Baixo",
            (ClassificationAxis::FireRisk, ClassificationLevel::Medium) => "Médio",
            (ClassificationAxis::FireRisk, ClassificationLevel::High) => "Alto",
            (ClassificationAxis::FireRisk, ClassificationLevel::VeryHigh) => "Muito Alto",
        }
    }

    pub fn parse(token: &str) -> Result<Self, CatalogError> {
        let token = token.trim();
        FRP_LEVELS
            .into_iter()
            .find(|l| l.token() == token)
            .ok_or_else(|| CatalogError::UnknownLevel(token.to_string()))
    }
}

impl std::fmt::Display for ClassificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_tokens_parse_back() {
        assert_eq!(
            ClassificationAxis::parse("frp"),
            Ok(ClassificationAxis::FireRadiativePower)
        );
        assert_eq!(
            ClassificationAxis::parse("fire_risk"),
            Ok(ClassificationAxis::FireRisk)
        );
        assert_eq!(
            ClassificationAxis::parse("risco_fogo"),
            Err(CatalogError::UnknownAxis("risco_fogo".to_string()))
        );
    }

    #[test]
    fn fire_risk_has_no_extreme_levels() {
        let risk = ClassificationAxis::FireRisk;
        assert!(!risk.contains(ClassificationLevel::VeryLow));
        assert!(!risk.contains(ClassificationLevel::VeryHigh));
        assert!(risk.contains(ClassificationLevel::Medium));
    }

    #[test]
    fn labels_follow_axis_gender() {
        assert_eq!(
            ClassificationLevel::High.label(ClassificationAxis::FireRadiativePower),
            "Alta"
        );
        assert_eq!(
            ClassificationLevel::High.label(ClassificationAxis::FireRisk),
            "Alto"
        );
    }

    #[test]
    fn level_parse_rejects_display_labels() {
        assert_eq!(ClassificationLevel::parse("High"), Ok(ClassificationLevel::High));
        assert!(ClassificationLevel::parse("Alta").is_err());
        assert!(ClassificationLevel::parse("").is_err());
    }
}
