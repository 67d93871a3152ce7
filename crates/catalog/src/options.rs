//! Option sets for the dependent selectors.
//!
//! Everything here is static and side-effect free; the controller decides when
//! a selector gets rebuilt.

use crate::classification::{AXES, ClassificationAxis, ClassificationLevel};
use crate::region::{REGIONS, RegionCode};

/// Levels selectable for `axis`, in display order. Never empty.
pub fn options_for(axis: ClassificationAxis) -> &'static [ClassificationLevel] {
    axis.levels()
}

/// All regions in the canonical listing order.
pub fn regions() -> &'static [RegionCode] {
    &REGIONS
}

/// Classification axes; the first one is preselected.
pub fn axes() -> &'static [ClassificationAxis] {
    &AXES
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn regions_are_27_unique_in_canonical_order() {
        let codes: Vec<&str> = regions().iter().map(|r| r.code()).collect();
        assert_eq!(
            codes,
            vec![
                "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA",
                "PB", "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
            ]
        );
        let unique: HashSet<&str> = codes.iter().copied().collect();
        assert_eq!(unique.len(), 27);
    }

    #[test]
    fn frp_offers_five_levels() {
        assert_eq!(
            options_for(ClassificationAxis::FireRadiativePower),
            &[
                ClassificationLevel::VeryLow,
                ClassificationLevel::Low,
                ClassificationLevel::Medium,
                ClassificationLevel::High,
                ClassificationLevel::VeryHigh,
            ]
        );
    }

    #[test]
    fn fire_risk_offers_low_medium_high() {
        assert_eq!(
            options_for(ClassificationAxis::FireRisk),
            &[
                ClassificationLevel::Low,
                ClassificationLevel::Medium,
                ClassificationLevel::High,
            ]
        );
    }

    #[test]
    fn every_axis_has_at_least_three_levels() {
        for axis in axes() {
            assert!(options_for(*axis).len() >= 3, "{axis} has too few levels");
        }
        assert_eq!(axes()[0], ClassificationAxis::FireRadiativePower);
    }
}
