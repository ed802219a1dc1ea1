//! Absolute scale resolution
//!
//! Turns a ladder of relative multipliers into absolute scales by running
//! product: `[(U0, 1), (U1, m1), (U2, m2)]` resolves to `[1, m1, m1 * m2]`.

use crate::models::UnitDefinition;

/// A unit name paired with its scale in base units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedUnit<'a> {
    pub name: &'a str,
    pub scale: f64,
}

/// Resolve every rung of a ladder to its absolute scale, in ladder order
///
/// Non-positive multipliers are not rejected; the product is returned as-is.
pub fn resolve(units: &[UnitDefinition]) -> Vec<ResolvedUnit<'_>> {
    let mut acc = 1.0;
    units
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            acc = if i == 0 {
                unit.relative_multiplier
            } else {
                acc * unit.relative_multiplier
            };
            ResolvedUnit {
                name: &unit.name,
                scale: acc,
            }
        })
        .collect()
}

/// Absolute scale of the first rung named `name`
pub fn scale_of(resolved: &[ResolvedUnit<'_>], name: &str) -> Option<f64> {
    resolved.iter().find(|r| r.name == name).map(|r| r.scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitSystem;

    #[test]
    fn test_chained_ladder() {
        let units = UnitSystem::from_table(&[("U0", 1.0), ("U1", 8.0), ("U2", 3.0)]);
        let scales: Vec<f64> = resolve(&units).iter().map(|r| r.scale).collect();
        assert_eq!(scales, vec![1.0, 8.0, 24.0]);
    }

    #[test]
    fn test_first_multiplier_is_absolute() {
        let units = UnitSystem::from_table(&[("cm", 10.0), ("m", 100.0)]);
        let resolved = resolve(&units);
        assert_eq!(resolved[0], ResolvedUnit { name: "cm", scale: 10.0 });
        assert_eq!(resolved[1], ResolvedUnit { name: "m", scale: 1000.0 });
    }

    #[test]
    fn test_single_and_empty() {
        let single = UnitSystem::from_table(&[("only", 5.0)]);
        assert_eq!(resolve(&single).len(), 1);
        assert_eq!(resolve(&single)[0].scale, 5.0);
        assert!(resolve(&[]).is_empty());
    }

    #[test]
    fn test_order_is_not_sorted() {
        let units = UnitSystem::from_table(&[("big", 1000.0), ("small", 0.001)]);
        let resolved = resolve(&units);
        assert_eq!(resolved[0].name, "big");
        assert!((resolved[1].scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_multiplier_does_not_panic() {
        let units = UnitSystem::from_table(&[("a", 1.0), ("b", 0.0), ("c", -2.0)]);
        let scales: Vec<f64> = resolve(&units).iter().map(|r| r.scale).collect();
        assert_eq!(scales, vec![1.0, 0.0, -0.0]);
    }

    #[test]
    fn test_scale_of_duplicate_uses_first() {
        let units = UnitSystem::from_table(&[("x", 2.0), ("x", 5.0)]);
        let resolved = resolve(&units);
        assert_eq!(scale_of(&resolved, "x"), Some(2.0));
        assert_eq!(scale_of(&resolved, "y"), None);
    }
}
