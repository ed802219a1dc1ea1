//! Unit definition model
//!
//! A unit ladder is an ordered list of rungs. Each rung carries a multiplier
//! relative to the rung before it; the first rung's multiplier is its
//! absolute scale.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One rung of a unit ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Unit name, matched exactly on lookup (e.g., "KB")
    #[serde(alias = "unit")]
    pub name: String,
    /// Multiplier relative to the preceding rung (absolute for the first rung)
    #[serde(alias = "unitValue", alias = "unit_value")]
    pub relative_multiplier: f64,
}

impl UnitDefinition {
    pub fn new(name: impl Into<String>, relative_multiplier: f64) -> Self {
        Self {
            name: name.into(),
            relative_multiplier,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for UnitDefinition {
    fn from((name, relative_multiplier): (S, f64)) -> Self {
        Self::new(name, relative_multiplier)
    }
}

/// An ordered unit ladder
///
/// Order is significant: the absolute scale of every rung is the product of
/// all multipliers up to and including it, so the list is never sorted.
/// Multipliers are expected to be positive and names unique; neither is
/// enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitSystem(Vec<UnitDefinition>);

impl UnitSystem {
    /// Create an empty unit system
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a unit system from a static `(name, multiplier)` table
    pub fn from_table(table: &[(&str, f64)]) -> Self {
        table
            .iter()
            .map(|&(name, multiplier)| UnitDefinition::new(name, multiplier))
            .collect()
    }

    /// Append a rung after the current largest one
    pub fn push(&mut self, unit: UnitDefinition) {
        self.0.push(unit);
    }

    /// Find the first rung with this exact name
    pub fn find(&self, name: &str) -> Option<&UnitDefinition> {
        self.0.iter().find(|u| u.name == name)
    }

    /// Unit names in ladder order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|u| u.name.as_str())
    }
}

impl Deref for UnitSystem {
    type Target = [UnitDefinition];

    fn deref(&self) -> &[UnitDefinition] {
        &self.0
    }
}

impl From<Vec<UnitDefinition>> for UnitSystem {
    fn from(units: Vec<UnitDefinition>) -> Self {
        Self(units)
    }
}

impl FromIterator<UnitDefinition> for UnitSystem {
    fn from_iter<I: IntoIterator<Item = UnitDefinition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for UnitSystem {
    type Item = UnitDefinition;
    type IntoIter = std::vec::IntoIter<UnitDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_table_preserves_order() {
        let system = UnitSystem::from_table(&[("mm", 1.0), ("cm", 10.0), ("m", 100.0)]);
        let names: Vec<&str> = system.names().collect();
        assert_eq!(names, vec!["mm", "cm", "m"]);
        assert_eq!(system[2].relative_multiplier, 100.0);
    }

    #[test]
    fn test_from_tuple() {
        let units: Vec<UnitDefinition> = vec![("W", 1.0).into(), ("kW", 1000.0).into()];
        let system = UnitSystem::from(units);
        assert_eq!(system[1], UnitDefinition::new("kW", 1000.0));
    }

    #[test]
    fn test_find_returns_first_match() {
        let system = UnitSystem::from_table(&[("a", 1.0), ("b", 2.0), ("a", 3.0)]);
        assert_eq!(system.find("a").map(|u| u.relative_multiplier), Some(1.0));
        assert!(system.find("c").is_none());
    }

    #[test]
    fn test_deserialize_legacy_field_names() {
        let json = r#"[{"unit": "Byte", "unitValue": 1}, {"unit": "KB", "unitValue": 1024}]"#;
        let system: UnitSystem = serde_json::from_str(json).unwrap();
        assert_eq!(system.len(), 2);
        assert_eq!(system[1], UnitDefinition::new("KB", 1024.0));
    }

    #[test]
    fn test_serialize_is_plain_list() {
        let system: UnitSystem = vec![UnitDefinition::new("W", 1.0)].into();
        let json = serde_json::to_string(&system).unwrap();
        assert_eq!(json, r#"[{"name":"W","relative_multiplier":1.0}]"#);
    }
}
