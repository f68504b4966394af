//! Cabin classes
//!
//! Every aircraft carries kits for four cabin classes. The set is fixed:
//! First (F), Business (J), Premium Economy (W) and Economy (Y).
//!
//! `ClassMap<T>` holds exactly one value per class, so code that has
//! passed validation never has to handle a missing class.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cabin class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    /// First class
    F,
    /// Business
    J,
    /// Premium economy
    W,
    /// Economy
    Y,
}

impl CabinClass {
    /// All classes in canonical order (F, J, W, Y)
    pub const ALL: [CabinClass; 4] = [CabinClass::F, CabinClass::J, CabinClass::W, CabinClass::Y];

    /// Single-letter code used as the wire key
    pub fn code(self) -> &'static str {
        match self {
            CabinClass::F => "F",
            CabinClass::J => "J",
            CabinClass::W => "W",
            CabinClass::Y => "Y",
        }
    }

    /// Human-readable class name, as used in penalty categories
    pub fn label(self) -> &'static str {
        match self {
            CabinClass::F => "First",
            CabinClass::J => "Business",
            CabinClass::W => "Premium Economy",
            CabinClass::Y => "Economy",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CabinClass {
    type Err = String;

    /// Parses a class code, case-insensitively ("f", "J", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "F" => Ok(CabinClass::F),
            "J" => Ok(CabinClass::J),
            "W" => Ok(CabinClass::W),
            "Y" => Ok(CabinClass::Y),
            other => Err(format!("unknown cabin class '{}'", other)),
        }
    }
}

/// One value per cabin class
///
/// # Example
/// ```
/// use kit_simulator_core_rs::models::{CabinClass, ClassMap};
///
/// let biases = ClassMap::new(1.2, 1.1, 0.95, 0.8);
/// assert_eq!(biases[CabinClass::J], 1.1);
/// assert_eq!(biases.iter().count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMap<T> {
    #[serde(rename = "F")]
    pub f: T,
    #[serde(rename = "J")]
    pub j: T,
    #[serde(rename = "W")]
    pub w: T,
    #[serde(rename = "Y")]
    pub y: T,
}

impl<T> ClassMap<T> {
    pub fn new(f: T, j: T, w: T, y: T) -> Self {
        Self { f, j, w, y }
    }

    /// Build a map by evaluating `value` for each class
    pub fn from_fn(mut value: impl FnMut(CabinClass) -> T) -> Self {
        Self {
            f: value(CabinClass::F),
            j: value(CabinClass::J),
            w: value(CabinClass::W),
            y: value(CabinClass::Y),
        }
    }

    pub fn get(&self, class: CabinClass) -> &T {
        match class {
            CabinClass::F => &self.f,
            CabinClass::J => &self.j,
            CabinClass::W => &self.w,
            CabinClass::Y => &self.y,
        }
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (CabinClass, &T)> {
        CabinClass::ALL.into_iter().map(move |class| (class, self.get(class)))
    }
}

impl<T> std::ops::Index<CabinClass> for ClassMap<T> {
    type Output = T;

    fn index(&self, class: CabinClass) -> &T {
        self.get(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("y".parse::<CabinClass>(), Ok(CabinClass::Y));
        assert_eq!(" J ".parse::<CabinClass>(), Ok(CabinClass::J));
        assert!("X".parse::<CabinClass>().is_err());
    }

    #[test]
    fn test_class_map_serializes_with_codes() {
        let map = ClassMap::new(true, false, true, false);
        let json = serde_json::to_value(map).unwrap();
        assert_eq!(json, serde_json::json!({"F": true, "J": false, "W": true, "Y": false}));
    }

    #[test]
    fn test_from_fn_visits_every_class() {
        let map = ClassMap::from_fn(|class| class.code().to_string());
        let codes: Vec<_> = map.iter().map(|(_, code)| code.as_str()).collect();
        assert_eq!(codes, vec!["F", "J", "W", "Y"]);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = CabinClass::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["First", "Business", "Premium Economy", "Economy"]);
    }
}
