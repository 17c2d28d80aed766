//! Property-name → unit-label catalog.
//!
//! The unit label is part of the simulated-data marker string, so a wrong or
//! defaulted unit silently breaks block matching. Lookups therefore fail loud
//! on unknown names, and the catalog is an immutable value injected into the
//! session rather than process-wide state.

use crate::domain::{VisError, VisResult};
use std::fs;
use std::path::Path;

/// Liquid bulk properties reported by the optimizer, with the unit labels
/// exactly as they appear in the log. Dielectric constant is dimensionless
/// and carries an empty label.
const LIQUID_PROPERTY_UNITS: [(&str, &str); 6] = [
    ("Density", "(kg m^-3)"),
    ("Enthalpy of Vaporization", "(kJ mol^-1)"),
    ("Thermal Expansion Coefficient", "(10^-4 K^-1)"),
    ("Isothermal Compressibility", "(10^-6 bar^-1)"),
    ("Isobaric Heat Capacity", "(cal mol^-1 K^-1)"),
    ("Dielectric Constant", ""),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCatalog {
    units: Vec<(String, String)>,
}

impl PropertyCatalog {
    /// Catalog of the standard liquid-property tables.
    pub fn forcebalance_liquid() -> Self {
        Self::from_pairs(
            LIQUID_PROPERTY_UNITS
                .iter()
                .map(|(name, unit)| (name.to_string(), unit.to_string())),
        )
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            units: pairs.into_iter().collect(),
        }
    }

    /// Unit label for `name`, or `UnknownProperty` — never a silent default.
    pub fn unit_for(&self, name: &str) -> VisResult<&str> {
        self.units
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, unit)| unit.as_str())
            .ok_or_else(|| VisError::UnknownProperty {
                name: name.to_string(),
            })
    }

    /// Registered names in catalog order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|(name, _)| name.as_str())
    }
}

/// Reads a property list file: one display name per line, surrounding
/// whitespace stripped, blank lines skipped, order preserved. Duplicates are
/// allowed (and meaningless) per the upstream convention.
pub fn load_property_list(path: &Path) -> VisResult<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| VisError::io(path, source))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
