use crate::traits::{HasDensity, HasStrengthGrade, Material};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use steelmark_base::DensityUnit;

pub const STEEL_S355: MaterialRecord = MaterialRecord::from_static("SteelS355", 7800.0, "S355");
pub const STEEL_S235: MaterialRecord = MaterialRecord::from_static("SteelS235", 7800.0, "S235");

/// Property set of one material variant.
///
/// Field names on the wire are fixed by the interchange format and must not
/// change: `speckle_type`, `density`, `strength`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(rename = "speckle_type")]
    type_identifier: Cow<'static, str>,
    #[serde(serialize_with = "serialize_finite")]
    density: f64,
    #[serde(rename = "strength")]
    strength_grade: Cow<'static, str>,
}

impl MaterialRecord {
    /// Values are stored as given; density is not range checked.
    pub fn new(
        type_identifier: impl Into<Cow<'static, str>>,
        density: f64,
        strength_grade: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            type_identifier: type_identifier.into(),
            density,
            strength_grade: strength_grade.into(),
        }
    }

    pub const fn from_static(
        type_identifier: &'static str,
        density: f64,
        strength_grade: &'static str,
    ) -> Self {
        Self {
            type_identifier: Cow::Borrowed(type_identifier),
            density,
            strength_grade: Cow::Borrowed(strength_grade),
        }
    }

    pub fn type_identifier(&self) -> &str {
        &self.type_identifier
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn strength_grade(&self) -> &str {
        &self.strength_grade
    }
}

// JSON has no encoding for NaN or infinity; serde_json would write `null`.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(serde::ser::Error::custom("non-finite density"));
    }
    serializer.serialize_f64(*value)
}

impl HasDensity for MaterialRecord {
    fn density(&self) -> f64 {
        self.density
    }
}

impl HasStrengthGrade for MaterialRecord {
    fn strength_grade(&self) -> &str {
        &self.strength_grade
    }
}

impl Material for MaterialRecord {
    fn type_identifier(&self) -> &str {
        &self.type_identifier
    }
}

impl std::fmt::Display for MaterialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} {})",
            self.type_identifier,
            self.strength_grade,
            self.density,
            DensityUnit::KilogramPerCubicMeter.symbol()
        )
    }
}
