use crate::record::{MaterialRecord, STEEL_S235, STEEL_S355};
use crate::traits::{HasDensity, HasStrengthGrade, Material};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use steelmark_base::Error;

// Indexed by `SteelGrade as usize`.
static CATALOG: [MaterialRecord; 2] = [STEEL_S355, STEEL_S235];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    #[serde(rename = "SteelS355")]
    S355,
    #[serde(rename = "SteelS235")]
    S235,
}

impl SteelGrade {
    pub const ALL: [SteelGrade; 2] = [SteelGrade::S355, SteelGrade::S235];

    pub fn record(self) -> &'static MaterialRecord {
        &CATALOG[self as usize]
    }

    pub fn type_identifier(self) -> &'static str {
        match self {
            Self::S355 => "SteelS355",
            Self::S235 => "SteelS235",
        }
    }

    pub fn from_type_identifier(type_identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.type_identifier() == type_identifier)
    }
}

impl FromStr for SteelGrade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_type_identifier(s).ok_or_else(|| Error::UnknownMaterial(s.to_string()))
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_identifier())
    }
}

impl HasDensity for SteelGrade {
    fn density(&self) -> f64 {
        self.record().density()
    }
}

impl HasStrengthGrade for SteelGrade {
    fn strength_grade(&self) -> &str {
        self.record().strength_grade()
    }
}

impl Material for SteelGrade {
    fn type_identifier(&self) -> &str {
        SteelGrade::type_identifier(*self)
    }
}

/// Every built-in record, in `SteelGrade::ALL` order.
pub fn catalog() -> &'static [MaterialRecord] {
    &CATALOG
}

pub fn lookup(type_identifier: &str) -> Option<&'static MaterialRecord> {
    SteelGrade::from_type_identifier(type_identifier).map(SteelGrade::record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_enum() {
        for grade in SteelGrade::ALL {
            assert_eq!(grade.record().type_identifier(), grade.type_identifier());
        }
    }

    #[test]
    fn parse_is_exact() {
        assert!("steels355".parse::<SteelGrade>().is_err());
        assert!(" SteelS355".parse::<SteelGrade>().is_err());
    }
}
