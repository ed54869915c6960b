use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifier an authoring application attaches to an exchanged object.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum DensityUnit {
    #[default]
    KilogramPerCubicMeter,
}

impl DensityUnit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::KilogramPerCubicMeter => "kg/m3",
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown material type: {0}")]
    UnknownMaterial(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
