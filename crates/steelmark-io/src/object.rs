use serde::{Deserialize, Serialize};
use steelmark_base::{Error, Guid, Result};
use steelmark_material::{MaterialRecord, SteelGrade};

/// A material as it travels through the interchange format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterchangeObject {
    #[serde(flatten)]
    pub record: MaterialRecord,
    #[serde(
        rename = "applicationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub application_id: Option<Guid>,
}

impl InterchangeObject {
    pub fn new(record: MaterialRecord) -> Self {
        Self {
            record,
            application_id: None,
        }
    }

    pub fn with_application_id(mut self, application_id: Guid) -> Self {
        self.application_id = Some(application_id);
        self
    }
}

impl From<SteelGrade> for InterchangeObject {
    fn from(grade: SteelGrade) -> Self {
        Self::new(grade.record().clone())
    }
}

pub fn to_json(object: &InterchangeObject) -> Result<String> {
    Ok(serde_json::to_string_pretty(object)?)
}

/// Decodes one object. Tags outside the built-in catalogue are accepted.
pub fn from_json(text: &str) -> Result<InterchangeObject> {
    Ok(serde_json::from_str(text)?)
}

pub fn resolve_grade(record: &MaterialRecord) -> Result<SteelGrade> {
    SteelGrade::from_type_identifier(record.type_identifier())
        .ok_or_else(|| Error::UnknownMaterial(record.type_identifier().to_string()))
}
