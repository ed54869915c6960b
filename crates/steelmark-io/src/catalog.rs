use crate::object::InterchangeObject;
use std::path::Path;
use steelmark_base::Result;
use tracing::debug;

/// Writes the objects as a JSON array, creating parent directories.
pub fn export_catalog(path: impl AsRef<Path>, objects: &[InterchangeObject]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let text = serde_json::to_string_pretty(objects)?;
    std::fs::write(path, text)?;
    debug!(path = %path.display(), count = objects.len(), "catalog written");
    Ok(())
}

pub fn import_catalog(path: impl AsRef<Path>) -> Result<Vec<InterchangeObject>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let objects: Vec<InterchangeObject> = serde_json::from_str(&text)?;
    debug!(path = %path.display(), count = objects.len(), "catalog read");
    Ok(objects)
}
