//! Component catalog loading and boundary validation
//!
//! The catalog is produced elsewhere; this module only checks that what
//! arrives has the right shape before any engine touches it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{ArchError, Result};
use crate::schema::Component;

/// Returns true for `./x`, `../x`, `.` and `..`
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

/// Parse a catalog from a JSON array of component records
pub fn parse_catalog(json: &str) -> Result<Vec<Component>> {
    let catalog: Vec<Component> =
        serde_json::from_str(json).map_err(|e| ArchError::InvalidCatalog {
            message: e.to_string(),
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Read and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<Component>> {
    if !path.exists() {
        return Err(ArchError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let json = fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// Structural checks that serde cannot express.
///
/// Non-relative dependency specifiers are tolerated with a warning; the
/// coupling and cycle engines ignore them.
pub fn validate_catalog(catalog: &[Component]) -> Result<()> {
    let mut seen = HashSet::with_capacity(catalog.len());

    for (index, component) in catalog.iter().enumerate() {
        if component.name.trim().is_empty() {
            return Err(ArchError::InvalidCatalog {
                message: format!("component #{} has an empty name", index),
            });
        }
        if component.path.trim().is_empty() {
            return Err(ArchError::InvalidCatalog {
                message: format!("component '{}' has an empty path", component.name),
            });
        }
        if !seen.insert(component.path.as_str()) {
            return Err(ArchError::InvalidCatalog {
                message: format!("duplicate path '{}'", component.path),
            });
        }
        for dep in component
            .dependencies
            .iter()
            .filter(|d| !is_relative_specifier(d))
        {
            warn!(path = %component.path, dependency = %dep, "ignoring non-relative dependency");
        }
    }

    Ok(())
}
