//! Compatibility check for exported-document headers

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::EXPORT_COMPAT_FLOOR;
use crate::version::{is_compatible, normalize_version, version_ge};

/// Header of an exported document. Only the version field matters here;
/// everything else belongs to the import/export serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportManifest {
    pub version: Option<String>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("manifest has no version field")]
    MissingVersion,

    #[error("unrecognizable version: {0}")]
    UnrecognizedVersion(String),
}

/// Outcome of checking an exported document against the running version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Compatibility {
    Compatible { exported: String, running: String },
    Incompatible { exported: String, running: String },
}

/// Decide whether the document described by `manifest_json` may be imported
/// into a system running `running_version`.
///
/// The exported version must be recognizable, no newer than the running
/// version, and no older than [`EXPORT_COMPAT_FLOOR`]. Versions in the
/// result are reported in their normalized `major.minor.patch` form.
pub fn check_import(
    manifest_json: &str,
    running_version: &str,
) -> Result<Compatibility, ManifestError> {
    let manifest: ExportManifest = serde_json::from_str(manifest_json)?;
    let raw = manifest.version.ok_or(ManifestError::MissingVersion)?;

    let exported = normalize_version(&raw)
        .ok_or_else(|| ManifestError::UnrecognizedVersion(raw.clone()))?;
    let running = normalize_version(running_version)
        .ok_or_else(|| ManifestError::UnrecognizedVersion(running_version.to_string()))?;

    debug!(%exported, %running, "checking export compatibility");

    let compatible = is_compatible(&running, &exported) && version_ge(&exported, EXPORT_COMPAT_FLOOR);

    if compatible {
        Ok(Compatibility::Compatible { exported, running })
    } else {
        Ok(Compatibility::Incompatible { exported, running })
    }
}
