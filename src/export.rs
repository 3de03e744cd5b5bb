//! The palette export document.
//!
//! The externally visible artifact of the engine: a JSON document carrying
//! the currently derived harmonies followed by any saved palettes, the base
//! colour's hex, and an RFC 3339 timestamp.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::{HuedeckError, Result};
use crate::types::Harmony;

/// Exported palette collection.
///
/// Wire field names are fixed: `palettes`, `baseColor`, `exportedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteExport {
    pub palettes: Vec<Harmony>,
    pub base_color: String,
    pub exported_at: String,
}

impl PaletteExport {
    /// Assemble an export stamped with the current UTC time. Current
    /// harmonies come first, saved palettes after, preserving both orders.
    pub fn assemble(current: Vec<Harmony>, saved: &[Harmony], base_color: String) -> Result<Self> {
        let mut palettes = current;
        palettes.extend(saved.iter().cloned());

        let exported_at =
            OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .map_err(|e| HuedeckError::Export {
                    message: format!("Cannot format timestamp: {}", e),
                    help: None,
                })?;

        Ok(Self {
            palettes,
            base_color,
            exported_at,
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| HuedeckError::Export {
            message: format!("Cannot serialize export: {}", e),
            help: None,
        })
    }

    /// Write the JSON document to a file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| HuedeckError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
