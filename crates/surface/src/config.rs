use serde::{Deserialize, Serialize};

use crate::SurfaceError;

/// Where the page shell's regions live and where documents are served from.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Prefix joined in front of every locator path.
    pub base_path: String,
    pub frame_height_px: u32,
    pub filter_region_id: String,
    pub display_region_id: String,
    pub frame_id: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            base_path: "./files/plots".to_string(),
            frame_height_px: 550,
            filter_region_id: "filter-container".to_string(),
            display_region_id: "map-container".to_string(),
            frame_id: "map-frame".to_string(),
        }
    }
}

impl SurfaceConfig {
    /// Parses a JSON config; blank input means defaults.
    pub fn from_json(raw: &str) -> Result<Self, SurfaceError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| SurfaceError::Config(e.to_string()))
    }

    pub fn document_src(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        if base.is_empty() {
            path.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    pub(crate) fn frame_style(&self) -> String {
        format!(
            "width: 100%; height: {}px; border: none;",
            self.frame_height_px
        )
    }
}
