//! UI colour palette, consumed by the external styling build step.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorShade {
    #[serde(rename = "DEFAULT")]
    pub default: String,
    pub light: String,
}

impl ColorShade {
    fn new(default: &str, light: &str) -> Self {
        Self {
            default: default.to_string(),
            light: light.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: ColorShade,
    pub accent: ColorShade,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: ColorShade::new("#111F51", "#1a2f7a"),
            accent: ColorShade::new("#19CEDA", "#3dd8e2"),
        }
    }
}

impl Theme {
    /// `colors` block in the styling tool's layout.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
