use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Framing", inline)]
#[serde(default)]
/// How "frame scene" requests behave.
pub struct SceneFitOptions {
    /// Radius framed when the scene is empty or has no extent.
    #[schemars(title = "Empty Scene Radius", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub default_radius: f32,
    /// Ease into the framed view instead of jumping.
    #[schemars(title = "Animate")]
    pub animate: bool,
}

impl Default for SceneFitOptions {
    fn default() -> Self {
        Self {
            default_radius: 1.0,
            animate: true,
        }
    }
}
