use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Colors used to draw the viewport.
pub struct DisplayOptions {
    /// Clear color behind the scene (linear RGB).
    #[schemars(title = "Background")]
    pub background_color: [f32; 3],
    /// Color of the fixed reference box.
    #[schemars(title = "Anchor Box Color")]
    pub anchor_color: [f32; 3],
    /// Color of the box placed by the counter.
    #[schemars(title = "Counter Box Color")]
    pub counter_color: [f32; 3],
    /// Brightness of faces turned away from the light.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub ambient: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            background_color: [0.11, 0.12, 0.14],
            anchor_color: [0.93, 0.43, 0.2],
            counter_color: [0.27, 0.55, 0.9],
            ambient: 0.35,
        }
    }
}
