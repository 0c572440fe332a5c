//! Centralized viewport options with TOML preset support.
//!
//! Camera projection, controller tuning, scene framing, display colors and
//! keybindings are consolidated here. Options serialize to/from TOML so
//! presets can be stored next to the binary.

mod camera;
mod controls;
mod display;
mod scene_fit;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlsOptions;
pub use display::DisplayOptions;
pub use scene_fit::SceneFitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DualviewError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection parameters.
    pub camera: CameraOptions,
    /// Orbit controller tuning.
    pub controls: ControlsOptions,
    /// Scene framing behavior.
    pub scene_fit: SceneFitOptions,
    /// Viewport colors.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults and
    /// controller limits are normalized.
    pub fn load(path: &Path) -> Result<Self, DualviewError> {
        let content = std::fs::read_to_string(path)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| DualviewError::OptionsParse(e.to_string()))?;
        options.controls = options.controls.normalized();
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DualviewError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Serialize to a pretty-printed TOML string.
    pub fn to_toml(&self) -> Result<String, DualviewError> {
        toml::to_string_pretty(self)
            .map_err(|e| DualviewError::OptionsParse(e.to_string()))
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ViewportCommand;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
pan_speed = 3.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.controls.pan_speed, 3.0);
        // Everything else should be default
        assert_eq!(opts.controls.damping_factor, 0.05);
        assert_eq!(opts.camera.fovy, 70.0);
        assert_eq!(opts.camera.ortho_switch_epsilon, 0.001);
        assert_eq!(opts.scene_fit.default_radius, 1.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyF"),
            Some(ViewportCommand::FrameScene)
        );
        assert_eq!(
            opts.keybindings.lookup("Equal"),
            Some(ViewportCommand::Increment)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_override_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
KeyH = "frame_scene"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyH"),
            Some(ViewportCommand::FrameScene)
        );
        assert_eq!(opts.keybindings.lookup("KeyF"), None);
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = std::env::temp_dir()
            .join(format!("dualview-options-{}", std::process::id()));
        let path = dir.join("steep.toml");
        let mut opts = Options::default();
        opts.camera.fovy = 50.0;
        opts.controls.enable_damping = false;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["steep".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("dualview-bad-options-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, DualviewError::OptionsParse(_)));

        let missing = Options::load(&dir.join("missing.toml")).unwrap_err();
        assert!(matches!(missing, DualviewError::Io(_)));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_orders_swapped_limits() {
        let dir = std::env::temp_dir()
            .join(format!("dualview-swapped-limits-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("swapped.toml");
        std::fs::write(
            &path,
            "[controls]\nmin_distance = 10.0\nmax_distance = 1.0\n",
        )
        .unwrap();
        let opts = Options::load(&path).unwrap();
        assert_eq!(opts.controls.min_distance, 1.0);
        assert_eq!(opts.controls.max_distance, 10.0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("scene_fit"));
        assert!(props.contains_key("display"));
        assert!(!props.contains_key("keybindings"));

        // Exposed fields present, internal limits skipped
        let controls = &props["controls"]["properties"];
        assert!(controls.get("damping_factor").is_some());
        assert!(controls.get("min_distance").is_none());
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
