//! Host configuration
//!
//! Stored as TOML, by default in `~/.config/keybridge/config.toml`. Every
//! field has a default, so a partial (or missing) file is fine; command
//! line flags override what the file says.

use keybridge_matrix::{ChipModel, TargetLayout, Timing};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Built-in target computers
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Spectrum,
    Zx80,
}

impl Target {
    pub fn layout(self) -> &'static TargetLayout {
        match self {
            Target::Spectrum => &keybridge_matrix::targets::SPECTRUM,
            Target::Zx80 => &keybridge_matrix::targets::ZX80,
        }
    }
}

/// Switch chip fitted to the adapter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Chip {
    #[default]
    Mt8808,
    Mt8812,
    Mt8816,
}

impl From<Chip> for ChipModel {
    fn from(chip: Chip) -> Self {
        match chip {
            Chip::Mt8808 => ChipModel::Mt8808,
            Chip::Mt8812 => ChipModel::Mt8812,
            Chip::Mt8816 => ChipModel::Mt8816,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Serial device the adapter is attached to
    pub port: String,
    pub baud: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: "/dev/ttyUSB0".to_string(),
            baud: 115_200,
        }
    }
}

/// Key timing in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub macro_press_ms: u32,
    pub macro_release_ms: u32,
    pub type_hold_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Timing::default().into()
    }
}

impl From<Timing> for TimingConfig {
    fn from(t: Timing) -> Self {
        Self {
            macro_press_ms: t.macro_press_ms,
            macro_release_ms: t.macro_release_ms,
            type_hold_ms: t.type_hold_ms,
        }
    }
}

impl From<TimingConfig> for Timing {
    fn from(t: TimingConfig) -> Self {
        Self {
            macro_press_ms: t.macro_press_ms,
            macro_release_ms: t.macro_release_ms,
            type_hold_ms: t.type_hold_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Keyboard event device; the first keyboard found when unset
    pub device: Option<PathBuf>,
    /// Grab the keyboard exclusively while capturing
    pub grab: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub target: Target,
    pub chip: Chip,
    /// Whether the adapter has a joystick port
    pub joystick: bool,
    pub serial: SerialConfig,
    pub timing: TimingConfig,
    pub capture: CaptureConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            target: Target::default(),
            chip: Chip::default(),
            joystick: true,
            serial: SerialConfig::default(),
            timing: TimingConfig::default(),
            capture: CaptureConfig::default(),
        }
    }
}

impl BridgeConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keybridge")
            .join("config.toml")
    }

    /// Load config from a file, or return default if not found
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: BridgeConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("keybridge-test-does-not-exist.toml");
        let config = BridgeConfig::load(&path).unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert_eq!(config.serial.baud, 115_200);
        assert_eq!(config.timing.macro_release_ms, 200);
    }

    #[test]
    fn test_partial_file() {
        let config: BridgeConfig = toml::from_str(
            r#"
            target = "zx80"
            chip = "mt8816"

            [serial]
            port = "/dev/ttyACM1"
            "#,
        )
        .unwrap();
        assert_eq!(config.target, Target::Zx80);
        assert_eq!(ChipModel::from(config.chip), ChipModel::Mt8816);
        assert_eq!(config.serial.port, "/dev/ttyACM1");
        assert_eq!(config.serial.baud, 115_200);
        assert!(config.joystick);
        assert_eq!(config.target.layout().name, "zx80");
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("keybridge-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = BridgeConfig::default();
        config.capture.grab = true;
        config.capture.device = Some(PathBuf::from("/dev/input/event3"));
        config.timing.type_hold_ms = 50;
        config.save(&path).unwrap();

        let loaded = BridgeConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(Timing::from(loaded.timing).type_hold_ms, 50);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unknown_target_rejected() {
        assert!(toml::from_str::<BridgeConfig>("target = \"c64\"").is_err());
    }
}
