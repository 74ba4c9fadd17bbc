//! Generator configuration
//!
//! Every tunable knob of the walk, with the reference defaults. Configs can
//! be loaded from and exported to RON files so levels can be tuned without a
//! rebuild.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::world::generation::random::clipped_gaussian;

/// Where the binary looks for a config when none is given
pub const DEFAULT_CONFIG_PATH: &str = "assets/data/generator.ron";

/// Inclusive integer range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: i32,
    pub max: i32,
}

impl SizeRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `value`
    pub const fn exactly(value: i32) -> Self {
        Self::new(value, value)
    }

    /// Draw a value uniformly from `min..=max`
    pub fn sample(&self, rng: &mut impl Rng) -> i32 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, name: &'static str, floor: i32) -> Result<(), ConfigError> {
        if self.min > self.max || self.min < floor {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Clipped Gaussian for the number of steps between turns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnDistance {
    pub mean: f64,
    pub std_dev: f64,
    pub min: i32,
    /// No ceiling when `None`
    pub max: Option<i32>,
}

impl TurnDistance {
    pub fn sample(&self, rng: &mut impl Rng) -> i32 {
        clipped_gaussian(rng, self.mean, self.std_dev, self.min, self.max.unwrap_or(i32::MAX))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        const NAME: &str = "turn_distance";

        if !self.mean.is_finite() {
            return Err(ConfigError::InvalidDistribution {
                name: NAME,
                reason: format!("mean {} is not finite", self.mean),
            });
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(ConfigError::InvalidDistribution {
                name: NAME,
                reason: format!("standard deviation {} must be finite and non-negative", self.std_dev),
            });
        }
        // A zero distance after a turn would never be hit again
        if self.min < 1 {
            return Err(ConfigError::InvalidDistribution {
                name: NAME,
                reason: format!("floor {} must be at least 1", self.min),
            });
        }
        if let Some(max) = self.max {
            if max < self.min {
                return Err(ConfigError::InvalidRange { name: NAME, min: self.min, max });
            }
        }
        Ok(())
    }
}

impl Default for TurnDistance {
    fn default() -> Self {
        Self {
            mean: 6.0,
            std_dev: 1.0,
            min: 2,
            max: None,
        }
    }
}

/// Shape of a carved room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSpec {
    pub width: SizeRange,
    pub height: SizeRange,
    /// Percent chance that each corner is left uncarved
    pub corner_removal_chance: u32,
}

impl Default for RoomSpec {
    fn default() -> Self {
        Self {
            width: SizeRange::new(3, 5),
            height: SizeRange::new(3, 5),
            corner_removal_chance: 30,
        }
    }
}

/// All parameters of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of steps on the main path
    pub main_path_length: SizeRange,
    /// Steps between mandatory turns
    pub turn_distance: TurnDistance,
    /// Percent chance per step of a one-cell sideways jitter
    pub shift_chance: u32,
    /// Percent chance of a branch at each turn
    pub branch_chance: u32,
    /// Percent chance of a room at each turn
    pub turn_room_chance: u32,
    pub branch_length: SizeRange,
    pub room: RoomSpec,
    /// Starting weight for every direction
    pub default_weight: u32,
    /// Weight given to the favoured directions once per run
    pub priority_weight: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            main_path_length: SizeRange::new(65, 80),
            turn_distance: TurnDistance::default(),
            shift_chance: 20,
            branch_chance: 50,
            turn_room_chance: 10,
            branch_length: SizeRange::new(4, 6),
            room: RoomSpec::default(),
            default_weight: 1,
            priority_weight: 3,
        }
    }
}

impl GeneratorConfig {
    /// Reject configurations that would sample from empty ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.main_path_length.validate("main_path_length", 0)?;
        self.branch_length.validate("branch_length", 0)?;
        self.room.width.validate("room.width", 1)?;
        self.room.height.validate("room.height", 1)?;
        self.turn_distance.validate()?;

        for (name, value) in [
            ("shift_chance", self.shift_chance),
            ("branch_chance", self.branch_chance),
            ("turn_room_chance", self.turn_room_chance),
            ("room.corner_removal_chance", self.room.corner_removal_chance),
        ] {
            if value > 100 {
                return Err(ConfigError::InvalidChance { name, value });
            }
        }

        for (name, value) in [
            ("default_weight", self.default_weight),
            ("priority_weight", self.priority_weight),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        Ok(())
    }

    /// Load and validate a config from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: GeneratorConfig = ron::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded generator config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Config for a run: an explicit path must load cleanly, otherwise the
    /// default path is tried with fallback to built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                log::info!("Loaded generator config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::load_or_default(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Write this config as pretty RON, creating parent directories
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("floorwalk_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = GeneratorConfig {
            main_path_length: SizeRange::new(80, 65),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { name: "main_path_length", .. })
        ));

        let mut config = GeneratorConfig::default();
        config.room.height = SizeRange::new(0, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { name: "room.height", .. })
        ));
    }

    #[test]
    fn test_chance_over_hundred_rejected() {
        let config = GeneratorConfig {
            branch_chance: 101,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidChance { name: "branch_chance", value: 101 })
        ));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let config = GeneratorConfig {
            priority_weight: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWeight { .. })));
    }

    #[test]
    fn test_turn_distance_floor_must_be_positive() {
        let mut config = GeneratorConfig::default();
        config.turn_distance.min = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDistribution { .. })));

        let mut config = GeneratorConfig::default();
        config.turn_distance.max = Some(1);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange { .. })));
    }

    #[test]
    fn test_export_then_load() {
        let path = temp_path("export.ron");
        let config = GeneratorConfig {
            shift_chance: 0,
            branch_length: SizeRange::exactly(5),
            ..Default::default()
        };

        config.export(&path).expect("export failed");
        let loaded = GeneratorConfig::load(&path).expect("load failed");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path("partial.ron");
        fs::write(&path, "(shift_chance: 5)").unwrap();

        let loaded = GeneratorConfig::load(&path).expect("load failed");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.shift_chance, 5);
        assert_eq!(loaded.main_path_length, SizeRange::new(65, 80));
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let path = temp_path("bad.ron");
        fs::write(&path, "not ron at all {").unwrap();

        let loaded = GeneratorConfig::load_or_default(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, GeneratorConfig::default());
        assert_eq!(
            GeneratorConfig::load_or_default(temp_path("missing.ron")),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_explicit_invalid_file_is_an_error() {
        let path = temp_path("explicit_inverted.ron");
        fs::write(&path, "(main_path_length: (min: 80, max: 65))").unwrap();

        let result = GeneratorConfig::resolve(Some(path.as_path()));
        let _ = fs::remove_file(&path);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidRange { name: "main_path_length", .. })
        ));
    }

    #[test]
    fn test_explicit_missing_or_malformed_file_is_an_error() {
        let missing = temp_path("explicit_missing.ron");
        assert!(matches!(
            GeneratorConfig::resolve(Some(missing.as_path())),
            Err(ConfigError::Io(_))
        ));

        let path = temp_path("explicit_bad.ron");
        fs::write(&path, "not ron at all {").unwrap();
        let result = GeneratorConfig::resolve(Some(path.as_path()));
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_explicit_valid_file_is_used() {
        let path = temp_path("explicit_good.ron");
        fs::write(&path, "(turn_room_chance: 40)").unwrap();

        let loaded = GeneratorConfig::resolve(Some(path.as_path())).expect("resolve failed");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.turn_room_chance, 40);
    }
}
