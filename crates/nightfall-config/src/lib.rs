//! Scene constants for nightfall.
//!
//! Every tunable lives in [`SceneConfig`]. The defaults are the constants the
//! scene is designed around; an optional `config.toml` in the platform config
//! directory can override individual fields.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, ensure};
use directories::ProjectDirs;
use serde::Deserialize;

/// Application name used for platform directories.
pub const APP_NAME: &str = "nightfall";

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Full scene configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub physics: PhysicsConfig,
    pub spawn: SpawnConfig,
    pub stars: StarConfig,
    pub frame: FrameConfig,
}

/// Ground-bounce physics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every frame (px/frame²).
    pub gravity: f32,
    /// Fraction of vertical speed kept after a bounce.
    pub restitution: f32,
    /// Fraction of radius kept after a bounce.
    pub reduction_rate: f32,
    /// Balls smaller than this are removed.
    pub despawn_radius: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            restitution: 0.6,
            reduction_rate: 0.6,
            despawn_radius: 1.0,
        }
    }
}

/// Ball spawning and fragmentation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Floor of the randomized respawn interval (ms).
    pub min_interval_ms: f64,
    /// Ceiling of the randomized respawn interval (ms).
    pub max_interval_ms: f64,
    /// Interval before the first ball (ms).
    pub initial_interval_ms: f64,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Top of the spawn strip relative to the viewport top (px).
    pub spawn_offset_y: f32,
    /// Height of the spawn strip as a fraction of the viewport height.
    pub spawn_strip_ratio: f32,
    /// Width of the symmetric range horizontal drift is drawn from.
    pub drift_range: f32,
    /// Smallest allowed absolute horizontal drift.
    pub min_drift: f32,
    pub min_fragments: u32,
    pub max_fragments: u32,
    /// Lower bound of the fragment velocity scale.
    pub fragment_scale_min: f32,
    /// Width of the fragment velocity scale range.
    pub fragment_scale_span: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 50.0,
            max_interval_ms: 500.0,
            initial_interval_ms: 500.0,
            min_radius: 20.0,
            max_radius: 40.0,
            spawn_offset_y: -500.0,
            spawn_strip_ratio: 0.05,
            drift_range: 10.0,
            min_drift: 5.0,
            min_fragments: 1,
            max_fragments: 5,
            fragment_scale_min: 0.3,
            fragment_scale_span: 1.0,
        }
    }
}

/// Background starfield.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    /// Star radius is drawn from `[0, max_size / 2)`.
    pub max_size: f32,
    /// Upward drift per frame (px).
    pub speed: f32,
    /// Stars above this y wrap to the bottom.
    pub wrap_top: f32,
    /// Wrap target as a multiple of the viewport height.
    pub wrap_bottom_ratio: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            max_size: 3.0,
            speed: 0.1,
            wrap_top: -100.0,
            wrap_bottom_ratio: 1.5,
        }
    }
}

/// Frame pacing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub target_fps: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl FrameConfig {
    /// Time budget for one frame in milliseconds.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}

impl SceneConfig {
    /// Path of the user config file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults when no file exists.
    pub fn load() -> color_eyre::Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("no config file, using built-in scene constants");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> color_eyre::Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .wrap_err_with(|| format!("invalid config in {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(contents: &str) -> color_eyre::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> color_eyre::Result<()> {
        let physics = &self.physics;
        ensure!(physics.gravity >= 0.0, "gravity must not be negative");
        ensure!(
            physics.restitution > 0.0 && physics.restitution < 1.0,
            "restitution must be in (0, 1), got {}",
            physics.restitution
        );
        ensure!(
            physics.reduction_rate > 0.0 && physics.reduction_rate < 1.0,
            "reduction_rate must be in (0, 1), got {}",
            physics.reduction_rate
        );
        ensure!(physics.despawn_radius > 0.0, "despawn_radius must be positive");

        let spawn = &self.spawn;
        ensure!(
            spawn.min_interval_ms >= 0.0 && spawn.min_interval_ms <= spawn.max_interval_ms,
            "spawn interval range is empty"
        );
        ensure!(
            spawn.min_radius > 0.0 && spawn.min_radius <= spawn.max_radius,
            "ball radius range is empty"
        );
        ensure!(spawn.min_drift >= 0.0, "min_drift must not be negative");
        ensure!(spawn.drift_range >= 0.0, "drift_range must not be negative");
        ensure!(
            spawn.spawn_strip_ratio >= 0.0,
            "spawn_strip_ratio must not be negative"
        );
        ensure!(
            spawn.fragment_scale_min >= 0.0,
            "fragment_scale_min must not be negative"
        );
        ensure!(
            spawn.min_fragments >= 1 && spawn.min_fragments <= spawn.max_fragments,
            "fragment count range is empty"
        );
        ensure!(
            spawn.fragment_scale_span >= 0.0,
            "fragment_scale_span must not be negative"
        );

        ensure!(self.stars.count > 0, "star count must be positive");
        ensure!(self.stars.speed >= 0.0, "star speed must not be negative");
        // Keeps the wrap target below the wrap line for any viewport height
        ensure!(self.stars.wrap_top <= 0.0, "star wrap_top must not be positive");
        ensure!(
            self.stars.wrap_bottom_ratio > 0.0,
            "star wrap_bottom_ratio must be positive"
        );
        ensure!(self.frame.target_fps > 0, "target_fps must be positive");
        Ok(())
    }
}
