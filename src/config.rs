//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`DRAGME_SECTION__KEY`)

use dragme_math::Vec2;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "DRAGME_";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Physics and timing configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Scene layout configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`DRAGME_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // DRAGME_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid("window size must be non-zero"));
        }
        positive(self.physics.timestep, "physics.timestep")?;
        if !self.physics.gravity.iter().all(|g| g.is_finite()) {
            return Err(ConfigError::invalid("physics.gravity must be finite"));
        }
        if self.physics.max_steps_per_frame == 0 {
            return Err(ConfigError::invalid("physics.max_steps_per_frame must be at least 1"));
        }
        positive(self.scene.pixels_per_meter, "scene.pixels_per_meter")?;
        positive(self.scene.boundary_thickness, "scene.boundary_thickness")?;
        // At 1.0 or below the walls' inner faces cut into the content area
        if !(self.scene.boundary_offset.is_finite() && self.scene.boundary_offset > 1.0) {
            return Err(ConfigError::invalid("scene.boundary_offset must be greater than 1"));
        }
        if !self.scene.boundary_restitution.is_finite() {
            return Err(ConfigError::invalid("scene.boundary_restitution must be finite"));
        }
        Ok(())
    }
}

/// NaN and infinity fail too
fn positive(value: f32, name: &str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(&format!("{} must be positive", name)))
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Content width in logical pixels
    pub width: u32,
    /// Content height in logical pixels
    pub height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Center the window on the primary monitor at startup
    pub centered: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Drag Me!".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            centered: true,
            vsync: true,
        }
    }
}

/// Physics and simulation timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity [x, y] (negative y = downward)
    pub gravity: [f32; 2],
    /// Constraint solver iterations per step
    pub solver_iterations: u32,
    /// Fixed simulation step in seconds
    pub timestep: f32,
    /// Steps allowed per update before the backlog is dropped
    pub max_steps_per_frame: u32,
    /// Wake-up interval of the event loop in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -30.0],
            solver_iterations: 12,
            timestep: 1.0 / 60.0,
            max_steps_per_frame: 4,
            tick_interval_ms: 16,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics engine's config
    pub fn to_physics_config(&self) -> dragme_physics::PhysicsConfig {
        dragme_physics::PhysicsConfig::new(Vec2::new(self.gravity[0], self.gravity[1]))
            .with_solver_iterations(self.solver_iterations as usize)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Scene layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Pixels per physics unit
    pub pixels_per_meter: f32,
    /// Half-thickness of each boundary wall in physics units
    pub boundary_thickness: f32,
    /// Boundary distance from the center as a multiple of the half-extent
    pub boundary_offset: f32,
    /// Bounciness of the boundary walls
    pub boundary_restitution: f32,
    /// Clamp dynamic bodies inside the walls after every window move
    pub contain_bodies: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 30.0,
            boundary_thickness: 3.0,
            boundary_offset: 1.2,
            boundary_restitution: 0.5,
            contain_bodies: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Segments used to tessellate circles
    pub circle_segments: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            circle_segments: dragme_render::DEFAULT_CIRCLE_SEGMENTS,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log every window move at debug level
    pub log_window_moves: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_window_moves: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: &str) -> Self {
        ConfigError {
            message: format!("invalid value: {}", message),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Drag Me!");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert!(!config.window.resizable);
        assert_eq!(config.physics.gravity, [0.0, -30.0]);
        assert_eq!(config.scene.pixels_per_meter, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_physics_config() {
        let physics = PhysicsConfig::default().to_physics_config();
        assert_eq!(physics.gravity, Vec2::new(0.0, -30.0));
        assert_eq!(physics.solver_iterations, 12);
        assert_eq!(PhysicsConfig::default().tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("pixels_per_meter"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.physics.timestep = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.scene.pixels_per_meter = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pixels_per_meter"));

        let mut config = AppConfig::default();
        config.physics.max_steps_per_frame = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_walls_inside_content() {
        for offset in [1.0, 0.5, -1.2] {
            let mut config = AppConfig::default();
            config.scene.boundary_offset = offset;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("boundary_offset"), "accepted offset {}", offset);
        }

        let mut config = AppConfig::default();
        config.scene.boundary_offset = 1.01;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let mut config = AppConfig::default();
        config.physics.timestep = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.physics.gravity = [0.0, f32::NEG_INFINITY];
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.scene.pixels_per_meter = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.scene.boundary_thickness = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.scene.boundary_offset = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.scene.boundary_restitution = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.window.width, 800);
    }
}
