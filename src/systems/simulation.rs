//! Simulation system
//!
//! Manages the simulation loop including:
//! - Delta time calculation
//! - Fixed-timestep accumulation
//! - Physics stepping and wall re-anchoring
//! - Pause and single-step control

use std::time::Instant;

use crate::config::PhysicsConfig;
use crate::scene::DemoScene;

/// Longest frame the accumulator will take in one go
const MAX_FRAME_TIME: f32 = 0.25;

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Number of fixed steps taken
    pub steps: u32,
    /// Whether leftover time was thrown away to keep up
    pub dropped_backlog: bool,
}

/// Runs the physics at a fixed timestep regardless of frame rate
pub struct SimulationSystem {
    last_frame: Instant,
    accumulator: f32,
    timestep: f32,
    max_steps_per_frame: u32,
    paused: bool,
}

impl SimulationSystem {
    /// Create a simulation system from config
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            last_frame: Instant::now(),
            accumulator: 0.0,
            timestep: config.timestep,
            max_steps_per_frame: config.max_steps_per_frame.max(1),
            paused: false,
        }
    }

    /// Fixed step length in seconds
    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume; returns the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.accumulator = 0.0;
        self.last_frame = Instant::now();
        self.paused
    }

    /// Run one frame using wall-clock time since the last call
    pub fn update(&mut self, scene: &mut DemoScene) -> SimulationResult {
        let now = Instant::now();
        let frame_time = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(scene, frame_time)
    }

    /// Run as many fixed steps as `frame_time` seconds allow
    pub fn advance(&mut self, scene: &mut DemoScene, frame_time: f32) -> SimulationResult {
        if self.paused {
            return SimulationResult {
                steps: 0,
                dropped_backlog: false,
            };
        }

        // Cap dt to prevent spiral of death after a stall
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.timestep && steps < self.max_steps_per_frame {
            scene.step(self.timestep);
            self.accumulator -= self.timestep;
            steps += 1;
        }

        let dropped_backlog = self.accumulator >= self.timestep;
        if dropped_backlog {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        SimulationResult {
            steps,
            dropped_backlog,
        }
    }

    /// Take exactly one step (works while paused)
    pub fn step_once(&mut self, scene: &mut DemoScene) {
        scene.step(self.timestep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use dragme_math::Vec2;

    fn scene() -> DemoScene {
        DemoScene::build(Vec2::new(800.0, 600.0), &SceneConfig::default(), Default::default()).unwrap()
    }

    fn quad_y(scene: &DemoScene) -> f32 {
        let key = scene.dynamic_bodies()[0];
        scene.world().get_body(key).unwrap().position().y
    }

    #[test]
    fn test_fixed_steps_from_frame_time() {
        let mut sim = SimulationSystem::new(&PhysicsConfig::default());
        let mut scene = scene();

        let result = sim.advance(&mut scene, 2.5 / 60.0);
        assert_eq!(result.steps, 2);
        assert!(!result.dropped_backlog);

        // Leftover time carries over
        let result = sim.advance(&mut scene, 0.6 / 60.0);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_short_frame_takes_no_step() {
        let mut sim = SimulationSystem::new(&PhysicsConfig::default());
        let mut scene = scene();
        let y = quad_y(&scene);

        assert_eq!(sim.advance(&mut scene, 0.001).steps, 0);
        assert_eq!(quad_y(&scene), y);
    }

    #[test]
    fn test_backlog_is_dropped() {
        let mut sim = SimulationSystem::new(&PhysicsConfig::default());
        let mut scene = scene();

        let result = sim.advance(&mut scene, 10.0);
        assert_eq!(result.steps, 4);
        assert!(result.dropped_backlog);

        // Nothing left over afterwards
        assert_eq!(sim.advance(&mut scene, 0.0).steps, 0);
    }

    #[test]
    fn test_paused_does_not_step() {
        let mut sim = SimulationSystem::new(&PhysicsConfig::default());
        let mut scene = scene();
        let y = quad_y(&scene);

        assert!(sim.toggle_pause());
        assert_eq!(sim.advance(&mut scene, 0.1).steps, 0);
        assert_eq!(quad_y(&scene), y);

        sim.step_once(&mut scene);
        assert!(quad_y(&scene) < y);

        assert!(!sim.toggle_pause());
        assert!(!sim.is_paused());
    }

    #[test]
    fn test_step_reanchors_walls() {
        let mut sim = SimulationSystem::new(&PhysicsConfig::default());
        let mut scene = scene();

        scene.apply_window_motion(Vec2::new(30.0, 0.0), sim.timestep());
        sim.advance(&mut scene, sim.timestep());

        for boundary in scene.boundaries() {
            let wall = scene.world().get_body(boundary.key).unwrap();
            assert_eq!(wall.position(), boundary.anchor);
        }
    }
}
