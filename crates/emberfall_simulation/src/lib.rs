//! EMBERFALL Simulation Core
//!
//! Headless ECS simulation on Bevy 0.16 (strategic layer).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = projectile lifecycle, hit rules, lifetime accounting
//! - Renderer / game scene = external tactical layer (spawn requests in,
//!   `ProjectileHit` / `ProjectileExpired` events out)
//! - Rapier = rigid-body backend, consumed only through its component seam
//!   (`RigidBody`, `Collider`, `Velocity`, `CollisionEvent`) so the
//!   simulation runs and is tested without any physics pipeline attached

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod projectile;

// Re-export the scene-facing surface
pub use projectile::{
    rule_contact, spawn_projectile, BodyCategory, ContactRuling, HitCallback, PendingLaunch,
    Projectile, ProjectileColor, ProjectileExpired, ProjectileHit, ProjectileParams,
    ProjectilePlugin, ProjectileTuning, PROJECTILE_GRAVITY_SCALE,
};

/// Simulation tick rate (Hz). Round number keeps interval math easy to read.
pub const SIMULATION_HZ: f64 = 60.0;

/// Default RNG seed when the host never provided one.
pub const DEFAULT_SEED: u64 = 42;

/// Top-level simulation plugin (bundles all subsystems)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep for the simulation tick
        app.insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ));

        // Seeded RNG: keep a host-provided seed if one is already installed
        if app.world().get_resource::<DeterministicRng>().is_none() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app.add_plugins(ProjectilePlugin);
    }
}

/// Deterministic RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Builds a minimal Bevy App for headless simulation.
///
/// The virtual clock advances by exactly one 60 Hz step per `App::update`,
/// so tick counts map 1:1 to simulated time regardless of wall clock.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / SIMULATION_HZ,
        )));

    app
}

/// World snapshot for determinism comparisons.
///
/// Collects one component type across all entities in Entity-index order and
/// serialises via Debug. Coarse, but two identical runs must produce
/// byte-identical output.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Sort by Entity index so iteration order cannot leak in
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

// ---------------------------------------------------------------------------
// Pluggable logger (the scene host may route output anywhere)
// ---------------------------------------------------------------------------

use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *LOGGER.lock().unwrap() = Some(logger);
}

pub fn set_log_level(level: LogLevel) {
    *LOGGER_LEVEL.lock().unwrap() = level;
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    if LOGGER.lock().unwrap().is_none() {
        set_logger(logger);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    // Timestamp is added here, not in the printer, so every sink agrees
    if level < *LOGGER_LEVEL.lock().unwrap() {
        return;
    }
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}
