//! Projectile components, spawn parameters, and contact classification.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Gravity influence on projectiles relative to normal bodies.
///
/// 10% of normal, so volleys arc gently instead of dropping like bricks.
pub const PROJECTILE_GRAVITY_SCALE: f32 = 0.1;

/// Default collision/visual sphere radius (metres)
pub const DEFAULT_PROJECTILE_RADIUS: f32 = 0.12;

/// Default lifetime cap (seconds)
pub const DEFAULT_PROJECTILE_LIFETIME: f32 = 4.0;

/// Default tint: warm orange, linear RGB. Visual only, no behavioural effect.
pub const DEFAULT_PROJECTILE_COLOR: [f32; 3] = [1.0, 0.55, 0.15];

/// Tunable projectile numbers, separate from per-shot position/velocity.
///
/// Serde-derived: the scene (or netcode) hands these over as data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileTuning {
    /// Collision sphere radius (metres), also the visual radius. Must be > 0.
    pub radius: f32,
    /// Seconds until unconditional despawn. Must be > 0.
    pub lifetime: f32,
    /// Linear RGB tint for the visual layer
    pub color_rgb: [f32; 3],
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            radius: DEFAULT_PROJECTILE_RADIUS,
            lifetime: DEFAULT_PROJECTILE_LIFETIME,
            color_rgb: DEFAULT_PROJECTILE_COLOR,
        }
    }
}

impl ProjectileTuning {
    /// Caller contract: non-positive radius/lifetime is a scene bug.
    /// Fail fast at spawn instead of simulating a degenerate body.
    pub fn assert_valid(&self) {
        assert!(
            self.radius > 0.0,
            "projectile radius must be > 0 (got {})",
            self.radius
        );
        assert!(
            self.lifetime > 0.0,
            "projectile lifetime must be > 0 (got {})",
            self.lifetime
        );
    }
}

/// Everything the scene supplies to fire one projectile.
#[derive(Debug, Clone)]
pub struct ProjectileParams {
    /// Spawn location (world space). Physics owns the position afterwards.
    pub position: Vec3,
    /// Initial linear velocity, applied exactly once on the first tick.
    pub velocity: Vec3,
    pub tuning: ProjectileTuning,
}

impl ProjectileParams {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            tuning: ProjectileTuning::default(),
        }
    }

    pub fn with_tuning(position: Vec3, velocity: Vec3, tuning: ProjectileTuning) -> Self {
        Self {
            position,
            velocity,
            tuning,
        }
    }
}

/// Core projectile state.
///
/// `alive` is monotonic: true from spawn until the first qualifying collision
/// or lifetime expiry, then false forever. The systems guard on it so a
/// projectile killed earlier in the tick is inert for the rest of it.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    /// Remaining lifetime (seconds)
    pub remaining: f32,
    /// False once destruction is underway; never flips back
    pub alive: bool,
}

impl Projectile {
    pub fn new(lifetime: f32) -> Self {
        Self {
            remaining: lifetime,
            alive: true,
        }
    }
}

/// One-shot launch velocity, consumed by `launch_projectiles`.
///
/// Holding the vector in its own component (instead of writing rapier's
/// `Velocity` at spawn) makes "set linear velocity exactly once" a structural
/// fact: the component is removed the moment it is applied.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PendingLaunch(pub Vec3);

/// Visual tint, read by the external render layer. No behavioural effect.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ProjectileColor(pub [f32; 3]);

/// Optional per-projectile hit callback (at most one invocation).
///
/// The primary notification channel is the `ProjectileHit` event; this exists
/// for scenes that want a closure bound at spawn time instead of an event
/// reader.
#[derive(Component)]
pub struct HitCallback(pub Box<dyn FnMut(&str) + Send + Sync>);

impl HitCallback {
    pub fn new(callback: impl FnMut(&str) + Send + Sync + 'static) -> Self {
        Self(Box::new(callback))
    }
}

/// Category tag attached to simulated bodies (game-semantic type).
///
/// `Player` and `Projectile` are the friendly-fire exclusions; every other
/// tag the scene invents is a valid hit target and travels as `Tagged`.
#[derive(Component, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
pub enum BodyCategory {
    Player,
    Projectile,
    /// Scene-defined tag ("enemy", "wall", ...); hittable
    Tagged(String),
}

impl BodyCategory {
    /// Maps the informal string vocabulary onto the closed enum.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "player" => BodyCategory::Player,
            "projectile" => BodyCategory::Projectile,
            other => BodyCategory::Tagged(other.to_owned()),
        }
    }

    /// The label handed to hit callbacks and events.
    pub fn label(&self) -> &str {
        match self {
            BodyCategory::Player => "player",
            BodyCategory::Projectile => "projectile",
            BodyCategory::Tagged(label) => label,
        }
    }
}

/// Outcome of classifying one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRuling<'a> {
    /// Friendly-fire exclusion or untagged body; no state change
    Ignored,
    /// Valid hit target; carries the category label
    Strike(&'a str),
}

/// Single decision point for "does this contact count as a hit".
///
/// Untagged bodies are deliberately non-hittable: the original engine
/// skipped bodies without a tag, and that permissive behaviour is kept.
pub fn rule_contact(category: Option<&BodyCategory>) -> ContactRuling<'_> {
    match category {
        None => ContactRuling::Ignored,
        Some(BodyCategory::Player | BodyCategory::Projectile) => ContactRuling::Ignored,
        Some(BodyCategory::Tagged(label)) => ContactRuling::Strike(label),
    }
}
