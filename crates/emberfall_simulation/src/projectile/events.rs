//! Projectile lifecycle events (simulation → scene)

use bevy::prelude::*;

/// Event: projectile struck a qualifying body (first hit wins)
///
/// Emitted at most once per projectile, synchronously with its despawn.
/// The scene applies game effects (damage, score, VFX at `impact_point`).
#[derive(Event, Debug, Clone)]
pub struct ProjectileHit {
    /// The projectile entity (already queued for despawn)
    pub projectile: Entity,
    /// Category label of the struck body ("enemy", "wall", ...)
    pub category: String,
    /// Projectile position at the moment of impact
    pub impact_point: Vec3,
}

/// Event: projectile reached its lifetime cap without a qualifying hit
#[derive(Event, Debug, Clone)]
pub struct ProjectileExpired {
    pub projectile: Entity,
}
