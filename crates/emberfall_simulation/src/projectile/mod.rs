//! Projectile subsystem (single-hit ballistics)
//!
//! Architecture:
//! - Scene spawns via `spawn_projectile` with `ProjectileParams`
//! - Rapier owns motion: dynamic body, ball collider, reduced gravity scale
//! - Launch velocity is assigned exactly once, on the first simulation tick
//!   after spawn (`PendingLaunch` is consumed, never re-applied)
//! - First qualifying collision wins: hit callback + `ProjectileHit` event,
//!   then synchronous despawn; `player` / `projectile` / untagged contacts
//!   are ignored and the projectile keeps flying
//! - Hard lifetime cap: countdown in FixedUpdate, despawn on expiry with a
//!   `ProjectileExpired` event. A collision kill despawns the entity, which
//!   removes the countdown with it, so no late timer can fire against a
//!   released body.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

pub mod collision;
pub mod components;
pub mod events;
pub mod systems;

// Tests (separate file with _tests suffix)
#[cfg(test)]
mod systems_tests;

pub use components::{
    rule_contact, BodyCategory, ContactRuling, HitCallback, PendingLaunch, Projectile,
    ProjectileColor, ProjectileParams, ProjectileTuning, DEFAULT_PROJECTILE_COLOR,
    DEFAULT_PROJECTILE_LIFETIME, DEFAULT_PROJECTILE_RADIUS, PROJECTILE_GRAVITY_SCALE,
};
pub use events::{ProjectileExpired, ProjectileHit};
pub use systems::{
    launch_projectiles, resolve_projectile_contacts, spawn_projectile, tick_projectile_lifetimes,
};

/// Projectile Plugin
///
/// Registers the lifecycle systems in FixedUpdate, chained:
/// 1. `launch_projectiles`: one-shot linear velocity assignment
/// 2. `resolve_projectile_contacts`: collision ruling, first hit wins
/// 3. `tick_projectile_lifetimes`: countdown + forced despawn
///
/// Contact resolution runs before the lifetime tick so a collision and an
/// expiry landing on the same tick resolve as a hit.
pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ProjectileHit>()
            .add_event::<ProjectileExpired>()
            // No-op when the host already installed the rapier plugin;
            // registering here keeps headless setups working without it.
            .add_event::<CollisionEvent>();

        app.add_systems(
            FixedUpdate,
            (
                launch_projectiles,
                resolve_projectile_contacts,
                tick_projectile_lifetimes,
            )
                .chain(),
        );
    }
}
