//! Projectile lifecycle systems (launch → contacts → lifetime).
//!
//! All three run chained in FixedUpdate, so within one tick the order is
//! always: pending launches applied, then contacts ruled, then lifetimes
//! ticked. Nothing here touches the rapier pipeline directly, only its
//! components and `CollisionEvent` stream, which is what lets the whole
//! lifecycle run headless in tests.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{
    ActiveEvents, Ccd, Collider, CollisionEvent, GravityScale, RigidBody, Velocity,
};

use super::collision;
use super::components::{
    rule_contact, BodyCategory, ContactRuling, HitCallback, PendingLaunch, Projectile,
    ProjectileColor, ProjectileParams, PROJECTILE_GRAVITY_SCALE,
};
use super::events::{ProjectileExpired, ProjectileHit};

/// Spawn helper: one projectile entity with the full component set.
///
/// - Transform at the spawn position (physics owns it afterwards)
/// - Dynamic rigid body at 10% gravity + ball collider of `radius`
/// - `PendingLaunch` holding the one-shot launch velocity
/// - Collision events enabled, CCD on (small fast spheres tunnel otherwise)
/// - The optional hit callback, bound at construction time
///
/// Panics if radius or lifetime is non-positive; that is a scene bug, not a
/// runtime condition.
pub fn spawn_projectile(
    commands: &mut Commands,
    params: ProjectileParams,
    on_hit: Option<HitCallback>,
) -> Entity {
    params.tuning.assert_valid();

    let entity = commands
        .spawn((
            // Bevy transform
            Transform::from_translation(params.position),
            GlobalTransform::default(),
            // Lifecycle state
            Projectile::new(params.tuning.lifetime),
            PendingLaunch(params.velocity),
            ProjectileColor(params.tuning.color_rgb),
            BodyCategory::Projectile,
            // Rapier physics
            RigidBody::Dynamic,
            Collider::ball(params.tuning.radius),
            GravityScale(PROJECTILE_GRAVITY_SCALE),
            Velocity::default(),
            Ccd::enabled(),
            ActiveEvents::COLLISION_EVENTS,
            collision::projectile_groups(),
        ))
        .id();

    if let Some(callback) = on_hit {
        commands.entity(entity).insert(callback);
    }

    crate::log(&format!(
        "Projectile {:?} spawned at {:?} (radius {}, lifetime {}s)",
        entity, params.position, params.tuning.radius, params.tuning.lifetime
    ));

    entity
}

/// System: apply pending launch velocities.
///
/// The one and only linear-velocity assignment a projectile ever receives;
/// rapier's integration and gravity scaling govern all motion afterwards.
/// Removing `PendingLaunch` in the same pass makes re-application impossible.
pub fn launch_projectiles(
    mut commands: Commands,
    mut pending: Query<(Entity, &PendingLaunch, &mut Velocity), With<Projectile>>,
) {
    for (entity, launch, mut velocity) in pending.iter_mut() {
        velocity.linvel = launch.0;
        commands.entity(entity).remove::<PendingLaunch>();

        crate::log(&format!(
            "Projectile {:?} launched, velocity {:?}",
            entity, launch.0
        ));
    }
}

/// System: rule collision-start events against live projectiles.
///
/// For every contact the struck body's category decides:
/// - untagged / `player` / `projectile` → ignored, projectile keeps flying
/// - anything else → hit callback (once), `ProjectileHit` event, despawn
///
/// The `alive` guard makes later events in the same batch inert, so the
/// first qualifying collision wins and the callback can never fire twice.
pub fn resolve_projectile_contacts(
    mut commands: Commands,
    mut collision_events: EventReader<CollisionEvent>,
    mut projectiles: Query<(&mut Projectile, &Transform, Option<&mut HitCallback>)>,
    categories: Query<&BodyCategory>,
    mut hit_events: EventWriter<ProjectileHit>,
) {
    for event in collision_events.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        // Rapier does not order the pair; try both assignments
        for (projectile_entity, other_entity) in [(*a, *b), (*b, *a)] {
            let Ok((mut projectile, transform, callback)) =
                projectiles.get_mut(projectile_entity)
            else {
                continue;
            };

            // Killed earlier this tick (or this batch); inert
            if !projectile.alive {
                continue;
            }

            match rule_contact(categories.get(other_entity).ok()) {
                ContactRuling::Ignored => continue,
                ContactRuling::Strike(label) => {
                    if let Some(mut hit_callback) = callback {
                        (hit_callback.0)(label);
                    }

                    let impact_point = transform.translation;
                    hit_events.write(ProjectileHit {
                        projectile: projectile_entity,
                        category: label.to_owned(),
                        impact_point,
                    });

                    projectile.alive = false;
                    commands.entity(projectile_entity).despawn();

                    crate::log(&format!(
                        "🎯 Projectile {:?} struck '{}' at {:?}",
                        projectile_entity, label, impact_point
                    ));
                }
            }
        }
    }
}

/// System: lifetime countdown and forced despawn.
///
/// Runs after contact resolution; projectiles killed by a collision this tick
/// are skipped via the `alive` guard, so the "timer" can never fire against a
/// body whose destruction is already underway.
pub fn tick_projectile_lifetimes(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut Projectile)>,
    mut expired_events: EventWriter<ProjectileExpired>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut projectile) in projectiles.iter_mut() {
        if !projectile.alive {
            continue;
        }

        projectile.remaining -= delta;
        if projectile.remaining <= 0.0 {
            projectile.alive = false;
            expired_events.write(ProjectileExpired { projectile: entity });
            commands.entity(entity).despawn();

            crate::log(&format!("⌛ Projectile {:?} expired (lifetime cap)", entity));
        }
    }
}
