//! Collision group constants (rapier membership/filter masks).
//!
//! Layers:
//! - Group 1: Actors (players, NPCs)
//! - Group 2: Environment (walls, obstacles, terrain)
//! - Group 3: Projectiles
//!
//! Projectiles scan ALL groups on purpose: friendly-fire exclusion is a
//! category ruling (`rule_contact`), not a physics filter, so player and
//! projectile contacts are still delivered (and then ignored) exactly as
//! the scene observes them.

use bevy_rapier3d::prelude::{CollisionGroups, Group};

/// Group 1: Actors (players, NPCs)
pub const GROUP_ACTORS: Group = Group::GROUP_1;

/// Group 2: Environment (walls, obstacles, terrain)
pub const GROUP_ENVIRONMENT: Group = Group::GROUP_2;

/// Group 3: Projectiles
pub const GROUP_PROJECTILES: Group = Group::GROUP_3;

/// Groups for projectile bodies: member of Projectiles, collides with all.
pub fn projectile_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_PROJECTILES, Group::ALL)
}

/// Groups for actor bodies: member of Actors, collides with all.
///
/// Attachment point for the scene host; the simulation spawns no actors
/// itself.
pub fn actor_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_ACTORS, Group::ALL)
}

/// Groups for static scene geometry (walls, terrain). Scene-host attachment
/// point, like [`actor_groups`].
pub fn environment_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_ENVIRONMENT, Group::ALL)
}

/// Group name for debug logs.
pub fn group_name(group: Group) -> &'static str {
    if group == GROUP_ACTORS {
        "Actors"
    } else if group == GROUP_ENVIRONMENT {
        "Environment"
    } else if group == GROUP_PROJECTILES {
        "Projectiles"
    } else {
        "Unknown"
    }
}
