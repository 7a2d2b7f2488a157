//! Tests for projectile systems (spawn wiring, one-shot launch, countdown).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy_rapier3d::prelude::{GravityScale, Velocity};

    use crate::projectile::{
        spawn_projectile, HitCallback, PendingLaunch, Projectile, ProjectileColor,
        ProjectileParams, ProjectilePlugin,
    };
    use crate::create_headless_app;

    fn test_app() -> App {
        let mut app = create_headless_app(1);
        app.add_plugins(ProjectilePlugin);
        app
    }

    fn spawn(app: &mut App, params: ProjectileParams) -> Entity {
        let entity = {
            let mut commands = app.world_mut().commands();
            spawn_projectile(&mut commands, params, None)
        };
        app.world_mut().flush();
        entity
    }

    #[test]
    fn test_spawn_attaches_full_component_set() {
        let mut app = test_app();
        let entity = spawn(
            &mut app,
            ProjectileParams::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(5.0, 0.0, 0.0)),
        );

        let world = app.world();
        assert!(world.get::<Projectile>(entity).is_some());
        assert_eq!(
            world.get::<PendingLaunch>(entity).map(|p| p.0),
            Some(Vec3::new(5.0, 0.0, 0.0))
        );
        assert_eq!(
            world.get::<Transform>(entity).map(|t| t.translation),
            Some(Vec3::new(0.0, 1.0, 0.0))
        );
        // Reduced gravity influence: projectiles arc, they don't drop
        assert_eq!(world.get::<GravityScale>(entity).map(|g| g.0), Some(0.1));
        assert_eq!(
            world.get::<ProjectileColor>(entity).map(|c| c.0),
            Some([1.0, 0.55, 0.15])
        );
    }

    #[test]
    fn test_spawn_binds_construction_time_callback() {
        let mut app = test_app();
        let entity = {
            let mut commands = app.world_mut().commands();
            spawn_projectile(
                &mut commands,
                ProjectileParams::new(Vec3::ZERO, Vec3::X),
                Some(HitCallback::new(|_| {})),
            )
        };
        app.world_mut().flush();

        assert!(app.world().get::<HitCallback>(entity).is_some());
    }

    #[test]
    fn test_launch_is_applied_exactly_once() {
        let mut app = test_app();
        let launch_velocity = Vec3::new(5.0, 0.0, 0.0);
        let entity = spawn(
            &mut app,
            ProjectileParams::new(Vec3::new(0.0, 1.0, 0.0), launch_velocity),
        );

        app.update();
        app.update();

        // Velocity holds the exact constructed vector
        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert_eq!(velocity.linvel, launch_velocity);
        // The one-shot component is gone; re-application is impossible
        assert!(app.world().get::<PendingLaunch>(entity).is_none());

        // Simulate the physics backend changing the velocity; the launch
        // system must not touch it again
        app.world_mut().get_mut::<Velocity>(entity).unwrap().linvel = Vec3::new(1.0, -2.0, 0.0);
        app.update();
        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert_eq!(velocity.linvel, Vec3::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn test_lifetime_counts_down_per_tick() {
        let mut app = test_app();
        let entity = spawn(
            &mut app,
            ProjectileParams::new(Vec3::ZERO, Vec3::X),
        );

        app.update();
        app.update();

        let remaining = app.world().get::<Projectile>(entity).unwrap().remaining;
        let consumed = 4.0 - remaining;
        // One or two 60 Hz ticks, depending on fixed-step warmup
        assert!(
            consumed > 0.9 / 60.0 && consumed < 2.1 / 60.0,
            "consumed = {consumed}"
        );
    }
}
