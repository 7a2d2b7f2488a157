//! Headless EMBERFALL volley demo
//!
//! Fires a seeded volley of projectiles and runs the Bevy App without a
//! renderer. Motion needs the rapier pipeline (the scene host adds it), so
//! this binary exercises the lifecycle only: spawn → launch → lifetime expiry.

use bevy::prelude::*;
use rand::Rng;

use emberfall_simulation::{
    create_headless_app, spawn_projectile, DeterministicRng, Projectile, ProjectileParams,
    SimulationPlugin,
};

const VOLLEY_SIZE: usize = 24;
const TICKS: usize = 360; // 6 seconds at 60 Hz, outlives the 4 s default cap

fn main() {
    let seed = 42;
    println!("Starting EMBERFALL headless volley (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Draw launch vectors from the seeded RNG, then fire the volley
    let volley: Vec<ProjectileParams> = {
        let mut rng_resource = app.world_mut().resource_mut::<DeterministicRng>();
        let rng = &mut rng_resource.rng;
        (0..VOLLEY_SIZE)
            .map(|_| {
                let direction = Vec3::new(
                    rng.gen_range(-1.0..1.0_f32),
                    rng.gen_range(0.0..0.5_f32),
                    rng.gen_range(-1.0..1.0_f32),
                )
                .normalize_or_zero();
                ProjectileParams::new(Vec3::new(0.0, 1.0, 0.0), direction * 12.0)
            })
            .collect()
    };

    {
        let mut commands = app.world_mut().commands();
        for params in volley {
            spawn_projectile(&mut commands, params, None);
        }
    }

    for tick in 0..TICKS {
        app.update();

        if tick % 60 == 0 {
            let mut query = app.world_mut().query::<&Projectile>();
            let live = query.iter(app.world()).count();
            println!("Tick {}: {} live projectiles", tick, live);
        }
    }

    println!("Volley complete!");
}
