use shoreline_runtime::{RenderTarget, TerrainStreamer};

use crate::components::{Animation, FRAME_TIME, Facing, WALK_FRAMES, World};
use crate::scene::System;

/// Integrates velocity into position.
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn tick(&mut self, world: &mut World, dt: f32) {
        for (h, e) in world.entities.iter_mut() {
            if !e.velocity.is_moving() {
                continue;
            }
            e.transform.position += e.velocity.0 * dt;
            let p = e.transform.position;
            log::debug!(target: "app", "entity {} moved to x={:.1}, y={:.1}", h.index(), p.x, p.y);
        }
    }
}

/// Steps each entity's own walk cycle while it moves; idles it otherwise.
#[derive(Debug, Default)]
pub struct AnimationSystem;

impl AnimationSystem {
    fn step(anim: &mut Animation, moving: Option<Facing>, dt: f32) {
        let Some(facing) = moving else {
            anim.frame = 0;
            anim.timer = 0.0;
            return;
        };
        anim.facing = facing;
        anim.timer += dt;
        while anim.timer >= FRAME_TIME {
            anim.timer -= FRAME_TIME;
            anim.frame = (anim.frame + 1) % WALK_FRAMES;
        }
    }
}

impl System for AnimationSystem {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn tick(&mut self, world: &mut World, dt: f32) {
        for (_, e) in world.entities.iter_mut() {
            let moving = e
                .velocity
                .is_moving()
                .then(|| Facing::from_velocity(e.velocity.0));
            if let Some(anim) = e.animation.as_mut() {
                Self::step(anim, moving, dt);
            }
        }
    }
}

/// Streams terrain around the world's focus entity.
pub struct TerrainSystem {
    streamer: TerrainStreamer,
}

impl TerrainSystem {
    pub fn new(streamer: TerrainStreamer) -> Self {
        Self { streamer }
    }
}

impl System for TerrainSystem {
    fn name(&self) -> &'static str {
        "terrain"
    }

    fn tick(&mut self, world: &mut World, _dt: f32) {
        let Some(viewer) = world.focus_position() else {
            return;
        };
        let report = self.streamer.tick(&viewer);
        world.terrain.current = report.current;
        world.terrain.live_chunks = self.streamer.store().len();
        world.terrain.stats = self.streamer.stats();
        if report.transitioned {
            log::debug!(
                target: "app",
                "terrain: entered {:?}, +{} -{} chunks",
                report.current,
                report.spawned.len(),
                report.evicted.len()
            );
        }
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        self.streamer.render(target);
    }
}
