use shoreline_geom::Vec2;

use crate::components::World;
use crate::event::{Axis, Event, Key};
use crate::scene::System;

pub const PLAYER_SLOTS: usize = 4;

/// Turns key and stick events into per-player direction vectors and applies
/// them as velocity to the entities bound to each slot.
#[derive(Debug)]
pub struct InputDirector {
    inputs: [Vec2; PLAYER_SLOTS],
    speed: f32,
}

impl InputDirector {
    pub fn new(speed: f32) -> Self {
        Self {
            inputs: [Vec2::ZERO; PLAYER_SLOTS],
            speed,
        }
    }

    #[inline]
    pub fn direction(&self, slot: usize) -> Option<Vec2> {
        self.inputs.get(slot).copied()
    }

    fn key_delta(key: Key) -> Vec2 {
        match key {
            Key::W => Vec2::new(0.0, -1.0),
            Key::S => Vec2::new(0.0, 1.0),
            Key::A => Vec2::new(-1.0, 0.0),
            Key::D => Vec2::new(1.0, 0.0),
        }
    }

    pub fn apply(&mut self, event: &Event) {
        match *event {
            Event::KeyPressed(k) => self.inputs[0] += Self::key_delta(k),
            Event::KeyReleased(k) => self.inputs[0] -= Self::key_delta(k),
            Event::AxisMoved {
                pad,
                axis,
                position,
            } => {
                let Some(i) = self.inputs.get_mut(pad) else {
                    log::debug!(target: "app", "ignoring input from pad {}", pad);
                    return;
                };
                match axis {
                    Axis::X => i.x = position / 100.0,
                    Axis::Y => i.y = position / 100.0,
                }
            }
        }
    }
}

impl System for InputDirector {
    fn name(&self) -> &'static str {
        "input"
    }

    fn handle_event(&mut self, _world: &mut World, event: &Event) {
        self.apply(event);
    }

    fn tick(&mut self, world: &mut World, _dt: f32) {
        for (_, e) in world.entities.iter_mut() {
            if let Some(dir) = e.player.and_then(|slot| self.direction(slot)) {
                e.velocity.0 = dir * self.speed;
            }
        }
    }
}
