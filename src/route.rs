use serde::{Deserialize, Serialize};

use crate::event::{Axis, Event, EventQueue, Key};

/// Scripted movement fed to the input director in place of a keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Hold D for the whole run.
    #[default]
    East,
    /// Steer pad 0 around a circle of `radius`.
    Circle,
    /// Walk the four sides of a square with `radius`-long edges.
    Square,
    Idle,
}

const SQUARE_KEYS: [Key; 4] = [Key::D, Key::S, Key::A, Key::W];

#[derive(Debug)]
pub struct ScriptedWalk {
    route: Route,
    leg_ticks: u64,
    angle_step: f32,
}

impl ScriptedWalk {
    pub fn new(route: Route, radius: f32, speed: f32, dt: f32) -> Self {
        let per_tick = (speed * dt).max(f32::EPSILON);
        Self {
            route,
            leg_ticks: ((radius / per_tick).round() as u64).max(1),
            angle_step: per_tick / radius.max(f32::EPSILON),
        }
    }

    /// Input events for simulation tick `tick`.
    pub fn events_for(&self, tick: u64) -> Vec<Event> {
        match self.route {
            Route::Idle => Vec::new(),
            Route::East => {
                if tick == 0 {
                    vec![Event::KeyPressed(Key::D)]
                } else {
                    Vec::new()
                }
            }
            Route::Square => {
                if tick % self.leg_ticks != 0 {
                    return Vec::new();
                }
                let leg = (tick / self.leg_ticks) as usize;
                let mut out = Vec::with_capacity(2);
                if leg > 0 {
                    out.push(Event::KeyReleased(SQUARE_KEYS[(leg - 1) % 4]));
                }
                out.push(Event::KeyPressed(SQUARE_KEYS[leg % 4]));
                out
            }
            Route::Circle => {
                let a = tick as f32 * self.angle_step;
                // Heading is the tangent, so the path closes after one lap.
                vec![
                    Event::AxisMoved {
                        pad: 0,
                        axis: Axis::X,
                        position: a.cos() * 100.0,
                    },
                    Event::AxisMoved {
                        pad: 0,
                        axis: Axis::Y,
                        position: a.sin() * 100.0,
                    },
                ]
            }
        }
    }

    pub fn schedule(&self, queue: &mut EventQueue) {
        for ev in self.events_for(queue.now) {
            queue.emit_now(ev);
        }
    }
}
