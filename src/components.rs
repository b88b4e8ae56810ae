use shoreline_geom::Vec2;
use shoreline_runtime::{EntityStore, Handle, SlotArena, StreamStats};
use shoreline_world::ChunkCoord;

/// Frames in a walk cycle.
pub const WALK_FRAMES: u8 = 4;
/// Seconds each walk frame is shown.
pub const FRAME_TIME: f32 = 0.15;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec2,
}

/// World units per second.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    #[inline]
    pub fn is_moving(self) -> bool {
        self.0 != Vec2::ZERO
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Dominant axis of `v`; horizontal wins ties.
    pub fn from_velocity(v: Vec2) -> Facing {
        if v.x.abs() >= v.y.abs() {
            if v.x < 0.0 { Facing::Left } else { Facing::Right }
        } else if v.y < 0.0 {
            Facing::Up
        } else {
            Facing::Down
        }
    }
}

/// Walk-cycle state owned by one entity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Animation {
    pub facing: Facing,
    pub frame: u8,
    pub timer: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Entity {
    pub transform: Transform,
    pub velocity: Velocity,
    pub animation: Option<Animation>,
    /// Input slot driving this entity, if any.
    pub player: Option<usize>,
}

/// Latest streaming state, published by the terrain system each tick.
#[derive(Clone, Debug, Default)]
pub struct TerrainStatus {
    pub current: Option<ChunkCoord>,
    pub live_chunks: usize,
    pub stats: StreamStats,
}

#[derive(Debug, Default)]
pub struct World {
    pub entities: SlotArena<Entity>,
    /// Entity the camera (and terrain streaming) follows.
    pub focus: Option<Handle>,
    pub terrain: TerrainStatus,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an animated entity driven by input slot `slot`.
    pub fn spawn_player(&mut self, slot: usize, position: Vec2) -> Handle {
        let h = self.entities.create(Entity {
            transform: Transform { position },
            velocity: Velocity::default(),
            animation: Some(Animation::default()),
            player: Some(slot),
        });
        if self.focus.is_none() {
            self.focus = Some(h);
        }
        h
    }

    pub fn position(&self, h: Handle) -> Option<Vec2> {
        self.entities.get(h).map(|e| e.transform.position)
    }

    pub fn focus_position(&self) -> Option<Vec2> {
        self.focus.and_then(|h| self.position(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_follows_dominant_axis() {
        assert_eq!(Facing::from_velocity(Vec2::new(3.0, 1.0)), Facing::Right);
        assert_eq!(Facing::from_velocity(Vec2::new(-3.0, 1.0)), Facing::Left);
        assert_eq!(Facing::from_velocity(Vec2::new(0.5, -1.0)), Facing::Up);
        assert_eq!(Facing::from_velocity(Vec2::new(0.0, 2.0)), Facing::Down);
    }

    #[test]
    fn first_player_takes_focus() {
        let mut w = World::new();
        let a = w.spawn_player(0, Vec2::new(1.0, 2.0));
        w.spawn_player(1, Vec2::ZERO);
        assert_eq!(w.focus, Some(a));
        assert_eq!(w.focus_position(), Some(Vec2::new(1.0, 2.0)));
    }
}
