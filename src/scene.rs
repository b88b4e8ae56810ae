use shoreline_runtime::RenderTarget;

use crate::components::World;
use crate::event::Event;

/// A unit of per-tick game logic.
pub trait System {
    fn name(&self) -> &'static str;

    fn tick(&mut self, world: &mut World, dt: f32);

    fn handle_event(&mut self, _world: &mut World, _event: &Event) {}

    fn render(&self, _target: &mut dyn RenderTarget) {}
}

/// Owns the world and the ordered system list.
pub struct Scene {
    pub world: World,
    systems: Vec<Box<dyn System>>,
}

impl Scene {
    pub fn new(world: World) -> Self {
        Self {
            world,
            systems: Vec::new(),
        }
    }

    pub fn add_system(&mut self, system: Box<dyn System>) {
        log::debug!(target: "app", "system added: {}", system.name());
        self.systems.push(system);
    }

    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    pub fn handle_event(&mut self, event: &Event) {
        for s in &mut self.systems {
            s.handle_event(&mut self.world, event);
        }
    }

    pub fn update(&mut self, dt: f32) {
        for s in &mut self.systems {
            s.tick(&mut self.world, dt);
        }
    }

    pub fn render(&self, target: &mut dyn RenderTarget) {
        for s in &self.systems {
            s.render(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl System for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn tick(&mut self, _world: &mut World, _dt: f32) {
            self.log.borrow_mut().push(format!("{}:tick", self.name));
        }

        fn handle_event(&mut self, _world: &mut World, _event: &Event) {
            self.log.borrow_mut().push(format!("{}:event", self.name));
        }
    }

    #[test]
    fn systems_run_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene = Scene::new(World::new());
        for name in ["a", "b"] {
            scene.add_system(Box::new(Recorder {
                name,
                log: log.clone(),
            }));
        }
        scene.handle_event(&Event::KeyPressed(crate::event::Key::W));
        scene.update(0.1);
        assert_eq!(scene.system_names(), vec!["a", "b"]);
        assert_eq!(
            *log.borrow(),
            vec!["a:event", "b:event", "a:tick", "b:tick"]
        );
    }
}
