use glam::Vec3;

use crate::audio::AudioService;
use crate::garden_core::tree::{Tree, TreeId};
use crate::garden_core::tuning::Tuning;
use crate::scene::SceneService;

/// The ordered collection of living trees. Membership is by identity;
/// coinciding positions or sizes are allowed.
#[derive(Default)]
pub struct Garden {
    trees: Vec<Tree>,
    next_id: u64,
}

impl Garden {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant(
        &mut self,
        position: Vec3,
        size: f32,
        tuning: &Tuning,
        scene: &mut dyn SceneService,
        audio: &mut dyn AudioService,
    ) -> TreeId {
        self.next_id += 1;
        let id = TreeId(self.next_id);
        self.trees
            .push(Tree::plant(id, position, size, tuning, scene, audio));
        log::info!(
            "planted tree #{} at ({:.1}, {:.1}, {:.1}) size {size:.1}",
            id.0,
            position.x,
            position.y,
            position.z
        );
        id
    }

    /// Deregisters before disposing, so a snapshot taken during removal can
    /// never observe a half-disposed tree.
    pub fn remove(&mut self, id: TreeId) -> bool {
        let Some(index) = self.trees.iter().position(|tree| tree.id() == id) else {
            return false;
        };
        self.trees.remove(index).dispose();
        log::info!("removed tree #{}", id.0);
        true
    }

    pub fn get(&self, id: TreeId) -> Option<&Tree> {
        self.trees.iter().find(|tree| tree.id() == id)
    }

    pub fn get_mut(&mut self, id: TreeId) -> Option<&mut Tree> {
        self.trees.iter_mut().find(|tree| tree.id() == id)
    }

    pub fn contains(&self, id: TreeId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tree> {
        self.trees.iter()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Dispose every tree, silencing the garden.
    pub fn clear(&mut self) {
        for tree in self.trees.drain(..) {
            tree.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::Garden;
    use crate::audio::HeadlessAudio;
    use crate::garden_core::config::TuningConfig;
    use crate::garden_core::tuning::Tuning;
    use crate::scene::HeadlessScene;

    #[test]
    fn coinciding_trees_keep_distinct_identities() {
        let tuning = Tuning::new(&TuningConfig::default());
        let mut scene = HeadlessScene::new(12.5);
        let mut audio = HeadlessAudio::new();
        let mut garden = Garden::new();

        let spot = Vec3::new(1.0, 0.0, 1.0);
        let a = garden.plant(spot, 2.0, &tuning, &mut scene, &mut audio);
        let b = garden.plant(spot, 2.0, &tuning, &mut scene, &mut audio);
        assert_ne!(a, b);
        assert_eq!(garden.len(), 2);

        assert!(garden.remove(a));
        assert_eq!(garden.len(), 1);
        assert!(!garden.contains(a));
        assert!(garden.contains(b));

        // removing the same identity twice is a no-op
        assert!(!garden.remove(a));
        assert_eq!(garden.len(), 1);
    }

    #[test]
    fn clear_empties_the_garden() {
        let tuning = Tuning::new(&TuningConfig::default());
        let mut scene = HeadlessScene::new(12.5);
        let mut audio = HeadlessAudio::new();
        let mut garden = Garden::new();

        garden.plant(Vec3::ZERO, 1.0, &tuning, &mut scene, &mut audio);
        garden.plant(Vec3::ONE, 3.0, &tuning, &mut scene, &mut audio);
        garden.clear();
        assert!(garden.is_empty());
    }
}
