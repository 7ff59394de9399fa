use glam::Vec3;

use crate::audio::{AudioService, TreeVoice};
use crate::garden_core::tuning::Tuning;
use crate::scene::{Rgb, SceneService, TreeVisual};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(pub u64);

/// One living tree: an immutable position, a size, and exclusively owned
/// handles to its scene proxy and its voice. Scale, carrier frequency and
/// wobble rate are always derived from `size` through the mappers; there is
/// no way to set them independently.
pub struct Tree {
    id: TreeId,
    position: Vec3,
    size: f32,
    visual: Box<dyn TreeVisual>,
    voice: Box<dyn TreeVoice>,
}

impl Tree {
    /// Spawns the proxy and starts the voice. The tree is audible from this
    /// moment until `dispose`.
    pub fn plant(
        id: TreeId,
        position: Vec3,
        size: f32,
        tuning: &Tuning,
        scene: &mut dyn SceneService,
        audio: &mut dyn AudioService,
    ) -> Self {
        debug_assert!(size > 0.0);
        let visual = scene.spawn_tree(position, size);
        let voice = audio.spawn_voice(tuning.pitch(size), tuning.vibrato_rate(size));
        Self {
            id,
            position,
            size,
            visual,
            voice,
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// The only mutation path: add the growth step, then re-derive scale,
    /// carrier and wobble in one go so the three can never drift apart.
    pub fn grow(&mut self, step: f32, tuning: &Tuning) {
        self.size += step;
        self.visual.set_scale(self.size);
        self.voice.set_carrier_frequency(tuning.pitch(self.size));
        self.voice.set_vibrato_rate(tuning.vibrato_rate(self.size));
    }

    pub fn set_highlight(&mut self, color: Rgb) {
        self.visual.set_highlight(Some(color));
    }

    pub fn clear_highlight(&mut self) {
        self.visual.set_highlight(None);
    }

    /// Visual first, then the voice. Consumes the tree.
    pub fn dispose(mut self) {
        self.visual.dispose();
        self.voice.stop();
    }
}
