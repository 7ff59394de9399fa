pub mod headless;

use glam::Vec3;

pub use headless::HeadlessScene;

/// Linear RGB in [0, 1].
pub type Rgb = [f32; 3];

/// Capabilities a rendered tree proxy must expose to the garden.
pub trait TreeVisual {
    fn set_scale(&mut self, size: f32);
    /// `None` clears any highlight.
    fn set_highlight(&mut self, color: Option<Rgb>);
    /// Detach and destroy the proxy. The handle must not be used afterwards.
    fn dispose(&mut self);
}

/// The rendering collaborator: spawns tree proxies, resolves pointer
/// positions against the ground, and shows the seed placement preview.
pub trait SceneService {
    fn spawn_tree(&mut self, position: Vec3, size: f32) -> Box<dyn TreeVisual>;
    /// World-space hit point for a pointer position, or `None` when the
    /// pointer misses the ground.
    fn pick_ground(&self, x: f32, z: f32) -> Option<Vec3>;
    fn set_preview_visible(&mut self, visible: bool);
}
