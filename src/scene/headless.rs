use glam::Vec3;

use super::{Rgb, SceneService, TreeVisual};

/// Scene implementation with no renderer behind it: a flat square ground
/// centered at the origin, proxies that only track their state, and log
/// lines where a real scene would draw.
pub struct HeadlessScene {
    ground_half_extent: f32,
    preview_visible: bool,
    spawned: u64,
}

impl HeadlessScene {
    pub fn new(ground_half_extent: f32) -> Self {
        Self {
            ground_half_extent,
            preview_visible: false,
            spawned: 0,
        }
    }
}

impl SceneService for HeadlessScene {
    fn spawn_tree(&mut self, position: Vec3, size: f32) -> Box<dyn TreeVisual> {
        self.spawned += 1;
        let label = format!("tree-{}", self.spawned);
        log::debug!(
            "scene: spawn {label} at ({:.1}, {:.1}, {:.1}) scale {size:.1}",
            position.x,
            position.y,
            position.z
        );
        Box::new(HeadlessVisual { label })
    }

    fn pick_ground(&self, x: f32, z: f32) -> Option<Vec3> {
        if x.abs() <= self.ground_half_extent && z.abs() <= self.ground_half_extent {
            Some(Vec3::new(x, 0.0, z))
        } else {
            None
        }
    }

    fn set_preview_visible(&mut self, visible: bool) {
        if self.preview_visible != visible {
            log::debug!("scene: placement preview {}", if visible { "on" } else { "off" });
        }
        self.preview_visible = visible;
    }
}

struct HeadlessVisual {
    label: String,
}

impl TreeVisual for HeadlessVisual {
    fn set_scale(&mut self, size: f32) {
        log::debug!("scene: {} scale {size:.1}", self.label);
    }

    fn set_highlight(&mut self, color: Option<Rgb>) {
        match color {
            Some([r, g, b]) => log::debug!("scene: {} highlight ({r:.2}, {g:.2}, {b:.2})", self.label),
            None => log::debug!("scene: {} highlight cleared", self.label),
        }
    }

    fn dispose(&mut self) {
        log::debug!("scene: {} disposed", self.label);
    }
}
