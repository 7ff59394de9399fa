use glam::Vec3;

use crate::audio::AudioService;
use crate::garden_core::config::GardenConfig;
use crate::garden_core::garden::Garden;
use crate::garden_core::save::{self, KeyValueStore, GARDEN_SAVE_KEY};
use crate::garden_core::tool::{Tool, ToolState};
use crate::garden_core::tree::TreeId;
use crate::garden_core::tuning::Tuning;
use crate::scene::SceneService;

/// Everything a pointer or key event can mean to the garden, resolved
/// upstream into a closed set of commands and applied synchronously.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectTool(Tool),
    ClearTool,
    /// Ground hit point, already resolved via `SceneService::pick_ground`.
    /// A missed pick never becomes a command.
    PlaceSeed(Vec3),
    /// Pointer click on a tree; what happens depends on the active tool.
    ActOnTree(TreeId),
    Hover(TreeId),
    Unhover(TreeId),
    /// Page-visibility analog: pause or resume all sound.
    SetSuspended(bool),
}

/// The whole application state in one explicit context: the garden, the
/// active tool, the transient focus, and the owned collaborators. All
/// mutation flows through `apply`, and the garden is snapshotted to the
/// store after every mutating command.
pub struct GardenRuntime {
    config: GardenConfig,
    tuning: Tuning,
    garden: Garden,
    tools: ToolState,
    focused: Option<TreeId>,
    scene: Box<dyn SceneService>,
    audio: Box<dyn AudioService>,
    store: Box<dyn KeyValueStore>,
}

impl GardenRuntime {
    /// Restores the saved garden (or the fixed default one) through the
    /// same planting path interactive seeds take, so a loaded garden is
    /// indistinguishable from one grown by hand.
    pub fn new(
        config: GardenConfig,
        mut scene: Box<dyn SceneService>,
        mut audio: Box<dyn AudioService>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let tuning = Tuning::new(&config.tuning);
        let mut garden = Garden::new();
        for record in save::load_or_default(store.as_ref(), &config.default_trees) {
            garden.plant(
                Vec3::new(record.position.x, record.position.y, record.position.z),
                record.size,
                &tuning,
                scene.as_mut(),
                audio.as_mut(),
            );
        }
        scene.set_preview_visible(false);

        Self {
            config,
            tuning,
            garden,
            tools: ToolState::new(),
            focused: None,
            scene,
            audio,
            store,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectTool(tool) => {
                self.tools.select(tool);
                self.refresh_tool_feedback();
            }
            Command::ClearTool => {
                self.tools.clear();
                self.refresh_tool_feedback();
            }
            Command::PlaceSeed(point) => self.place_seed(point),
            Command::ActOnTree(id) => self.act_on_tree(id),
            Command::Hover(id) => self.hover(id),
            Command::Unhover(id) => self.unhover(id),
            Command::SetSuspended(suspended) => self.audio.set_suspended(suspended),
        }
    }

    pub fn pick_ground(&self, x: f32, z: f32) -> Option<Vec3> {
        self.scene.pick_ground(x, z)
    }

    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.tools.active()
    }

    pub fn focused(&self) -> Option<TreeId> {
        self.focused
    }

    /// Empty the garden. A mutation like any other: the empty garden is
    /// what gets persisted.
    pub fn clear(&mut self) {
        self.focused = None;
        self.garden.clear();
        self.snapshot();
    }

    /// Session teardown: stop every voice and drop every proxy without
    /// touching the persisted garden.
    pub fn shutdown(&mut self) {
        self.focused = None;
        self.garden.clear();
    }

    /// Every tool transition re-derives the presentation state that depends
    /// on it: preview marker visibility and the focused tree's highlight.
    fn refresh_tool_feedback(&mut self) {
        self.scene
            .set_preview_visible(self.tools.active() == Some(Tool::Seed));
        if let Some(id) = self.focused {
            let color = self.tools.hover_color(&self.config.highlight);
            if let Some(tree) = self.garden.get_mut(id) {
                tree.set_highlight(color);
            }
        }
    }

    fn place_seed(&mut self, point: Vec3) {
        if self.tools.active() != Some(Tool::Seed) {
            return;
        }
        self.garden.plant(
            point,
            self.config.initial_size,
            &self.tuning,
            self.scene.as_mut(),
            self.audio.as_mut(),
        );
        self.snapshot();
    }

    fn act_on_tree(&mut self, id: TreeId) {
        match self.tools.active() {
            Some(Tool::Remove) => {
                if self.focused == Some(id) {
                    self.focused = None;
                }
                if self.garden.remove(id) {
                    self.snapshot();
                }
            }
            Some(Tool::Fertilize) => {
                let Some(tree) = self.garden.get_mut(id) else {
                    return;
                };
                tree.grow(self.config.growth_step, &self.tuning);
                log::info!("tree #{} grew to size {:.1}", id.0, tree.size());
                self.snapshot();
            }
            Some(Tool::Seed) | None => {}
        }
    }

    fn hover(&mut self, id: TreeId) {
        if !self.garden.contains(id) {
            return;
        }
        if let Some(previous) = self.focused.take() {
            if previous != id {
                if let Some(tree) = self.garden.get_mut(previous) {
                    tree.clear_highlight();
                }
            }
        }
        let color = self.tools.hover_color(&self.config.highlight);
        if let Some(tree) = self.garden.get_mut(id) {
            tree.set_highlight(color);
        }
        self.focused = Some(id);
    }

    fn unhover(&mut self, id: TreeId) {
        if self.focused != Some(id) {
            return;
        }
        self.focused = None;
        if let Some(tree) = self.garden.get_mut(id) {
            tree.clear_highlight();
        }
    }

    fn snapshot(&mut self) {
        match save::serialize(&self.garden) {
            Ok(text) => self.store.set(GARDEN_SAVE_KEY, &text),
            Err(e) => log::warn!("failed to serialize garden: {e}"),
        }
    }
}
