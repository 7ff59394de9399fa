use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::garden_core::config::TreeSeed;
use crate::garden_core::garden::Garden;

/// The single well-known key the garden is persisted under.
pub const GARDEN_SAVE_KEY: &str = "garden";

/// Flat string key/value store backing persistence. The original runtime's
/// storage was a browser string store; anything with the same get/set shape
/// will do.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One persisted tree. Focus, highlight and audio state are deliberately
/// absent: all of it is reconstructible from `position` and `size`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TreeRecord {
    pub position: PositionRecord,
    pub size: f32,
}

pub fn records(garden: &Garden) -> Vec<TreeRecord> {
    garden
        .iter()
        .map(|tree| {
            let position = tree.position();
            TreeRecord {
                position: PositionRecord {
                    x: position.x,
                    y: position.y,
                    z: position.z,
                },
                size: tree.size(),
            }
        })
        .collect()
}

pub fn serialize(garden: &Garden) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&records(garden))?)
}

/// `None` means absence. Unparseable text and records that would break the
/// `size > 0` invariant are both treated as a missing save, never surfaced
/// as an error.
pub fn deserialize(text: &str) -> Option<Vec<TreeRecord>> {
    let parsed: Vec<TreeRecord> = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("failed to parse saved garden: {e}");
            return None;
        }
    };
    for record in &parsed {
        if !record.size.is_finite() || record.size <= 0.0 {
            log::warn!("saved garden has a tree of size {}, discarding", record.size);
            return None;
        }
    }
    Some(parsed)
}

/// The saved garden if one exists and parses, otherwise the fixed default
/// garden.
pub fn load_or_default(store: &dyn KeyValueStore, defaults: &[TreeSeed]) -> Vec<TreeRecord> {
    match store.get(GARDEN_SAVE_KEY) {
        Some(text) => {
            if let Some(saved) = deserialize(&text) {
                log::info!("loaded saved garden with {} tree(s)", saved.len());
                return saved;
            }
        }
        None => log::info!("no saved garden found"),
    }

    log::info!("planting the default garden");
    defaults
        .iter()
        .map(|seed| TreeRecord {
            position: PositionRecord {
                x: seed.position[0],
                y: seed.position[1],
                z: seed.position[2],
            },
            size: seed.size,
        })
        .collect()
}

/// One file per key under a base directory, the native analog of the
/// browser string store. Failures are logged and swallowed; persistence is
/// best-effort.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path(key);
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.path(key);
        if let Err(e) = std::fs::write(&path, value) {
            log::warn!("failed to write {}: {e}", path.display());
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{deserialize, load_or_default, serialize, KeyValueStore, MemoryStore};
    use super::GARDEN_SAVE_KEY;
    use crate::audio::HeadlessAudio;
    use crate::garden_core::config::{GardenConfig, TuningConfig};
    use crate::garden_core::garden::Garden;
    use crate::garden_core::tuning::Tuning;
    use crate::scene::HeadlessScene;

    fn garden_with(positions: &[(Vec3, f32)]) -> Garden {
        let tuning = Tuning::new(&TuningConfig::default());
        let mut scene = HeadlessScene::new(12.5);
        let mut audio = HeadlessAudio::new();
        let mut garden = Garden::new();
        for &(position, size) in positions {
            garden.plant(position, size, &tuning, &mut scene, &mut audio);
        }
        garden
    }

    #[test]
    fn serialized_garden_round_trips() {
        let garden = garden_with(&[
            (Vec3::new(2.0, 0.0, 3.0), 1.0),
            (Vec3::new(-4.5, 0.0, 7.25), 6.0),
            (Vec3::new(-4.5, 0.0, 7.25), 6.0), // coinciding trees survive
        ]);

        let text = serialize(&garden).unwrap();
        let restored = deserialize(&text).unwrap();

        assert_eq!(restored.len(), garden.len());
        for (record, tree) in restored.iter().zip(garden.iter()) {
            let position = tree.position();
            assert!((record.position.x - position.x).abs() < 1e-6);
            assert!((record.position.y - position.y).abs() < 1e-6);
            assert!((record.position.z - position.z).abs() < 1e-6);
            assert!((record.size - tree.size()).abs() < 1e-6);
        }
    }

    #[test]
    fn record_shape_is_position_object_plus_size() {
        let garden = garden_with(&[(Vec3::new(1.0, 0.0, 2.0), 3.0)]);
        let text = serialize(&garden).unwrap();
        assert_eq!(
            text,
            r#"[{"position":{"x":1.0,"y":0.0,"z":2.0},"size":3.0}]"#
        );
    }

    #[test]
    fn malformed_text_reads_as_absence() {
        assert!(deserialize("not json at all").is_none());
        assert!(deserialize(r#"[{"size": 2.0}]"#).is_none());
    }

    #[test]
    fn invariant_breaking_sizes_read_as_absence() {
        assert!(deserialize(r#"[{"position":{"x":0.0,"y":0.0,"z":0.0},"size":0.0}]"#).is_none());
        assert!(deserialize(r#"[{"position":{"x":0.0,"y":0.0,"z":0.0},"size":-3.0}]"#).is_none());
    }

    #[test]
    fn missing_or_corrupt_save_falls_back_to_the_default_garden() {
        let defaults = GardenConfig::default().default_trees;

        let empty = MemoryStore::new();
        let records = load_or_default(&empty, &defaults);
        assert_eq!(records.len(), defaults.len());
        assert_eq!(records[0].size, defaults[0].size);

        let mut corrupt = MemoryStore::new();
        corrupt.set(GARDEN_SAVE_KEY, "{{{");
        assert_eq!(load_or_default(&corrupt, &defaults).len(), defaults.len());
    }

    #[test]
    fn a_saved_garden_wins_over_the_defaults() {
        let defaults = GardenConfig::default().default_trees;
        let mut store = MemoryStore::new();
        store.set(
            GARDEN_SAVE_KEY,
            r#"[{"position":{"x":9.0,"y":0.0,"z":-2.0},"size":4.0}]"#,
        );

        let records = load_or_default(&store, &defaults);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position.x, 9.0);
        assert_eq!(records[0].size, 4.0);
    }
}
