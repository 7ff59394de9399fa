use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// Size added by one application of the fertilizer tool.
    pub growth_step: f32,
    /// Size of a freshly planted seed.
    pub initial_size: f32,
    /// Half side length of the square ground plane; clicks outside miss.
    pub ground_half_extent: f32,
    pub tuning: TuningConfig,
    pub highlight: HighlightConfig,
    /// Garden planted when no save exists.
    pub default_trees: Vec<TreeSeed>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            growth_step: 1.0,
            initial_size: 1.0,
            ground_half_extent: 12.5,
            tuning: TuningConfig::default(),
            highlight: HighlightConfig::default(),
            default_trees: vec![
                TreeSeed {
                    position: [3.0, 0.0, 2.0],
                    size: 2.0,
                },
                TreeSeed {
                    position: [-4.0, 0.0, -1.0],
                    size: 5.0,
                },
            ],
        }
    }
}

impl GardenConfig {
    pub fn load() -> Self {
        let path = std::path::Path::new("config.json");
        if !path.exists() {
            log::info!("no config.json found, using defaults");
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("loaded config.json");
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse config.json: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read config.json: {e}, using defaults");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Carrier frequency for the largest trees (≈ C1).
    pub pitch_low_hz: f32,
    /// Carrier frequency for the smallest trees (≈ C7).
    pub pitch_high_hz: f32,
    /// Wobble rate for the largest trees.
    pub vibrato_slow_hz: f32,
    /// Wobble rate for the smallest trees.
    pub vibrato_fast_hz: f32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            pitch_low_hz: 32.70,
            pitch_high_hz: 2093.0,
            vibrato_slow_hz: 1.0 / 51.0,
            vibrato_fast_hz: 1.0 / 5.0,
        }
    }
}

/// Hover highlight colors, linear RGB in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub neutral: [f32; 3],
    pub fertilize: [f32; 3],
    pub remove: [f32; 3],
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            neutral: [0.9, 0.9, 0.8],
            fertilize: [0.35, 0.8, 0.35],
            remove: [0.85, 0.25, 0.2],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSeed {
    pub position: [f32; 3],
    pub size: f32,
}
