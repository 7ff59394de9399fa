use crate::garden_core::config::HighlightConfig;

/// Interaction modes. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Seed,
    Remove,
    Fertilize,
}

impl Tool {
    /// Keyboard bindings: `s` plants, `d` removes, `f` fertilizes.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            's' => Some(Tool::Seed),
            'd' => Some(Tool::Remove),
            'f' => Some(Tool::Fertilize),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Seed => "seed",
            Tool::Remove => "remove",
            Tool::Fertilize => "fertilize",
        }
    }
}

#[derive(Debug, Default)]
pub struct ToolState {
    active: Option<Tool>,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting the active tool again deselects it; anything else replaces
    /// the current selection outright.
    pub fn select(&mut self, tool: Tool) -> Option<Tool> {
        self.active = if self.active == Some(tool) {
            None
        } else {
            Some(tool)
        };
        self.active
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<Tool> {
        self.active
    }

    /// Hover feedback for the current mode: removable, growable, or neutral.
    pub fn hover_color(&self, colors: &HighlightConfig) -> [f32; 3] {
        match self.active {
            Some(Tool::Remove) => colors.remove,
            Some(Tool::Fertilize) => colors.fertilize,
            _ => colors.neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Tool, ToolState};
    use crate::garden_core::config::HighlightConfig;

    #[test]
    fn selecting_the_same_tool_twice_returns_to_none() {
        let mut tools = ToolState::new();
        assert_eq!(tools.select(Tool::Seed), Some(Tool::Seed));
        assert_eq!(tools.select(Tool::Seed), None);
        assert_eq!(tools.active(), None);
    }

    #[test]
    fn selecting_another_tool_replaces_the_current_one() {
        let mut tools = ToolState::new();
        tools.select(Tool::Seed);
        assert_eq!(tools.select(Tool::Fertilize), Some(Tool::Fertilize));
        assert_eq!(tools.active(), Some(Tool::Fertilize));
    }

    #[test]
    fn key_bindings_match_the_tools() {
        assert_eq!(Tool::from_key('s'), Some(Tool::Seed));
        assert_eq!(Tool::from_key('d'), Some(Tool::Remove));
        assert_eq!(Tool::from_key('f'), Some(Tool::Fertilize));
        assert_eq!(Tool::from_key('x'), None);
    }

    #[test]
    fn hover_color_tracks_the_active_tool() {
        let colors = HighlightConfig::default();
        let mut tools = ToolState::new();
        assert_eq!(tools.hover_color(&colors), colors.neutral);

        tools.select(Tool::Remove);
        assert_eq!(tools.hover_color(&colors), colors.remove);

        tools.select(Tool::Fertilize);
        assert_eq!(tools.hover_color(&colors), colors.fertilize);

        tools.select(Tool::Seed);
        assert_eq!(tools.hover_color(&colors), colors.neutral);
    }
}
