use serde::{Deserialize, Serialize};

/// Knobs shared by the drawer, the router and the geometry engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Route 0x31/0x32 to the custom-object routine instead of drawing nothing.
    pub enable_custom_objects: bool,
    /// Leave animated floor tiles to the floor pass in `draw_background`.
    pub skip_animated_floor: bool,
    /// Memoize geometry probes.
    pub geometry_cache: bool,
    /// Share of a diagonal ceiling's bounding box kept for selection.
    pub selection_shrink_percent: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enable_custom_objects: false,
            skip_animated_floor: true,
            geometry_cache: true,
            selection_shrink_percent: 70,
        }
    }
}
