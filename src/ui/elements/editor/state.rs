// src/ui/elements/editor/state.rs
use bevy::prelude::Resource;

/// Transient UI state for the editor window: the interpolate target fields
/// and the rounded-display toggle.
#[derive(Resource, Debug, Clone)]
pub struct EditorWindowState {
    /// Text of the "row" field next to the Interpolate Cell button.
    pub interpolate_row_input: String,
    /// Text of the "column" field next to the Interpolate Cell button.
    pub interpolate_col_input: String,
    /// When true, cells display values rounded to whole numbers.
    pub show_rounded: bool,
}

impl Default for EditorWindowState {
    fn default() -> Self {
        Self {
            interpolate_row_input: "0".to_string(),
            interpolate_col_input: "0".to_string(),
            show_rounded: false,
        }
    }
}
