// src/ui/systems.rs
use bevy::prelude::*;

use crate::{
    grid::{
        events::{GridDataModifiedEvent, GridOperationFeedback},
        resources::{GridRenderCache, SensorGridState},
    },
    ui::{elements::editor::state::EditorWindowState, validation, UiFeedbackState},
};

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<GridOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prioritize showing the first non-error, or the last error.
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Formats a grid value the way the cells display it.
pub(crate) fn format_cell_value(value: f64, rounded: bool) -> String {
    if rounded {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", value)
    }
}

/// Rebuilds cached cell display strings from the grid whenever the data
/// changed or the rounding toggle flipped. Cell widgets edit the cached
/// strings in place between refreshes.
pub fn refresh_render_cache(
    mut data_modified_events: EventReader<GridDataModifiedEvent>,
    grid_state: Option<Res<SensorGridState>>,
    editor_state: Res<EditorWindowState>,
    mut render_cache: ResMut<GridRenderCache>,
    mut last_rounded: Local<Option<bool>>,
) {
    let Some(grid_state) = grid_state else {
        return;
    };

    let data_changed = !data_modified_events.is_empty();
    data_modified_events.clear();
    let rounding_changed = *last_rounded != Some(editor_state.show_rounded);
    if !data_changed && !rounding_changed {
        return;
    }
    *last_rounded = Some(editor_state.show_rounded);

    let grid = &grid_state.grid;
    render_cache.ensure_dimensions(grid.rows(), grid.columns());
    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            // In-range by construction, so this never fails here.
            let Ok(value) = grid.get(row, col) else {
                continue;
            };
            if let Some(cell_data) = render_cache.get_cell_data_mut(row, col) {
                cell_data.display_text = format_cell_value(value, editor_state.show_rounded);
                cell_data.validation_state =
                    validation::validate_numeric_cell(&cell_data.display_text).0;
            }
        }
    }
    trace!(
        "Refreshed render cache ({}x{}, rounded: {}).",
        grid.rows(),
        grid.columns(),
        editor_state.show_rounded
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell_value() {
        assert_eq!(format_cell_value(12.0, false), "12");
        assert_eq!(format_cell_value(12.5, false), "12.5");
        assert_eq!(format_cell_value(12.5, true), "13");
        assert_eq!(format_cell_value(-0.4, true), "0");
        assert_eq!(format_cell_value(20.0 / 3.0, true), "7");
    }
}
