// src/ui/common.rs
use bevy_egui::egui;

use crate::grid::resources::RenderableCellData;
use crate::ui::validation::{self, ValidationState};

/// What the user did to a cell widget this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellEditAction {
    None,
    /// A parsed value was committed (focus left the cell).
    Commit(f64),
    /// Enter was pressed inside the cell: commit the typed value (if any)
    /// and interpolate the cell from its neighbors.
    Interpolate(Option<f64>),
    /// Focus left the cell while its text was not a number.
    RejectInput,
}

/// Renders one editable grid cell backed by the render cache entry.
///
/// The cached `display_text` is the live edit buffer; it is revalidated on
/// every keystroke and re-synced from the grid after the next successful
/// operation. Invalid text is shown in red until it is fixed or replaced.
pub fn edit_cell_widget(
    ui: &mut egui::Ui,
    id: egui::Id,
    cell_data: &mut RenderableCellData,
) -> CellEditAction {
    let size = egui::vec2(ui.available_width(), ui.style().spacing.interact_size.y);

    let mut text_edit = egui::TextEdit::singleline(&mut cell_data.display_text)
        .id(id)
        .horizontal_align(egui::Align::RIGHT);
    if cell_data.validation_state == ValidationState::Invalid {
        text_edit = text_edit.text_color(egui::Color32::RED);
    }
    let response = ui.add_sized(size, text_edit);

    if response.changed() {
        cell_data.validation_state =
            validation::validate_numeric_cell(&cell_data.display_text).0;
    }

    let enter_pressed =
        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    if enter_pressed {
        let (_, parsed) = validation::validate_numeric_cell(&cell_data.display_text);
        return CellEditAction::Interpolate(parsed);
    }

    if response.lost_focus() {
        return match validation::validate_numeric_cell(&cell_data.display_text) {
            (ValidationState::Valid, Some(value)) => CellEditAction::Commit(value),
            // An emptied cell reads as "no measurement", stored as 0.0.
            (ValidationState::Empty, _) => CellEditAction::Commit(0.0),
            _ => CellEditAction::RejectInput,
        };
    }

    CellEditAction::None
}
