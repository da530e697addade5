// src/ui/elements/top_panel/mod.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::grid::events::{
    FillGridRequest, GridFill, GridOperationFeedback, InterpolateCellRequest,
};
use crate::ui::elements::editor::main_editor::GridEventWriters;
use crate::ui::elements::editor::state::EditorWindowState;
use crate::ui::validation::parse_cell_index;

/// Renders the menu bar, the rounding toggle and the interpolate controls.
pub fn show_top_panel(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    writers: &mut GridEventWriters,
) {
    egui::menu::bar(ui, |ui| {
        ui.menu_button("Grid", |ui| {
            if ui.button("Fill Random").clicked() {
                writers.fill.write(FillGridRequest {
                    fill: GridFill::Random,
                });
                ui.close_menu();
            }
            if ui.button("Fill Zeros").clicked() {
                writers.fill.write(FillGridRequest {
                    fill: GridFill::Zeros,
                });
                ui.close_menu();
            }
        });
    });
    ui.separator();

    ui.horizontal(|ui| {
        let toggle_label = if state.show_rounded {
            "Show True Values"
        } else {
            "Show Rounded Values"
        };
        if ui.button(toggle_label).clicked() {
            state.show_rounded = !state.show_rounded;
        }

        ui.separator();

        let interpolate_clicked = ui.button("Interpolate Cell").clicked();
        ui.label("(");
        ui.add(
            egui::TextEdit::singleline(&mut state.interpolate_row_input).desired_width(30.0),
        );
        ui.label(",");
        ui.add(
            egui::TextEdit::singleline(&mut state.interpolate_col_input).desired_width(30.0),
        );
        ui.label(")");
        ui.label(egui::RichText::new("row, column").weak());

        if interpolate_clicked {
            match (
                parse_cell_index(&state.interpolate_row_input),
                parse_cell_index(&state.interpolate_col_input),
            ) {
                (Some(row), Some(col)) => {
                    writers.interpolate.write(InterpolateCellRequest { row, col });
                }
                _ => {
                    let msg = "Please enter a valid cell location.".to_string();
                    warn!(
                        "Rejected interpolate target ('{}', '{}').",
                        state.interpolate_row_input, state.interpolate_col_input
                    );
                    writers.feedback.write(GridOperationFeedback {
                        message: msg,
                        is_error: true,
                    });
                }
            }
        }
    });
}
