// src/ui/elements/editor/table_body.rs
use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{TableBody, TableRow};

use crate::grid::events::{GridOperationFeedback, InterpolateCellRequest, UpdateCellEvent};
use crate::grid::resources::GridRenderCache;
use crate::ui::common::{edit_cell_widget, CellEditAction};

use super::main_editor::GridEventWriters;

/// Renders the body rows of the sensor grid table: a row-index label
/// followed by one editable cell per column.
pub fn grid_table_body(
    body: TableBody,
    row_height: f32,
    rows: usize,
    columns: usize,
    render_cache: &mut GridRenderCache,
    writers: &mut GridEventWriters,
) {
    let mut body = body;
    body.rows(row_height, rows, |mut table_row: TableRow| {
        let row_index = table_row.index();

        table_row.col(|ui| {
            ui.label(egui::RichText::new(row_index.to_string()).weak());
        });

        for col_index in 0..columns {
            table_row.col(|ui| {
                let Some(cell_data) = render_cache.get_cell_data_mut(row_index, col_index) else {
                    // One frame of staleness is possible right after startup.
                    ui.label("...");
                    return;
                };

                let cell_id = egui::Id::new("cell").with(row_index).with(col_index);
                match edit_cell_widget(ui, cell_id, cell_data) {
                    CellEditAction::None => {}
                    CellEditAction::Commit(value) => {
                        writers.cell_update.write(UpdateCellEvent {
                            row: row_index,
                            col: col_index,
                            value,
                        });
                    }
                    CellEditAction::Interpolate(committed) => {
                        if let Some(value) = committed {
                            writers.cell_update.write(UpdateCellEvent {
                                row: row_index,
                                col: col_index,
                                value,
                            });
                        }
                        writers.interpolate.write(InterpolateCellRequest {
                            row: row_index,
                            col: col_index,
                        });
                    }
                    CellEditAction::RejectInput => {
                        let msg = format!(
                            "Please enter only numbers into the grid (cell ({}, {})).",
                            row_index, col_index
                        );
                        warn!("{}", msg);
                        writers.feedback.write(GridOperationFeedback {
                            message: msg,
                            is_error: true,
                        });
                    }
                }
            });
        }
    });
}
