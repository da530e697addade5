// src/grid/systems/logic.rs
use bevy::prelude::*;
use rand::Rng;

use crate::grid::{
    events::{
        FillGridRequest, GridDataModifiedEvent, GridFill, GridOperationFeedback,
        InterpolateCellRequest, UpdateCellEvent,
    },
    resources::SensorGridState,
};

/// Applies committed cell edits to the grid.
pub fn handle_cell_update(
    mut events: EventReader<UpdateCellEvent>,
    mut state: ResMut<SensorGridState>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        match state.grid.set(event.row, event.col, event.value) {
            Ok(()) => {
                trace!(
                    "Updated cell ({}, {}) to {}",
                    event.row,
                    event.col,
                    event.value
                );
                data_modified_writer.write(GridDataModifiedEvent);
            }
            Err(e) => {
                let msg = format!("Cell update rejected: {}", e);
                warn!("{}", msg);
                feedback_writer.write(GridOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}

/// Replaces the requested cell with the average of its in-bounds neighbors.
pub fn handle_interpolate_request(
    mut events: EventReader<InterpolateCellRequest>,
    mut state: ResMut<SensorGridState>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        match state.grid.interpolate(event.row, event.col) {
            Ok(average) => {
                let msg = format!(
                    "Interpolated cell ({}, {}) to {}",
                    event.row, event.col, average
                );
                info!("{}", msg);
                feedback_writer.write(GridOperationFeedback {
                    message: msg,
                    is_error: false,
                });
                data_modified_writer.write(GridDataModifiedEvent);
            }
            Err(e) => {
                let msg = format!("Interpolation failed: {}", e);
                warn!("{}", msg);
                feedback_writer.write(GridOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}

/// Handles the bulk fill actions from the "Grid" menu.
pub fn handle_fill_request(
    mut events: EventReader<FillGridRequest>,
    mut state: ResMut<SensorGridState>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    for event in events.read() {
        match event.fill {
            GridFill::Random => {
                let mut rng = rand::rng();
                let (rows, columns) = (state.grid.rows(), state.grid.columns());
                for row in 0..rows {
                    for col in 0..columns {
                        let value = rng.random_range(0..100) as f64;
                        if let Err(e) = state.grid.set(row, col, value) {
                            // Unreachable with in-range loop bounds.
                            error!("Random fill failed at ({}, {}): {}", row, col, e);
                        }
                    }
                }
                info!("Filled {}x{} grid with random values.", rows, columns);
                feedback_writer.write(GridOperationFeedback {
                    message: "Grid filled with random values.".to_string(),
                    is_error: false,
                });
            }
            GridFill::Zeros => {
                state.grid.fill(0.0);
                info!("Reset grid to zeros.");
                feedback_writer.write(GridOperationFeedback {
                    message: "Grid reset to zeros.".to_string(),
                    is_error: false,
                });
            }
        }
        data_modified_writer.write(GridDataModifiedEvent);
    }
}
