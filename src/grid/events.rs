// src/grid/events.rs
use bevy::prelude::Event;

/// Sent by the cell widgets when the user commits a new numeric value.
/// Handled by `grid::systems::logic::handle_cell_update`.
#[derive(Event, Debug, Clone)]
pub struct UpdateCellEvent {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// Sent by the "Interpolate Cell" button (and the Enter binding inside a
/// cell). Handled by `grid::systems::logic::handle_interpolate_request`.
#[derive(Event, Debug, Clone)]
pub struct InterpolateCellRequest {
    pub row: usize,
    pub col: usize,
}

/// Bulk fill operations available from the "Grid" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFill {
    /// Uniform random integers in [0, 100), stored as floats.
    Random,
    Zeros,
}

#[derive(Event, Debug, Clone)]
pub struct FillGridRequest {
    pub fill: GridFill,
}

/// Outcome of a grid operation, surfaced to the user via the feedback row
/// instead of a modal error dialog.
#[derive(Event, Debug, Clone)]
pub struct GridOperationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Signals that grid contents changed and cached display strings are stale.
#[derive(Event, Debug, Clone)]
pub struct GridDataModifiedEvent;
