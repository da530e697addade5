// src/grid/resources.rs
use bevy::prelude::*;

use crate::ui::validation::ValidationState;

use super::definitions::SensorGrid;

/// Grid dimensions parsed from the command line before the app is built.
/// Window geometry goes straight into the `WindowPlugin` instead.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
}

/// The single in-process sensor grid. Mutated only by the handler systems
/// in `grid::systems::logic`; the UI layer communicates through events.
#[derive(Resource, Debug, Clone)]
pub struct SensorGridState {
    pub grid: SensorGrid,
}

/// Pre-processed data for rendering a single cell.
#[derive(Clone, Debug, Default)]
pub struct RenderableCellData {
    /// The string shown in the cell's text edit. Doubles as the edit
    /// buffer, so it may temporarily diverge from the stored value while
    /// the user is typing.
    pub display_text: String,
    /// Validation state of `display_text`, recomputed on every edit.
    pub validation_state: ValidationState,
}

/// Cached display strings and validation states for every cell, refreshed
/// whenever a `GridDataModifiedEvent` fires or the rounding toggle flips.
#[derive(Resource, Default, Debug)]
pub struct GridRenderCache {
    pub(crate) cells: Vec<Vec<RenderableCellData>>,
}

impl GridRenderCache {
    pub fn get_cell_data(&self, row: usize, col: usize) -> Option<&RenderableCellData> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    pub fn get_cell_data_mut(&mut self, row: usize, col: usize) -> Option<&mut RenderableCellData> {
        self.cells.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Ensures the cache matches the grid dimensions, padding with default
    /// cell data where rows or columns are missing.
    pub(crate) fn ensure_dimensions(&mut self, rows: usize, columns: usize) {
        self.cells.resize_with(rows, Vec::new);
        for row_cache in self.cells.iter_mut() {
            row_cache.resize_with(columns, RenderableCellData::default);
        }
    }
}
