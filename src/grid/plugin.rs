// src/grid/plugin.rs
use bevy::prelude::*;

use super::events::{
    FillGridRequest, GridDataModifiedEvent, GridOperationFeedback, InterpolateCellRequest,
    UpdateCellEvent,
};
use super::resources::{GridConfig, GridRenderCache, SensorGridState};
use super::systems;
use crate::grid::definitions::SensorGrid;

// System sets for ordering: UI event emission happens during the egui pass,
// so the handlers only need to run before the render cache refresh.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GridSystemSet {
    ApplyChanges,
    RefreshCache,
}

/// Plugin owning the sensor grid data model and its mutation handlers.
pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GridSystemSet::ApplyChanges,
                GridSystemSet::RefreshCache.after(GridSystemSet::ApplyChanges),
            ),
        );

        app.init_resource::<GridRenderCache>();

        app.add_event::<UpdateCellEvent>()
            .add_event::<InterpolateCellRequest>()
            .add_event::<FillGridRequest>()
            .add_event::<GridOperationFeedback>()
            .add_event::<GridDataModifiedEvent>();

        app.add_systems(Startup, create_grid_from_config);

        app.add_systems(
            Update,
            (
                systems::logic::handle_cell_update,
                systems::logic::handle_interpolate_request,
                systems::logic::handle_fill_request,
            )
                .chain()
                .in_set(GridSystemSet::ApplyChanges),
        );

        info!("GridPlugin initialized.");
    }
}

/// Builds the grid resource from the parsed command-line configuration and
/// requests an initial render-cache fill.
fn create_grid_from_config(
    config: Res<GridConfig>,
    mut commands: Commands,
    mut data_modified_writer: EventWriter<GridDataModifiedEvent>,
) {
    info!(
        "Creating {}x{} sensor grid.",
        config.rows, config.columns
    );
    commands.insert_resource(SensorGridState {
        grid: SensorGrid::new(config.rows, config.columns),
    });
    data_modified_writer.write(GridDataModifiedEvent);
}
