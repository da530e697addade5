// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod common;
pub mod elements;
pub mod systems;
pub mod validation;

use crate::grid::GridSystemSet;
use elements::editor::grid_editor_ui;
use elements::editor::state::EditorWindowState;
use systems::{handle_ui_feedback, refresh_render_cache};

/// Last operation outcome shown in the feedback row under the top panel.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the sensor grid editor UI.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .add_systems(
                Update,
                (
                    handle_ui_feedback,
                    refresh_render_cache.in_set(GridSystemSet::RefreshCache),
                ),
            )
            .add_systems(EguiContextPass, grid_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
