// src/ui/elements/editor/main_editor.rs
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui_extras::{Column, TableBody, TableBuilder};

use crate::grid::{
    events::{
        FillGridRequest, GridOperationFeedback, InterpolateCellRequest, UpdateCellEvent,
    },
    resources::{GridRenderCache, SensorGridState},
};
use crate::ui::{elements::top_panel::show_top_panel, UiFeedbackState};

use super::state::EditorWindowState;
use super::table_body::grid_table_body;

/// Bundles the event writers the editor UI hands down to its panels.
#[derive(SystemParam)]
pub struct GridEventWriters<'w> {
    pub cell_update: EventWriter<'w, UpdateCellEvent>,
    pub interpolate: EventWriter<'w, InterpolateCellRequest>,
    pub fill: EventWriter<'w, FillGridRequest>,
    pub feedback: EventWriter<'w, GridOperationFeedback>,
}

/// Top-level egui system: menu bar, feedback row and the editable grid
/// table. Runs in `EguiContextPass`; all mutations go through events.
pub fn grid_editor_ui(
    mut contexts: EguiContexts,
    state: ResMut<EditorWindowState>,
    render_cache: ResMut<GridRenderCache>,
    mut writers: GridEventWriters,
    grid_state: Option<Res<SensorGridState>>,
    ui_feedback: Res<UiFeedbackState>,
) {
    let ctx = contexts.ctx_mut();
    let state = state.into_inner();
    let render_cache = render_cache.into_inner();

    let Some(grid_state) = grid_state else {
        // Startup hasn't created the grid yet.
        return;
    };
    let rows = grid_state.grid.rows();
    let columns = grid_state.grid.columns();

    egui::CentralPanel::default().show(ctx, |ui| {
        let text_style = egui::TextStyle::Body;
        let row_height = ui.text_style_height(&text_style) + ui.style().spacing.item_spacing.y;

        show_top_panel(ui, state, &mut writers);

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
        ui.separator();

        egui::ScrollArea::both()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let mut table_builder = TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .min_scrolled_height(0.0)
                    // Narrow leading column for row indices.
                    .column(Column::exact(24.0));

                for _ in 0..columns {
                    table_builder = table_builder
                        .column(Column::initial(80.0).at_least(40.0).clip(true));
                }

                table_builder
                    .header(20.0, |mut header_row| {
                        header_row.col(|_ui| {});
                        for col_index in 0..columns {
                            header_row.col(|ui| {
                                ui.label(
                                    egui::RichText::new(col_index.to_string()).weak(),
                                );
                            });
                        }
                    })
                    .body(|body: TableBody| {
                        grid_table_body(
                            body,
                            row_height,
                            rows,
                            columns,
                            render_cache,
                            &mut writers,
                        );
                    });
            });
    });
}
