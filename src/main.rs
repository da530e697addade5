// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use clap::Parser;
use std::time::Duration;

use bevy_egui::EguiPlugin;

mod cli;
mod grid;
mod ui;

use grid::{GridConfig, GridPlugin};
use ui::EditorUiPlugin;

fn main() {
    let args = cli::Cli::parse();

    App::new()
        .insert_resource(GridConfig {
            rows: args.rows as usize,
            columns: args.columns as usize,
        })
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sensor Grid Editor".into(),
                        resolution: (args.width, args.height).into(),
                        // The table does not reflow well when resized.
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(GridPlugin)
        .add_plugins(EditorUiPlugin)
        .run();
}
