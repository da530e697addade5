// src/ui/elements/editor/mod.rs

pub mod main_editor;
pub mod state;
pub mod table_body;

pub use main_editor::grid_editor_ui;
pub use state::EditorWindowState;
