// src/grid/mod.rs

// --- Public Interface ---
pub mod definitions;
pub mod events;
pub mod plugin;
pub mod resources;

// Handler systems are internal implementation details.
pub(crate) mod systems;

// Re-export types needed externally (mainly by the UI layer).
pub use definitions::{GridError, SensorGrid};
pub use plugin::{GridPlugin, GridSystemSet};
pub use resources::{GridConfig, SensorGridState};
