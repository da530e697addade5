// src/grid/systems/mod.rs

pub mod logic;
