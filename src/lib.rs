//! Multi-attribute vehicle comparison: data model, per-category
//! normalisation, selection state, and the egui viewer built on top.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod selection;
pub mod series;
pub mod state;
pub mod ui;
