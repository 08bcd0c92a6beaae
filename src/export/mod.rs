//! Export of computed model outputs.
//!
//! Provides the per-layer CSV parameter table and the (placeholder) SVG
//! crease-pattern frame.

mod csv_export;
mod svg_export;

pub use csv_export::{export_layer_table, export_layer_table_timestamped, write_layer_table};
pub use svg_export::export_crease_pattern_frame;
