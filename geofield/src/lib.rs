//! Field layer for geospatial values.
//!
//! Converts coordinates between decimal and sexagesimal notation, derives
//! the computed values stored alongside a raw geometry string, formats
//! points for display and generates random sample WKT.

pub mod dms;
pub mod format;
pub mod item;
pub mod wkt_generator;

pub use dms::*;
pub use format::*;
pub use item::*;
pub use wkt_generator::*;
