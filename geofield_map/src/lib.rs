//! Map layer: turns stored field values into the GeoJSON features a
//! client-side map consumes.

mod features;

pub use features::*;
