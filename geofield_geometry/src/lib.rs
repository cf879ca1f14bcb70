//! Geometry backend for geospatial field values.
//!
//! Stored values arrive as WKT, GeoJSON geometry objects or bare `lat,lon`
//! pairs. This crate parses them into a [`Geometry`] and derives the measures
//! the field layer persists alongside the raw value: centroid, bounding box
//! and geohash. The [`GeometryParser`] trait is the soft boundary consumers
//! inject instead of reaching for a concrete parser.

mod bounds;
mod coordinates;
mod geometry;
mod parser;

pub use bounds::*;
pub use coordinates::*;
pub use geometry::*;
pub use parser::*;
