use crate::Geometry;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Resolves a stored field value into a parsed geometry.
///
/// Failure is not an error at this boundary: a value that cannot be parsed
/// yields `None` and the caller decides how to degrade. Consumers take this
/// trait instead of a concrete backend.
pub trait GeometryParser {
	fn load(&self, value: &str) -> Option<Geometry>;
}

/// Default backend. Detects the input format by shape: GeoJSON objects start
/// with `{`, bare `lat,lon` pairs are two numbers, everything else is tried
/// as WKT.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoBackend;

impl GeometryParser for GeoBackend {
	fn load(&self, value: &str) -> Option<Geometry> {
		lazy_static! {
			static ref LATLON_PAIR: Regex =
				Regex::new(r"^[+-]?\d+(\.\d+)?\s*,\s*[+-]?\d+(\.\d+)?$").unwrap();
		}

		let value = value.trim();
		if value.is_empty() {
			return None;
		}

		let result = if value.starts_with('{') {
			Geometry::from_geojson(value)
		} else if LATLON_PAIR.is_match(value) {
			Geometry::from_latlon_pair(value)
		} else {
			Geometry::from_wkt(value)
		};

		match result {
			Ok(geometry) => Some(geometry),
			Err(e) => {
				debug!("unparsable geometry value '{value}': {e}");
				None
			}
		}
	}
}
