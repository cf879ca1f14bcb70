use geofield_geometry::GeometryParser;
use log::debug;
use serde::{Deserialize, Serialize};

/// Stored geohash length, matching the width of the storage column.
pub const GEOHASH_LENGTH: usize = 12;

/// Measures derived from the stored geometry when a value is written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedValues {
	pub geo_type: String,
	pub lon: f64,
	pub lat: f64,
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub geohash: String,
	pub latlon: String,
}

/// A single geospatial field value: the raw stored string plus the
/// denormalized measures derived from it.
///
/// The computed block is `None` whenever the stored value does not resolve
/// to a geometry; writing a broken value is not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeofieldItem {
	value: String,
	computed: Option<ComputedValues>,
}

impl GeofieldItem {
	pub fn new(value: impl Into<String>, parser: &impl GeometryParser) -> Self {
		let mut item = Self {
			value: value.into(),
			computed: None,
		};
		item.populate_computed_values(parser);
		item
	}

	#[must_use]
	pub fn value(&self) -> &str {
		&self.value
	}

	#[must_use]
	pub fn computed(&self) -> Option<&ComputedValues> {
		self.computed.as_ref()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.value.is_empty()
	}

	/// Replaces the stored value and rederives the computed block.
	pub fn set_value(&mut self, value: impl Into<String>, parser: &impl GeometryParser) {
		self.value = value.into();
		self.populate_computed_values(parser);
	}

	fn populate_computed_values(&mut self, parser: &impl GeometryParser) {
		self.computed = None;

		let Some(geometry) = parser.load(&self.value) else {
			return;
		};
		let (Some(centroid), Some(bounds)) = (geometry.centroid(), geometry.bounds()) else {
			debug!("geometry '{}' has no extent, computed values skipped", self.value);
			return;
		};
		let geohash = match geometry.geohash(GEOHASH_LENGTH) {
			Ok(geohash) => geohash,
			Err(e) => {
				debug!("geohash failed for '{}': {e}", self.value);
				return;
			}
		};

		self.computed = Some(ComputedValues {
			geo_type: geometry.geometry_type().to_string(),
			lon: centroid.lon(),
			lat: centroid.lat(),
			left: bounds.left,
			top: bounds.top,
			right: bounds.right,
			bottom: bounds.bottom,
			geohash,
			latlon: format!("{},{}", centroid.lat(), centroid.lon()),
		});
	}
}
