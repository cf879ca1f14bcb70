use std::fmt::Debug;

/// A single position in WGS84 decimal degrees, stored as `[lon, lat]`.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(lon: f64, lat: f64) -> Self {
		Self([lon, lat])
	}

	#[must_use]
	pub fn lon(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0[1]
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<geo_types::Coord<f64>> for Coordinates {
	fn from(value: geo_types::Coord<f64>) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<geo_types::Point<f64>> for Coordinates {
	fn from(value: geo_types::Point<f64>) -> Self {
		Coordinates([value.x(), value.y()])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
