use serde::{Deserialize, Serialize};

/// One axis of a sexagesimal coordinate.
///
/// `orientation` stays a plain character: stored widget data may carry any
/// letter, and only `'W'` and `'S'` flip the sign on conversion. Every other
/// letter reads as positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DmsComponent {
	pub orientation: char,
	pub degrees: u32,
	pub minutes: u32,
	pub seconds: f64,
}

impl DmsComponent {
	#[must_use]
	pub fn new(orientation: char, degrees: u32, minutes: u32, seconds: f64) -> Self {
		Self {
			orientation,
			degrees,
			minutes,
			seconds,
		}
	}
}

/// A position as a pair of sexagesimal components, one per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DmsPoint {
	pub lon: DmsComponent,
	pub lat: DmsComponent,
}

impl DmsPoint {
	#[must_use]
	pub fn new(lon: DmsComponent, lat: DmsComponent) -> Self {
		Self { lon, lat }
	}
}

/// Converts a sexagesimal point to decimal `(lon, lat)` degrees.
///
/// Never fails: inputs are taken at face value and no range check is applied.
#[must_use]
pub fn dms_to_decimal(point: &DmsPoint) -> (f64, f64) {
	let lon = f64::from(point.lon.degrees) + f64::from(point.lon.minutes) / 60.0 + point.lon.seconds / 3600.0;
	let lat = f64::from(point.lat.degrees) + f64::from(point.lat.minutes) / 60.0 + point.lat.seconds / 3600.0;

	let lon = if point.lon.orientation == 'W' { -lon } else { lon };
	let lat = if point.lat.orientation == 'S' { -lat } else { lat };

	(lon, lat)
}

/// Converts decimal degrees to sexagesimal components.
///
/// Degrees and minutes truncate, seconds round to the nearest integer. A
/// seconds value that rounds up to 60 is left as-is rather than carried into
/// the minutes; stored display values depend on this exact shape.
#[must_use]
pub fn decimal_to_dms(lon: f64, lat: f64) -> DmsPoint {
	let lat_direction = if lat < 0.0 { 'S' } else { 'N' };
	let lon_direction = if lon < 0.0 { 'W' } else { 'E' };

	let lat_degrees = lat.abs().floor();
	let lon_degrees = lon.abs().floor();

	let lat_remainder = (lat.abs() - lat_degrees) * 60.0;
	let lon_remainder = (lon.abs() - lon_degrees) * 60.0;

	let lat_minutes = lat_remainder.floor();
	let lon_minutes = lon_remainder.floor();

	let lat_seconds = ((lat_remainder - lat_minutes) * 60.0).round();
	let lon_seconds = ((lon_remainder - lon_minutes) * 60.0).round();

	DmsPoint::new(
		DmsComponent::new(lon_direction, lon_degrees as u32, lon_minutes as u32, lon_seconds),
		DmsComponent::new(lat_direction, lat_degrees as u32, lat_minutes as u32, lat_seconds),
	)
}
