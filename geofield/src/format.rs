use crate::dms::{DmsComponent, decimal_to_dms};
use geofield_geometry::Geometry;

/// Output notations for point display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordFormat {
	/// Plain decimal degrees, e.g. `17.76972`.
	Decimal,
	/// Degrees, minutes and seconds, e.g. `17° 46' 11" N`.
	Dms,
	/// Degrees and decimal minutes, e.g. `17° 46.18333' N`.
	Dm,
}

/// Rendered latitude and longitude strings for one point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatLonDisplay {
	pub lat: String,
	pub lon: String,
}

/// Renders a point geometry in the requested notation.
///
/// Only points are displayable; any other geometry yields `None` and the
/// caller falls back to its empty state.
#[must_use]
pub fn format_point(geometry: &Geometry, format: CoordFormat) -> Option<LatLonDisplay> {
	let point = geometry.as_point()?;

	Some(match format {
		CoordFormat::Decimal => LatLonDisplay {
			lat: point.lat().to_string(),
			lon: point.lon().to_string(),
		},
		CoordFormat::Dms => {
			let dms = decimal_to_dms(point.lon(), point.lat());
			LatLonDisplay {
				lat: format_dms(&dms.lat),
				lon: format_dms(&dms.lon),
			}
		}
		CoordFormat::Dm => {
			let dms = decimal_to_dms(point.lon(), point.lat());
			LatLonDisplay {
				lat: format_dm(&dms.lat),
				lon: format_dm(&dms.lon),
			}
		}
	})
}

fn format_dms(component: &DmsComponent) -> String {
	format!(
		"{}° {}' {}\" {}",
		component.degrees, component.minutes, component.seconds, component.orientation
	)
}

// Seconds fold into decimal minutes, fixed at five decimals.
fn format_dm(component: &DmsComponent) -> String {
	let minutes = f64::from(component.minutes) + component.seconds / 60.0;
	format!("{}° {:.5}' {}", component.degrees, minutes, component.orientation)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn point(lon: f64, lat: f64) -> Geometry {
		Geometry::new_point(lon, lat)
	}

	#[test]
	fn decimal_format() {
		let display = format_point(&point(12.5, 42.0), CoordFormat::Decimal).unwrap();
		assert_eq!(display.lat, "42");
		assert_eq!(display.lon, "12.5");
	}

	#[test]
	fn dms_format() {
		let display = format_point(&point(17.76972, 17.76972), CoordFormat::Dms).unwrap();
		assert_eq!(display.lat, "17° 46' 11\" N");
		assert_eq!(display.lon, "17° 46' 11\" E");
	}

	#[test]
	fn dms_format_negative_axes() {
		let display = format_point(&point(-17.76972, -17.76972), CoordFormat::Dms).unwrap();
		assert_eq!(display.lat, "17° 46' 11\" S");
		assert_eq!(display.lon, "17° 46' 11\" W");
	}

	#[test]
	fn dm_format_folds_seconds_into_minutes() {
		let display = format_point(&point(17.76972, 17.76972), CoordFormat::Dm).unwrap();
		assert_eq!(display.lat, "17° 46.18333' N");
		assert_eq!(display.lon, "17° 46.18333' E");
	}

	#[rstest]
	#[case("LINESTRING(0 0, 1 1)")]
	#[case("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))")]
	fn non_points_are_not_displayable(#[case] wkt: &str) {
		let geometry = Geometry::from_wkt(wkt).unwrap();
		assert_eq!(format_point(&geometry, CoordFormat::Dms), None);
	}
}
