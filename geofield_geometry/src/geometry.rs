use crate::{Bounds, Coordinates};
use anyhow::{Result, anyhow, bail};
use geo::{BoundingRect, Centroid};
use wkt::{ToWkt, TryFromWkt};

/// A parsed geometry value.
///
/// Wraps the `geo` ecosystem geometry so the rest of the workspace never
/// handles raw WKT or GeoJSON text directly.
#[derive(Clone, PartialEq, Debug)]
pub struct Geometry(geo_types::Geometry<f64>);

impl Geometry {
	#[must_use]
	pub fn new_point(lon: f64, lat: f64) -> Self {
		Self(geo_types::Geometry::Point(geo_types::Point::new(lon, lat)))
	}

	/// Parses a WKT string, e.g. `POINT(10 20)`.
	pub fn from_wkt(value: &str) -> Result<Self> {
		let geometry = geo_types::Geometry::<f64>::try_from_wkt_str(value)
			.map_err(|e| anyhow!("invalid WKT: {e}"))?;
		Ok(Self(geometry))
	}

	/// Parses a GeoJSON geometry object, e.g. `{"type":"Point","coordinates":[10,20]}`.
	pub fn from_geojson(value: &str) -> Result<Self> {
		let geojson::GeoJson::Geometry(geometry) = value.parse()? else {
			bail!("expected a GeoJSON geometry object");
		};
		Ok(Self(geo_types::Geometry::<f64>::try_from(geometry.value)?))
	}

	/// Parses the widget shorthand `lat,lon` into a point.
	pub fn from_latlon_pair(value: &str) -> Result<Self> {
		let (lat, lon) = value
			.split_once(',')
			.ok_or_else(|| anyhow!("expected a 'lat,lon' pair, got '{value}'"))?;
		let lat: f64 = lat.trim().parse()?;
		let lon: f64 = lon.trim().parse()?;
		Ok(Self::new_point(lon, lat))
	}

	/// The GeoJSON-style type name, e.g. `"Point"` or `"MultiPolygon"`.
	#[must_use]
	pub fn geometry_type(&self) -> &'static str {
		match &self.0 {
			geo_types::Geometry::Point(_) => "Point",
			geo_types::Geometry::Line(_) => "Line",
			geo_types::Geometry::LineString(_) => "LineString",
			geo_types::Geometry::Polygon(_) => "Polygon",
			geo_types::Geometry::MultiPoint(_) => "MultiPoint",
			geo_types::Geometry::MultiLineString(_) => "MultiLineString",
			geo_types::Geometry::MultiPolygon(_) => "MultiPolygon",
			geo_types::Geometry::GeometryCollection(_) => "GeometryCollection",
			geo_types::Geometry::Rect(_) => "Rect",
			geo_types::Geometry::Triangle(_) => "Triangle",
		}
	}

	/// The centroid, or `None` for empty geometries.
	#[must_use]
	pub fn centroid(&self) -> Option<Coordinates> {
		self.0.centroid().map(Coordinates::from)
	}

	/// The bounding box, or `None` for empty geometries.
	#[must_use]
	pub fn bounds(&self) -> Option<Bounds> {
		self.0.bounding_rect().map(Bounds::from)
	}

	/// Geohash of the centroid at the given length. Non-point geometries
	/// collapse to their centroid cell.
	pub fn geohash(&self, len: usize) -> Result<String> {
		let centroid = self
			.centroid()
			.ok_or_else(|| anyhow!("geometry has no centroid"))?;
		geohash::encode(
			geohash::Coord {
				x: centroid.lon(),
				y: centroid.lat(),
			},
			len,
		)
		.map_err(|e| anyhow!("geohash encoding failed: {e}"))
	}

	/// The position if this is a point geometry.
	#[must_use]
	pub fn as_point(&self) -> Option<Coordinates> {
		match &self.0 {
			geo_types::Geometry::Point(p) => Some(Coordinates::from(*p)),
			_ => None,
		}
	}

	#[must_use]
	pub fn to_wkt(&self) -> String {
		self.0.wkt_string()
	}

	#[must_use]
	pub fn to_geojson(&self) -> geojson::Geometry {
		geojson::Geometry::new(geojson::Value::from(&self.0))
	}

	#[must_use]
	pub fn inner(&self) -> &geo_types::Geometry<f64> {
		&self.0
	}
}

impl From<geo_types::Geometry<f64>> for Geometry {
	fn from(value: geo_types::Geometry<f64>) -> Self {
		Self(value)
	}
}
