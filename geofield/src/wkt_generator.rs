use rand::Rng;
use rand::rngs::ThreadRng;
use wkt::ToWkt;

// Sample coordinates stay clear of the poles so projected maps render them.
const LON_RANGE: std::ops::Range<f64> = -180.0..180.0;
const LAT_RANGE: std::ops::Range<f64> = -84.0..84.0;

/// Generates random WKT values, used for sample field content.
pub struct WktGenerator<R: Rng> {
	rng: R,
}

impl WktGenerator<ThreadRng> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			rng: rand::thread_rng(),
		}
	}
}

impl Default for WktGenerator<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> WktGenerator<R> {
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// A random geometry of a random supported type.
	pub fn generate_geometry(&mut self) -> String {
		match self.rng.gen_range(0..4) {
			0 => self.generate_point(None),
			1 => self.generate_multipoint(),
			2 => self.generate_linestring(None, None),
			_ => self.generate_polygon(None, None),
		}
	}

	/// A point at the given position, or a random one.
	pub fn generate_point(&mut self, point: Option<(f64, f64)>) -> String {
		let (lon, lat) = point.unwrap_or_else(|| self.random_lonlat());
		geo_types::Point::new(lon, lat).wkt_string()
	}

	pub fn generate_multipoint(&mut self) -> String {
		let count = self.rng.gen_range(2..=5);
		let points: Vec<geo_types::Point<f64>> = (0..count)
			.map(|_| {
				let (lon, lat) = self.random_lonlat();
				geo_types::Point::new(lon, lat)
			})
			.collect();
		geo_types::MultiPoint::from(points).wkt_string()
	}

	/// A random walk starting at `start`, `segments` steps long.
	pub fn generate_linestring(&mut self, start: Option<(f64, f64)>, segments: Option<usize>) -> String {
		let coords = self.walk_coords(start, segments);
		geo_types::LineString::from(coords).wkt_string()
	}

	/// A closed ring around a random walk; the first position is repeated
	/// as the last one.
	pub fn generate_polygon(&mut self, start: Option<(f64, f64)>, segments: Option<usize>) -> String {
		let mut coords = self.walk_coords(start, segments);
		coords.push(coords[0]);
		geo_types::Polygon::new(geo_types::LineString::from(coords), vec![]).wkt_string()
	}

	fn walk_coords(&mut self, start: Option<(f64, f64)>, segments: Option<usize>) -> Vec<(f64, f64)> {
		let segments = segments.unwrap_or_else(|| self.rng.gen_range(3..=7));
		let (mut lon, mut lat) = start.unwrap_or_else(|| self.random_lonlat());

		let mut coords = Vec::with_capacity(segments);
		coords.push((lon, lat));
		for _ in 1..segments {
			lon += self.rng.gen_range(-1.0..1.0);
			lat += self.rng.gen_range(-1.0..1.0);
			coords.push((lon, lat));
		}
		coords
	}

	fn random_lonlat(&mut self) -> (f64, f64) {
		(
			self.rng.gen_range(LON_RANGE),
			self.rng.gen_range(LAT_RANGE),
		)
	}
}
