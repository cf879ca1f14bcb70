use std::fmt::Debug;

/// Axis-aligned bounding box of a geometry.
///
/// Field names follow the storage column layout: `left`/`right` are the
/// minimum and maximum longitude, `bottom`/`top` the minimum and maximum
/// latitude.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
	pub left: f64,
	pub bottom: f64,
	pub right: f64,
	pub top: f64,
}

impl Bounds {
	#[must_use]
	pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
		Self {
			left,
			bottom,
			right,
			top,
		}
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.top - self.bottom
	}
}

impl From<geo_types::Rect<f64>> for Bounds {
	fn from(rect: geo_types::Rect<f64>) -> Self {
		Bounds {
			left: rect.min().x,
			bottom: rect.min().y,
			right: rect.max().x,
			top: rect.max().y,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_extent() {
		let b = Bounds::new(-10.0, -5.0, 20.0, 15.0);
		assert_eq!(b.width(), 30.0);
		assert_eq!(b.height(), 20.0);
	}

	#[test]
	fn from_rect() {
		let rect = geo_types::Rect::new(
			geo_types::Coord { x: 1.0, y: 2.0 },
			geo_types::Coord { x: 3.0, y: 4.0 },
		);
		let b = Bounds::from(rect);
		assert_eq!(b, Bounds::new(1.0, 2.0, 3.0, 4.0));
	}
}
