use geofield::GeofieldItem;
use geofield_geometry::{Geometry, GeometryParser};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_json::{Map, Value};

/// Properties attached to every map feature.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FeatureProperties {
	pub description: Option<String>,
	/// Caller-supplied payload, e.g. pre-rendered field values for popups.
	/// Carried through unchanged.
	pub data: Option<Value>,
}

/// One entry of map-initialization data: a parsed geometry plus the
/// properties the popup layer reads.
#[derive(Clone, Debug, PartialEq)]
pub struct MapFeature {
	pub geometry: Geometry,
	pub properties: FeatureProperties,
}

impl MapFeature {
	/// The GeoJSON encoding. `description` and `data` serialize as explicit
	/// nulls when absent; the client checks for them unconditionally.
	#[must_use]
	pub fn to_geojson(&self) -> geojson::Feature {
		let mut properties = Map::new();
		properties.insert(
			"description".to_string(),
			self.properties.description.clone().map_or(Value::Null, Value::String),
		);
		properties.insert(
			"data".to_string(),
			self.properties.data.clone().unwrap_or(Value::Null),
		);

		geojson::Feature {
			bbox: None,
			geometry: Some(self.geometry.to_geojson()),
			id: None,
			properties: Some(properties),
			foreign_members: None,
		}
	}
}

/// A field value as handed to the map layer: either a typed item or a raw
/// string from an unprocessed source.
#[derive(Clone, Debug)]
pub enum FieldSource {
	Item(GeofieldItem),
	Raw(String),
}

/// Assembles map features from field values.
///
/// The parser is an injected collaborator; the builder itself holds no
/// state between calls.
pub struct FeatureBuilder<'a, P: GeometryParser> {
	parser: &'a P,
}

impl<'a, P: GeometryParser> FeatureBuilder<'a, P> {
	pub fn new(parser: &'a P) -> Self {
		Self { parser }
	}

	/// Builds one feature per resolvable item, in input order.
	///
	/// Items whose geometry cannot be resolved are dropped silently; partial
	/// output is expected and the renderer shows its empty state when
	/// nothing survives. Descriptions attach positionally, with the first
	/// entry as fallback for items beyond the end of the list.
	pub fn build(
		&self,
		items: &[FieldSource],
		descriptions: &[String],
		additional_data: Option<&Value>,
	) -> Vec<MapFeature> {
		lazy_static! {
			// Raw strings are only considered when they look like a point.
			static ref POINT_PATTERN: Regex = Regex::new(r"^POINT.*\(.*\)$").unwrap();
		}

		let mut features = Vec::new();
		for (delta, item) in items.iter().enumerate() {
			let geometry = match item {
				FieldSource::Item(item) if !item.is_empty() => self.parser.load(item.value()),
				FieldSource::Item(_) => None,
				FieldSource::Raw(value) if POINT_PATTERN.is_match(value) => self.parser.load(value),
				FieldSource::Raw(_) => None,
			};
			let Some(geometry) = geometry else {
				debug!("no usable geometry for item {delta}, skipped");
				continue;
			};

			let description = descriptions.get(delta).or_else(|| descriptions.first()).cloned();
			features.push(MapFeature {
				geometry,
				properties: FeatureProperties {
					description,
					data: additional_data.cloned(),
				},
			});
		}
		features
	}
}

/// Wraps built features into the FeatureCollection the client map loads.
#[must_use]
pub fn to_feature_collection(features: &[MapFeature]) -> geojson::FeatureCollection {
	geojson::FeatureCollection {
		bbox: None,
		features: features.iter().map(MapFeature::to_geojson).collect(),
		foreign_members: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geofield_geometry::GeoBackend;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	fn build(
		items: &[FieldSource],
		descriptions: &[String],
		additional_data: Option<&Value>,
	) -> Vec<MapFeature> {
		FeatureBuilder::new(&GeoBackend).build(items, descriptions, additional_data)
	}

	fn raw(value: &str) -> FieldSource {
		FieldSource::Raw(value.to_string())
	}

	#[test]
	fn empty_input_builds_nothing() {
		assert_eq!(build(&[], &[], None), vec![]);
	}

	#[test]
	fn unparsable_item_is_dropped() {
		let items = [raw("POINT(10 20)"), raw("POINT(nowhere)")];
		let descriptions = ["first".to_string(), "second".to_string()];

		let features = build(&items, &descriptions, None);

		assert_eq!(features.len(), 1);
		assert_eq!(features[0].properties.description.as_deref(), Some("first"));
	}

	#[test]
	fn raw_values_need_the_point_shape() {
		// A linestring parses fine, but raw strings are gated on the point
		// pattern before any parse is attempted.
		let items = [raw("LINESTRING(0 0, 1 1)"), raw("POINT(1 2)")];
		let features = build(&items, &[], None);

		assert_eq!(features.len(), 1);
		assert_eq!(
			features[0].geometry.as_point(),
			Some(geofield_geometry::Coordinates::new(1.0, 2.0))
		);
	}

	#[test]
	fn typed_items_accept_any_geometry() {
		let items = [
			FieldSource::Item(GeofieldItem::new("LINESTRING(0 0, 1 1)", &GeoBackend)),
			FieldSource::Item(GeofieldItem::new("", &GeoBackend)),
		];
		let features = build(&items, &[], None);

		assert_eq!(features.len(), 1);
		assert_eq!(features[0].geometry.geometry_type(), "LineString");
	}

	#[test]
	fn description_falls_back_to_first_entry() {
		let items = [raw("POINT(1 1)"), raw("POINT(2 2)"), raw("POINT(3 3)")];
		let descriptions = ["only".to_string()];

		let features = build(&items, &descriptions, None);

		assert_eq!(features.len(), 3);
		for feature in &features {
			assert_eq!(feature.properties.description.as_deref(), Some("only"));
		}
	}

	#[test]
	fn missing_descriptions_stay_none() {
		let features = build(&[raw("POINT(1 1)")], &[], None);
		assert_eq!(features[0].properties.description, None);
	}

	#[test]
	fn additional_data_is_shared_across_features() {
		let data = json!({"title": "<em>rendered</em>", "weight": 3});
		let items = [raw("POINT(1 1)"), raw("POINT(2 2)")];

		let features = build(&items, &[], Some(&data));

		for feature in &features {
			assert_eq!(feature.properties.data.as_ref(), Some(&data));
		}
	}

	#[test]
	fn geojson_feature_shape() {
		let features = build(
			&[raw("POINT(10 20)")],
			&["A marker".to_string()],
			Some(&json!({"popup": "yes"})),
		);
		let json = serde_json::to_value(features[0].to_geojson()).unwrap();

		assert_eq!(
			json,
			json!({
				"type": "Feature",
				"geometry": {"type": "Point", "coordinates": [10.0, 20.0]},
				"properties": {"description": "A marker", "data": {"popup": "yes"}}
			})
		);
	}

	#[test]
	fn geojson_feature_nulls_are_explicit() {
		let features = build(&[raw("POINT(10 20)")], &[], None);
		let json = serde_json::to_value(features[0].to_geojson()).unwrap();

		assert_eq!(json["properties"]["description"], Value::Null);
		assert_eq!(json["properties"]["data"], Value::Null);
	}

	#[test]
	fn feature_collection_wraps_everything() {
		let features = build(&[raw("POINT(1 1)"), raw("POINT(2 2)")], &[], None);
		let collection = to_feature_collection(&features);

		assert_eq!(collection.features.len(), 2);
		let json = serde_json::to_value(&collection).unwrap();
		assert_eq!(json["type"], "FeatureCollection");
	}

	#[test]
	fn output_preserves_input_order() {
		let items = [raw("POINT(3 3)"), raw("POINT(1 1)"), raw("POINT(2 2)")];
		let features = build(&items, &[], None);

		let lons: Vec<f64> = features
			.iter()
			.map(|f| f.geometry.as_point().unwrap().lon())
			.collect();
		assert_eq!(lons, vec![3.0, 1.0, 2.0]);
	}
}
