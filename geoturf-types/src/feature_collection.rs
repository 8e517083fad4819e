//! Feature collection envelope codec.

use std::ops::Add;

use geojson::{JsonObject, JsonValue};

use crate::error::GeoJsonError;
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::geometry_kind::FEATURE_COLLECTION_TYPE;
use crate::traits::GeoJsonConvertible;

/// Ordered set of features of any kind.
///
/// The order of the features is kept through encoding and decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

/// A feature that was left out while decoding a [`FeatureCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFeature {
    /// Position of the feature in the `features` array of the envelope.
    pub index: usize,
    /// Reason the feature could not be decoded.
    pub reason: GeoJsonError,
}

/// Result of [`FeatureCollection::decode_envelope`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionDecode {
    /// Features that were decoded successfully.
    pub collection: FeatureCollection,
    /// Features that were dropped.
    pub skipped: Vec<SkippedFeature>,
}

impl FeatureCollection {
    /// Creates a new collection.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Features of the collection in order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Iterates over the features.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Feature> {
        self.features.iter()
    }

    /// Appends a feature to the end of the collection.
    pub fn push(&mut self, feature: impl Into<Feature>) {
        self.features.push(feature.into());
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Decodes a FeatureCollection envelope, dropping the features that cannot be decoded.
    ///
    /// See [`FeatureCollection::decode_envelope`] to find out which features were dropped.
    pub fn from_envelope(envelope: &JsonObject) -> Self {
        Self::decode_envelope(envelope).collection
    }

    /// Decodes a FeatureCollection envelope.
    ///
    /// Every entry of `features` is decoded according to its `geometry.type`. Entries with unsupported type or
    /// invalid content are skipped and reported in [`CollectionDecode::skipped`]. This never fails: an envelope
    /// without features gives an empty collection.
    pub fn decode_envelope(envelope: &JsonObject) -> CollectionDecode {
        let Some(entries) = envelope.get("features").and_then(JsonValue::as_array) else {
            return CollectionDecode::default();
        };

        let mut features: Vec<Feature> = Vec::with_capacity(entries.len());
        let mut skipped = vec![];
        for (index, entry) in entries.iter().enumerate() {
            let decoded = entry
                .as_object()
                .ok_or_else(|| GeoJsonError::InvalidGeometry("feature is not an object".into()))
                .and_then(Feature::<Geometry>::from_envelope);

            match decoded {
                Ok(feature) => features.push(feature),
                Err(reason) => {
                    log::warn!("Feature {index} of the collection is skipped: {reason}");
                    skipped.push(SkippedFeature { index, reason });
                }
            }
        }

        CollectionDecode {
            collection: Self::new(features),
            skipped,
        }
    }
}

impl GeoJsonConvertible for FeatureCollection {
    fn to_envelope(&self) -> JsonObject {
        let features = self
            .features
            .iter()
            .map(|f| JsonValue::Object(f.to_envelope()))
            .collect();

        let mut envelope = JsonObject::new();
        envelope.insert("type".into(), FEATURE_COLLECTION_TYPE.into());
        envelope.insert("features".into(), JsonValue::Array(features));
        envelope.insert("properties".into(), JsonValue::Null);

        envelope
    }
}

impl Add for FeatureCollection {
    type Output = FeatureCollection;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.features.extend(rhs.features);
        self
    }
}

impl Add for &FeatureCollection {
    type Output = FeatureCollection;

    fn add(self, rhs: Self) -> Self::Output {
        self.features
            .iter()
            .chain(rhs.features.iter())
            .cloned()
            .collect()
    }
}

impl<F: Into<Feature>> FromIterator<F> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<F: Into<Feature>> Extend<F> for FeatureCollection {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        self.features.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{latlon, LineString, Point, Polygon};
    use assert_matches::assert_matches;
    use serde_json::json;

    fn object(value: JsonValue) -> JsonObject {
        match value {
            JsonValue::Object(o) => o,
            _ => panic!("not an object"),
        }
    }

    fn point(lat: f64, lon: f64) -> Point {
        Point::new(latlon!(lat, lon))
    }

    #[test]
    fn unknown_kind_is_dropped() {
        let envelope = object(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [30.0, 30.0], "properties": null},
                    "properties": null,
                },
                {
                    "type": "Feature",
                    "geometry": {"type": "MultiPoint", "coordinates": [[30.0, 30.0]], "properties": null},
                    "properties": null,
                },
            ],
            "properties": null,
        }));

        let decoded = FeatureCollection::decode_envelope(&envelope);
        assert_eq!(decoded.collection.len(), 1);
        assert_eq!(
            decoded.collection.features()[0].geometry(),
            &Geometry::Point(point(30.0, 30.0))
        );
        assert_eq!(decoded.skipped.len(), 1);
        assert_eq!(decoded.skipped[0].index, 1);
        assert_matches!(&decoded.skipped[0].reason, GeoJsonError::UnsupportedKind(kind) if kind == "MultiPoint");

        assert_eq!(
            FeatureCollection::from_envelope(&envelope),
            decoded.collection
        );
    }

    #[test]
    fn invalid_members_are_dropped() {
        let envelope = object(json!({
            "type": "FeatureCollection",
            "features": [
                "not a feature",
                {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 1.0]]]}},
                {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}},
                {"type": "Feature", "properties": null},
            ],
        }));

        let decoded = FeatureCollection::decode_envelope(&envelope);
        assert_eq!(decoded.collection.len(), 1);
        let indices: Vec<usize> = decoded.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 3]);
    }

    #[test]
    fn empty_input_gives_empty_collection() {
        assert!(FeatureCollection::from_envelope(&JsonObject::new()).is_empty());
        let envelope = object(json!({"type": "FeatureCollection", "features": []}));
        let decoded = FeatureCollection::decode_envelope(&envelope);
        assert!(decoded.collection.is_empty());
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn envelope_keeps_order() {
        let features: Vec<Feature> = vec![
            point(1.0, 2.0).into(),
            LineString::new(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]).into(),
            Polygon::new(vec![vec![
                latlon!(0.0, 0.0),
                latlon!(0.0, 1.0),
                latlon!(1.0, 1.0),
                latlon!(0.0, 0.0),
            ]])
            .into(),
        ];
        let collection: FeatureCollection = features.into_iter().collect();

        let envelope = collection.to_envelope();
        assert_eq!(envelope["type"], JsonValue::from("FeatureCollection"));
        assert_eq!(envelope["properties"], JsonValue::Null);
        let kinds: Vec<&str> = envelope["features"]
            .as_array()
            .expect("features array")
            .iter()
            .filter_map(|f| f["geometry"]["type"].as_str())
            .collect();
        assert_eq!(kinds, vec!["Point", "LineString", "Polygon"]);

        assert_eq!(FeatureCollection::from_envelope(&envelope), collection);
    }

    #[test]
    fn concatenation() {
        let a = FeatureCollection::from_iter([point(1.0, 1.0), point(2.0, 2.0)]);
        let b = FeatureCollection::from_iter([point(3.0, 3.0)]);
        let c = FeatureCollection::from_iter([point(4.0, 4.0), point(5.0, 5.0)]);

        let ab = &a + &b;
        let expected: Vec<Feature> = a.iter().chain(b.iter()).cloned().collect();
        assert_eq!(ab.features(), expected.as_slice());
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);

        let left = (a.clone() + b.clone()) + c.clone();
        let right = a + (b + c);
        assert_eq!(left, right);
        assert_eq!(left.len(), 5);
    }

    #[test]
    fn push_and_extend() {
        let mut collection = FeatureCollection::default();
        collection.push(point(1.0, 1.0));
        collection.extend([Feature::<Geometry>::from(point(2.0, 2.0))]);
        assert_eq!(collection.len(), 2);
        assert_eq!((&collection).into_iter().count(), 2);
    }
}
