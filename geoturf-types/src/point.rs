use geojson::{JsonObject, PointType};
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::GeoJsonError;
use crate::feature::feature_envelope;
use crate::geometry_kind::GeometryKind;
use crate::traits::{CoordinateCodec, FeatureGeometry, GeoJsonConvertible};

/// Point geometry: a single coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Point {
    geometry: Coordinate,
}

impl Point {
    /// Creates a new point.
    pub fn new(geometry: Coordinate) -> Self {
        Self { geometry }
    }

    /// Coordinate of the point.
    pub fn coordinate(&self) -> Coordinate {
        self.geometry
    }
}

impl From<Coordinate> for Point {
    fn from(value: Coordinate) -> Self {
        Self::new(value)
    }
}

impl CoordinateCodec for Point {
    type Geometry = Coordinate;
    type Coordinates = PointType;

    fn from_geometry(geometry: Coordinate) -> Self {
        Self::new(geometry)
    }

    fn from_coordinates(coordinates: &PointType) -> Result<Self, GeoJsonError> {
        Ok(Self::new(Coordinate::from_position(coordinates)?))
    }

    fn to_coordinates(&self) -> PointType {
        self.geometry.to_position()
    }
}

impl FeatureGeometry for Point {
    const KIND: GeometryKind = GeometryKind::Point;

    fn geometry(&self) -> &Coordinate {
        &self.geometry
    }
}

impl GeoJsonConvertible for Point {
    fn to_envelope(&self) -> JsonObject {
        feature_envelope(self, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn point_coordinates() {
        let point = Point::new(latlon!(30.0, 10.0));
        assert_eq!(point.to_coordinates(), vec![10.0, 30.0]);
        assert_eq!(Point::from_coordinates(&vec![10.0, 30.0]), Ok(point));
        assert_matches!(
            Point::from_coordinates(&vec![10.0]),
            Err(GeoJsonError::MalformedCoordinate { len: 1 })
        );
    }

    #[test]
    fn point_envelope() {
        let point = Point::new(latlon!(30.0, 10.0));
        let expected = json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [10.0, 30.0],
                "properties": null,
            },
            "properties": null,
        });

        assert_eq!(serde_json::Value::Object(point.to_envelope()), expected);
    }

    #[test]
    fn wrong_nesting_is_invalid_geometry() {
        assert_matches!(
            Point::from_coordinates_value(&json!([[10.0, 30.0]])),
            Err(GeoJsonError::InvalidGeometry(_))
        );
        assert_matches!(
            Point::from_coordinates_value(&json!("10.0, 30.0")),
            Err(GeoJsonError::InvalidGeometry(_))
        );
    }

    #[test]
    fn non_numeric_position_is_malformed() {
        assert_matches!(
            Point::from_coordinates_value(&json!(["a", "b"])),
            Err(GeoJsonError::MalformedCoordinate { len: 2 })
        );
        assert_matches!(
            Point::from_coordinates_value(&json!([1.0, "b"])),
            Err(GeoJsonError::MalformedCoordinate { len: 2 })
        );
        assert_matches!(
            Point::from_coordinates_value(&json!([1.0, null, 3.0])),
            Err(GeoJsonError::MalformedCoordinate { len: 3 })
        );
        assert_eq!(
            Point::from_coordinates_value(&json!([10.0, 30.0])),
            Ok(Point::new(latlon!(30.0, 10.0)))
        );
    }
}
