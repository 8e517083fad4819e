//! Conversions into the typed values of the [`geojson`] crate.

use geojson::Value;

use crate::error::GeoJsonError;
use crate::feature::Feature;
use crate::geometry::Geometry;
use crate::line_string::LineString;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::traits::CoordinateCodec;

impl From<&Geometry> for geojson::Geometry {
    fn from(value: &Geometry) -> Self {
        let value = match value {
            Geometry::Point(v) => Value::Point(v.to_coordinates()),
            Geometry::LineString(v) => Value::LineString(v.to_coordinates()),
            Geometry::Polygon(v) => Value::Polygon(v.to_coordinates()),
        };
        geojson::Geometry::new(value)
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = GeoJsonError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &value.value {
            Value::Point(p) => Ok(Geometry::Point(Point::from_coordinates(p)?)),
            Value::LineString(l) => Ok(Geometry::LineString(LineString::from_coordinates(l)?)),
            Value::Polygon(p) => Ok(Geometry::Polygon(Polygon::from_coordinates(p)?)),
            Value::MultiPoint(_) => Err(GeoJsonError::UnsupportedKind("MultiPoint".into())),
            Value::MultiLineString(_) => {
                Err(GeoJsonError::UnsupportedKind("MultiLineString".into()))
            }
            Value::MultiPolygon(_) => Err(GeoJsonError::UnsupportedKind("MultiPolygon".into())),
            Value::GeometryCollection(_) => {
                Err(GeoJsonError::UnsupportedKind("GeometryCollection".into()))
            }
        }
    }
}

impl From<&Feature> for geojson::Feature {
    fn from(value: &Feature) -> Self {
        geojson::Feature {
            bbox: None,
            geometry: Some(value.geometry().into()),
            id: value.id().cloned(),
            properties: None,
            foreign_members: None,
        }
    }
}

impl TryFrom<&geojson::Feature> for Feature {
    type Error = GeoJsonError;

    fn try_from(value: &geojson::Feature) -> Result<Self, Self::Error> {
        let geometry = value
            .geometry
            .as_ref()
            .ok_or_else(|| GeoJsonError::InvalidGeometry("feature has no geometry".into()))?;
        let mut feature = Feature::new(Geometry::try_from(geometry)?);
        feature.set_id(value.id.clone());
        Ok(feature)
    }
}
