use geojson::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;
use crate::feature::feature_envelope;
use crate::geometry_kind::GeometryKind;
use crate::line_string::LineString;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::traits::{EnvelopeGeometry, GeoJsonConvertible};

/// Any geometry that can be the content of a Feature.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geometry {
    /// Point geometry.
    Point(Point),
    /// Line string geometry.
    LineString(LineString),
    /// Polygon geometry.
    Polygon(Polygon),
}

impl Geometry {
    /// Returns the point if the geometry is a point.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the line string if the geometry is a line string.
    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the polygon if the geometry is a polygon.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(v) => Some(v),
            _ => None,
        }
    }
}

impl EnvelopeGeometry for Geometry {
    fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(v) => v.kind(),
            Geometry::LineString(v) => v.kind(),
            Geometry::Polygon(v) => v.kind(),
        }
    }

    fn coordinates_value(&self) -> JsonValue {
        match self {
            Geometry::Point(v) => v.coordinates_value(),
            Geometry::LineString(v) => v.coordinates_value(),
            Geometry::Polygon(v) => v.coordinates_value(),
        }
    }

    fn from_geometry_object(geometry: &JsonObject) -> Result<Self, GeoJsonError> {
        let kind = geometry
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| GeoJsonError::InvalidGeometry("geometry has no type".to_string()))?
            .parse::<GeometryKind>()?;

        Ok(match kind {
            GeometryKind::Point => Geometry::Point(Point::from_geometry_object(geometry)?),
            GeometryKind::LineString => {
                Geometry::LineString(LineString::from_geometry_object(geometry)?)
            }
            GeometryKind::Polygon => Geometry::Polygon(Polygon::from_geometry_object(geometry)?),
        })
    }
}

impl GeoJsonConvertible for Geometry {
    fn to_envelope(&self) -> JsonObject {
        feature_envelope(self, None)
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}
