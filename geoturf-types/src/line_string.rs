use geojson::{JsonObject, LineStringType};
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::GeoJsonError;
use crate::feature::feature_envelope;
use crate::geometry_kind::GeometryKind;
use crate::traits::{CoordinateCodec, FeatureGeometry, GeoJsonConvertible};

/// Ordered sequence of coordinates.
///
/// Degenerate line strings (empty or with a single coordinate) are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LineString {
    geometry: Vec<Coordinate>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(geometry: Vec<Coordinate>) -> Self {
        Self { geometry }
    }

    /// Coordinates of the line in order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.geometry
    }

    /// Iterates over the coordinates of the line.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Coordinate> {
        self.geometry.iter()
    }
}

impl From<Vec<Coordinate>> for LineString {
    fn from(value: Vec<Coordinate>) -> Self {
        Self::new(value)
    }
}

impl CoordinateCodec for LineString {
    type Geometry = Vec<Coordinate>;
    type Coordinates = LineStringType;

    fn from_geometry(geometry: Vec<Coordinate>) -> Self {
        Self::new(geometry)
    }

    fn from_coordinates(coordinates: &LineStringType) -> Result<Self, GeoJsonError> {
        let geometry = coordinates
            .iter()
            .map(|p| Coordinate::from_position(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(geometry))
    }

    fn to_coordinates(&self) -> LineStringType {
        self.geometry.iter().map(Coordinate::to_position).collect()
    }
}

impl FeatureGeometry for LineString {
    const KIND: GeometryKind = GeometryKind::LineString;

    fn geometry(&self) -> &Vec<Coordinate> {
        &self.geometry
    }
}

impl GeoJsonConvertible for LineString {
    fn to_envelope(&self) -> JsonObject {
        feature_envelope(self, None)
    }
}
