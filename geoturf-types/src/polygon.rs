use geojson::{JsonObject, PolygonType};
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::GeoJsonError;
use crate::feature::feature_envelope;
use crate::geometry_kind::GeometryKind;
use crate::traits::{CoordinateCodec, FeatureGeometry, GeoJsonConvertible};

/// Polygon as a sequence of linear rings.
///
/// The first ring is the outer boundary, the following rings are holes subtracted from its area. Every ring decoded
/// from coordinates is closed: its first coordinate equals its last one. Direct construction with [`Polygon::new`]
/// does not check this.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    geometry: Vec<Vec<Coordinate>>,
}

impl Polygon {
    /// Creates a new polygon from its rings.
    pub fn new(geometry: Vec<Vec<Coordinate>>) -> Self {
        Self { geometry }
    }

    /// All rings of the polygon, outer boundary first.
    pub fn rings(&self) -> &[Vec<Coordinate>] {
        &self.geometry
    }

    /// Outer boundary of the polygon.
    pub fn outer_ring(&self) -> Option<&[Coordinate]> {
        self.geometry.first().map(Vec::as_slice)
    }

    /// Holes of the polygon.
    pub fn holes(&self) -> impl Iterator<Item = &'_ [Coordinate]> {
        self.geometry.iter().skip(1).map(Vec::as_slice)
    }
}

impl From<Vec<Vec<Coordinate>>> for Polygon {
    fn from(value: Vec<Vec<Coordinate>>) -> Self {
        Self::new(value)
    }
}

impl CoordinateCodec for Polygon {
    type Geometry = Vec<Vec<Coordinate>>;
    type Coordinates = PolygonType;

    fn from_geometry(geometry: Vec<Vec<Coordinate>>) -> Self {
        Self::new(geometry)
    }

    fn from_coordinates(coordinates: &PolygonType) -> Result<Self, GeoJsonError> {
        let mut rings = Vec::with_capacity(coordinates.len());
        for (index, ring) in coordinates.iter().enumerate() {
            let ring = ring
                .iter()
                .map(|p| Coordinate::from_position(p))
                .collect::<Result<Vec<_>, _>>()?;
            if ring.first() != ring.last() {
                return Err(GeoJsonError::InvalidGeometry(format!(
                    "polygon ring {index} is not closed"
                )));
            }

            rings.push(ring);
        }

        Ok(Self::new(rings))
    }

    fn to_coordinates(&self) -> PolygonType {
        self.geometry
            .iter()
            .map(|ring| ring.iter().map(Coordinate::to_position).collect())
            .collect()
    }
}

impl FeatureGeometry for Polygon {
    const KIND: GeometryKind = GeometryKind::Polygon;

    fn geometry(&self) -> &Vec<Vec<Coordinate>> {
        &self.geometry
    }
}

impl GeoJsonConvertible for Polygon {
    fn to_envelope(&self) -> JsonObject {
        feature_envelope(self, None)
    }
}
