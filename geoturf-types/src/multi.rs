use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;
use crate::line_string::LineString;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::traits::{CoordinateCodec, FeatureGeometry};

/// Set of points.
pub type MultiPoint = Multi<Point>;
/// Set of line strings.
pub type MultiLineString = Multi<LineString>;
/// Set of polygons.
pub type MultiPolygon = Multi<Polygon>;

/// Multi-part geometry over any single geometry kind.
///
/// Only the parts are stored; [`Multi::geometry`] is a view over their geometry values, so the `i`-th geometry is
/// always the geometry of the `i`-th part.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Multi<T> {
    features: Vec<T>,
}

impl<T> Default for Multi<T> {
    fn default() -> Self {
        Self {
            features: Vec::new(),
        }
    }
}

impl<T> Multi<T> {
    /// Creates a new multi-geometry from its parts.
    pub fn new(features: Vec<T>) -> Self {
        Self { features }
    }

    /// Parts of the geometry.
    pub fn features(&self) -> &[T] {
        &self.features
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if there are no parts.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<T: FeatureGeometry> Multi<T> {
    /// Geometry values of the parts, in order.
    pub fn geometry(&self) -> impl Iterator<Item = &'_ T::Geometry> {
        self.features.iter().map(T::geometry)
    }
}

impl<T> From<Vec<T>> for Multi<T> {
    fn from(value: Vec<T>) -> Self {
        Self::new(value)
    }
}

impl<T> FromIterator<T> for Multi<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: CoordinateCodec> CoordinateCodec for Multi<T> {
    type Geometry = Vec<T::Geometry>;
    type Coordinates = Vec<T::Coordinates>;

    fn from_geometry(geometry: Self::Geometry) -> Self {
        geometry.into_iter().map(T::from_geometry).collect()
    }

    /// Parts that cannot be decoded are skipped, so this never fails.
    fn from_coordinates(coordinates: &Self::Coordinates) -> Result<Self, GeoJsonError> {
        let features = coordinates
            .iter()
            .enumerate()
            .filter_map(|(index, part)| match T::from_coordinates(part) {
                Ok(feature) => Some(feature),
                Err(err) => {
                    log::debug!("Skipping part {index} of multi-geometry: {err}");
                    None
                }
            })
            .collect();

        Ok(Self::new(features))
    }

    fn to_coordinates(&self) -> Self::Coordinates {
        self.features.iter().map(T::to_coordinates).collect()
    }
}
