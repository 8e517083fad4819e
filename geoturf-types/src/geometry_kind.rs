//! See documentation for [`GeometryKind`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;

/// `type` discriminator of a Feature envelope.
pub const FEATURE_TYPE: &str = "Feature";
/// `type` discriminator of a FeatureCollection envelope.
pub const FEATURE_COLLECTION_TYPE: &str = "FeatureCollection";

/// Kind of a geometry that can be placed into a Feature envelope.
///
/// The discriminator strings are case-sensitive: `"Point"`, `"LineString"` and `"Polygon"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// Single position.
    Point,
    /// Sequence of positions.
    LineString,
    /// Sequence of linear rings.
    Polygon,
}

impl GeometryKind {
    /// GeoJSON `type` string of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(GeometryKind::Point),
            "LineString" => Ok(GeometryKind::LineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            other => Err(GeoJsonError::UnsupportedKind(other.to_string())),
        }
    }
}
