//! Capabilities shared by the geometry kinds.

use geojson::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;
use crate::geometry_kind::GeometryKind;

/// Conversion between a typed geometry value and its GeoJSON coordinate representation (plain nested arrays of
/// `[lon, lat]` positions).
pub trait CoordinateCodec: Sized {
    /// In-memory geometry value, e.g. a [`Coordinate`](crate::Coordinate) for a point.
    type Geometry;
    /// Nested array form of the geometry.
    type Coordinates: Serialize + DeserializeOwned;

    /// Creates an instance from its geometry value. Never fails.
    fn from_geometry(geometry: Self::Geometry) -> Self;

    /// Creates an instance from the coordinate representation, validating its shape.
    fn from_coordinates(coordinates: &Self::Coordinates) -> Result<Self, GeoJsonError>;

    /// Coordinate representation of the instance.
    fn to_coordinates(&self) -> Self::Coordinates;

    /// Decodes the coordinate representation from an untyped JSON value.
    ///
    /// Positions with non-numeric components fail with [`GeoJsonError::MalformedCoordinate`]. Values that are not
    /// nested to the depth of this kind fail with [`GeoJsonError::InvalidGeometry`].
    fn from_coordinates_value(value: &JsonValue) -> Result<Self, GeoJsonError> {
        let coordinates = Self::Coordinates::deserialize(value).map_err(|err| {
            match malformed_position_len(value) {
                Some(len) => GeoJsonError::MalformedCoordinate { len },
                None => GeoJsonError::InvalidGeometry(err.to_string()),
            }
        })?;
        Self::from_coordinates(&coordinates)
    }
}

/// Length of the first position (innermost array) that has a non-numeric component.
fn malformed_position_len(value: &JsonValue) -> Option<usize> {
    let items = value.as_array()?;
    if !items.is_empty() && items.iter().all(JsonValue::is_array) {
        return items.iter().find_map(malformed_position_len);
    }

    items
        .iter()
        .any(|item| !item.is_number())
        .then_some(items.len())
}

/// Geometry that can be wrapped into a Feature envelope on its own.
pub trait FeatureGeometry: CoordinateCodec {
    /// Kind name written into `geometry.type`.
    const KIND: GeometryKind;

    /// Geometry value of the instance.
    fn geometry(&self) -> &Self::Geometry;
}

/// Geometry block of a Feature envelope: `{ type, coordinates, properties }`.
///
/// Implemented for every [`FeatureGeometry`] and for the [`Geometry`](crate::Geometry) union.
pub trait EnvelopeGeometry: Sized {
    /// Kind of the geometry.
    fn kind(&self) -> GeometryKind;

    /// Coordinate representation as a JSON value.
    fn coordinates_value(&self) -> JsonValue;

    /// Decodes the geometry block of a Feature envelope.
    fn from_geometry_object(geometry: &JsonObject) -> Result<Self, GeoJsonError>;
}

impl<T: FeatureGeometry> EnvelopeGeometry for T {
    fn kind(&self) -> GeometryKind {
        T::KIND
    }

    fn coordinates_value(&self) -> JsonValue {
        serde_json::to_value(self.to_coordinates()).unwrap_or(JsonValue::Null)
    }

    fn from_geometry_object(geometry: &JsonObject) -> Result<Self, GeoJsonError> {
        let coordinates = geometry.get("coordinates").ok_or_else(|| {
            GeoJsonError::InvalidGeometry("geometry has no coordinates".to_string())
        })?;

        if let Some(kind) = geometry.get("type").and_then(JsonValue::as_str) {
            if kind != T::KIND.as_str() {
                log::debug!("Decoding geometry of type '{kind}' as {}", T::KIND);
            }
        }

        T::from_coordinates_value(coordinates)
    }
}

/// Values convertible into the generic GeoJSON dictionary form.
pub trait GeoJsonConvertible {
    /// Envelope of the value. Never fails.
    fn to_envelope(&self) -> JsonObject;
}
