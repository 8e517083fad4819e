use geojson::Position;
use serde::{Deserialize, Serialize};

use crate::error::GeoJsonError;

/// Geographic coordinate in degrees.
///
/// In GeoJSON the coordinate is always written as `[longitude, latitude]`, see [`Coordinate::to_position`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Decodes a GeoJSON position `[lon, lat]`.
    ///
    /// Fails with [`GeoJsonError::MalformedCoordinate`] if the position does not have exactly two components.
    pub fn from_position(position: &[f64]) -> Result<Self, GeoJsonError> {
        match position {
            [lon, lat] => Ok(Self::new(*lat, *lon)),
            _ => Err(GeoJsonError::MalformedCoordinate {
                len: position.len(),
            }),
        }
    }

    /// GeoJSON position of the coordinate: `[lon, lat]`.
    pub fn to_position(&self) -> Position {
        vec![self.longitude, self.latitude]
    }
}

impl TryFrom<&Position> for Coordinate {
    type Error = GeoJsonError;

    fn try_from(value: &Position) -> Result<Self, Self::Error> {
        Self::from_position(value)
    }
}

impl From<Coordinate> for Position {
    fn from(value: Coordinate) -> Self {
        value.to_position()
    }
}

/// Creates a [`Coordinate`] from latitude and longitude values (in degrees).
///
/// ```
/// use geoturf_types::latlon;
///
/// let coordinate = latlon!(38.0, 52.0);
/// assert_eq!(coordinate.latitude, 38.0);
/// assert_eq!(coordinate.longitude, 52.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::Coordinate::new($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn position_is_lon_lat() {
        let coordinate = Coordinate::new(36.7314, -118.2992);
        assert_eq!(coordinate.to_position(), vec![-118.2992, 36.7314]);

        let decoded = Coordinate::from_position(&[-118.2992, 36.7314]).expect("valid pair");
        assert_eq!(decoded.latitude, 36.7314);
        assert_eq!(decoded.longitude, -118.2992);
    }

    #[test]
    fn round_trip() {
        let coordinates = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(-90.0, 180.0),
            Coordinate::new(34.0515, -118.4658),
        ];
        for c in coordinates {
            assert_eq!(Coordinate::from_position(&c.to_position()), Ok(c));
        }

        let position = vec![10.5, -3.25];
        let decoded = Coordinate::try_from(&position).expect("valid pair");
        assert_eq!(Position::from(decoded), position);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_matches!(
            Coordinate::from_position(&[1.0]),
            Err(GeoJsonError::MalformedCoordinate { len: 1 })
        );
        assert_matches!(
            Coordinate::from_position(&[1.0, 2.0, 3.0]),
            Err(GeoJsonError::MalformedCoordinate { len: 3 })
        );
        assert_matches!(
            Coordinate::from_position(&[]),
            Err(GeoJsonError::MalformedCoordinate { len: 0 })
        );
    }
}
