//! Conversions between the crate's geometries and [`geo_types`] geometries.
//!
//! `geo_types` uses cartesian `x`/`y`, which map to longitude and latitude respectively.

use geo_types::{coord, Coord};

use crate::coordinate::Coordinate;
use crate::error::GeoJsonError;
use crate::geometry::Geometry;
use crate::line_string::LineString;
use crate::multi::{MultiLineString, MultiPoint, MultiPolygon};
use crate::point::Point;
use crate::polygon::Polygon;

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        coord!(x: value.longitude, y: value.latitude)
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Coordinate::new(value.y, value.x)
    }
}

impl From<&Point> for geo_types::Point<f64> {
    fn from(value: &Point) -> Self {
        geo_types::Point(value.coordinate().into())
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::new(value.0.into())
    }
}

fn to_geo_line(coordinates: &[Coordinate]) -> geo_types::LineString<f64> {
    geo_types::LineString::new(coordinates.iter().map(|&c| c.into()).collect())
}

fn from_geo_line(line: &geo_types::LineString<f64>) -> Vec<Coordinate> {
    line.coords().map(|&c| c.into()).collect()
}

impl From<&LineString> for geo_types::LineString<f64> {
    fn from(value: &LineString) -> Self {
        to_geo_line(value.coordinates())
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        LineString::new(from_geo_line(&value))
    }
}

/// The first ring becomes the exterior of the `geo_types` polygon. A polygon without rings converts into a polygon
/// with an empty exterior.
impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        let exterior = value
            .outer_ring()
            .map(to_geo_line)
            .unwrap_or_else(|| geo_types::LineString::new(vec![]));
        let interiors = value.holes().map(to_geo_line).collect();
        geo_types::Polygon::new(exterior, interiors)
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let mut rings = vec![from_geo_line(value.exterior())];
        rings.extend(value.interiors().iter().map(from_geo_line));
        Polygon::new(rings)
    }
}

impl From<&MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        geo_types::MultiPoint::new(value.features().iter().map(Into::into).collect())
    }
}

impl From<&MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: &MultiLineString) -> Self {
        geo_types::MultiLineString::new(value.features().iter().map(Into::into).collect())
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo_types::MultiPolygon::new(value.features().iter().map(Into::into).collect())
    }
}

impl From<&Geometry> for geo_types::Geometry<f64> {
    fn from(value: &Geometry) -> Self {
        match value {
            Geometry::Point(v) => geo_types::Geometry::Point(v.into()),
            Geometry::LineString(v) => geo_types::Geometry::LineString(v.into()),
            Geometry::Polygon(v) => geo_types::Geometry::Polygon(v.into()),
        }
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Geometry {
    type Error = GeoJsonError;

    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        match value {
            geo_types::Geometry::Point(v) => Ok(Geometry::Point(v.into())),
            geo_types::Geometry::LineString(v) => Ok(Geometry::LineString(v.into())),
            geo_types::Geometry::Polygon(v) => {
                let polygon = Polygon::from(v);
                match polygon.rings().iter().position(|r| r.first() != r.last()) {
                    Some(index) => Err(GeoJsonError::InvalidGeometry(format!(
                        "polygon ring {index} is not closed"
                    ))),
                    None => Ok(Geometry::Polygon(polygon)),
                }
            }
            other => Err(GeoJsonError::UnsupportedKind(geometry_name(&other).into())),
        }
    }
}

fn geometry_name(geometry: &geo_types::Geometry<f64>) -> &'static str {
    match geometry {
        geo_types::Geometry::Line(_) => "Line",
        geo_types::Geometry::MultiPoint(_) => "MultiPoint",
        geo_types::Geometry::MultiLineString(_) => "MultiLineString",
        geo_types::Geometry::MultiPolygon(_) => "MultiPolygon",
        geo_types::Geometry::GeometryCollection(_) => "GeometryCollection",
        geo_types::Geometry::Rect(_) => "Rect",
        geo_types::Geometry::Triangle(_) => "Triangle",
        _ => "Geometry",
    }
}
