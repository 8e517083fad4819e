//! Typed GeoJSON geometries.
//!
//! The crate models the geometry kinds exchanged with a geometry engine: [`Point`], [`LineString`], [`Polygon`],
//! their multi-part variants ([`Multi`]), and the [`Feature`] and [`FeatureCollection`] envelopes that wrap them.
//!
//! Every geometry converts to and from its *coordinate representation* (plain nested arrays of `[lon, lat]`
//! positions, see [`CoordinateCodec`]) and into the generic GeoJSON dictionary form (see [`GeoJsonConvertible`]).
//!
//! ```
//! use geoturf_types::{latlon, Feature, FeatureCollection, GeoJsonConvertible, Point, Polygon};
//!
//! let point = Point::new(latlon!(34.0382, -118.4649));
//! let envelope = point.to_envelope();
//! assert_eq!(envelope["geometry"]["coordinates"][0], -118.4649);
//!
//! let collection = FeatureCollection::from_iter([point]);
//! let decoded = FeatureCollection::from_envelope(&collection.to_envelope());
//! assert_eq!(decoded, collection);
//! ```

mod coordinate;
pub use coordinate::Coordinate;

pub mod error;
pub use error::GeoJsonError;

mod geometry_kind;
pub use geometry_kind::{GeometryKind, FEATURE_COLLECTION_TYPE, FEATURE_TYPE};

mod traits;
pub use traits::{CoordinateCodec, EnvelopeGeometry, FeatureGeometry, GeoJsonConvertible};

mod point;
pub use point::Point;

mod line_string;
pub use line_string::LineString;

mod polygon;
pub use polygon::Polygon;

mod multi;
pub use multi::{Multi, MultiLineString, MultiPoint, MultiPolygon};

mod geometry;
pub use geometry::Geometry;

pub mod feature;
pub use feature::Feature;

pub mod feature_collection;
pub use feature_collection::{CollectionDecode, FeatureCollection, SkippedFeature};

mod geojson;
#[cfg(feature = "geo-types")]
mod geo_types;

pub use ::geojson::feature::Id;
pub use ::geojson::{JsonObject, JsonValue, Position};
