//! Feature envelope codec.

use geojson::feature::Id;
use geojson::{JsonObject, JsonValue};

use crate::error::GeoJsonError;
use crate::geometry::Geometry;
use crate::geometry_kind::FEATURE_TYPE;
use crate::line_string::LineString;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::traits::{EnvelopeGeometry, GeoJsonConvertible};

/// Geometry together with an optional feature identifier.
///
/// The geometry is an immutable value, while the identifier can be changed at any time with [`Feature::set_id`].
///
/// Envelope of a feature:
///
/// ```json
/// {
///   "type": "Feature",
///   "id": "optional",
///   "geometry": { "type": "Point", "coordinates": [10.0, 30.0], "properties": null },
///   "properties": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<G = Geometry> {
    id: Option<Id>,
    geometry: G,
}

impl<G> Feature<G> {
    /// Creates a feature without an identifier.
    pub fn new(geometry: G) -> Self {
        Self { id: None, geometry }
    }

    /// Sets the identifier of the feature.
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Identifier of the feature, if any.
    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Replaces the identifier of the feature.
    pub fn set_id(&mut self, id: Option<Id>) {
        self.id = id;
    }

    /// Geometry of the feature.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Consumes the feature and returns its geometry.
    pub fn into_geometry(self) -> G {
        self.geometry
    }

    /// Converts the geometry of the feature, keeping its identifier.
    pub fn map<H>(self, f: impl FnOnce(G) -> H) -> Feature<H> {
        Feature {
            id: self.id,
            geometry: f(self.geometry),
        }
    }
}

impl<G: EnvelopeGeometry> Feature<G> {
    /// Decodes a Feature envelope.
    ///
    /// The geometry is read from `geometry.coordinates`. When decoding into the [`Geometry`] union the kind is taken
    /// from `geometry.type`.
    pub fn from_envelope(envelope: &JsonObject) -> Result<Self, GeoJsonError> {
        let geometry = envelope
            .get("geometry")
            .and_then(JsonValue::as_object)
            .ok_or_else(|| GeoJsonError::InvalidGeometry("feature has no geometry".to_string()))?;

        let id = match envelope.get("id") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(v)) => Some(Id::String(v.clone())),
            Some(JsonValue::Number(v)) => Some(Id::Number(v.clone())),
            Some(_) => return Err(GeoJsonError::InvalidId),
        };

        Ok(Self {
            id,
            geometry: G::from_geometry_object(geometry)?,
        })
    }
}

impl<G: EnvelopeGeometry> GeoJsonConvertible for Feature<G> {
    fn to_envelope(&self) -> JsonObject {
        feature_envelope(&self.geometry, self.id.as_ref())
    }
}

impl<G> From<G> for Feature<G> {
    fn from(value: G) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_into_geometry_feature {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for Feature<Geometry> {
                fn from(value: $kind) -> Self {
                    Self::new(Geometry::$kind(value))
                }
            }

            impl From<Feature<$kind>> for Feature<Geometry> {
                fn from(value: Feature<$kind>) -> Self {
                    value.map(Geometry::$kind)
                }
            }
        )*
    };
}

impl_into_geometry_feature!(Point, LineString, Polygon);

pub(crate) fn feature_envelope<G: EnvelopeGeometry>(geometry: &G, id: Option<&Id>) -> JsonObject {
    let mut geometry_block = JsonObject::new();
    geometry_block.insert("type".into(), geometry.kind().as_str().into());
    geometry_block.insert("coordinates".into(), geometry.coordinates_value());
    geometry_block.insert("properties".into(), JsonValue::Null);

    let mut envelope = JsonObject::new();
    envelope.insert("type".into(), FEATURE_TYPE.into());
    if let Some(id) = id {
        let id = match id {
            Id::String(v) => JsonValue::String(v.clone()),
            Id::Number(v) => JsonValue::Number(v.clone()),
        };
        envelope.insert("id".into(), id);
    }
    envelope.insert("geometry".into(), JsonValue::Object(geometry_block));
    envelope.insert("properties".into(), JsonValue::Null);

    envelope
}
