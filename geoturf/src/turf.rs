use std::sync::Arc;

use geoturf_types::{
    EnvelopeGeometry, Feature, FeatureCollection, GeoJsonConvertible, Geometry, JsonObject,
    JsonValue, LineString, Point, Polygon,
};

use crate::engine::EngineHandle;
use crate::error::TurfError;
use crate::operation::{Operation, OperationCall};
use crate::options::{BufferOptions, DestinationOptions};

/// Dispatcher of the geospatial operations.
///
/// Every operation serializes its typed arguments, calls the engine through the shared [`EngineHandle`] and decodes
/// the answer back into typed geometry. Operations never modify their arguments, and calling an operation twice with
/// the same arguments gives the same result as long as the engine is deterministic.
#[derive(Debug, Clone)]
pub struct Turf {
    engine: Arc<EngineHandle>,
}

impl Turf {
    /// Creates a new dispatcher using the given engine.
    pub fn new(engine: Arc<EngineHandle>) -> Self {
        Self { engine }
    }

    /// Engine used by the dispatcher.
    pub fn engine(&self) -> &Arc<EngineHandle> {
        &self.engine
    }

    /// Calculates a buffer around the feature at the given distance.
    ///
    /// The first ring of the resulting polygon is its outer boundary, the rest are holes.
    pub fn buffer(
        &self,
        feature: &impl GeoJsonConvertible,
        distance: f64,
        options: BufferOptions,
    ) -> Result<Polygon, TurfError> {
        if options.steps == 0 {
            return Err(TurfError::InvalidArgument(
                "steps must be greater than 0".into(),
            ));
        }

        let call = OperationCall::new(Operation::Buffer)
            .feature(feature)
            .scalar("distance", distance)?
            .config(&options)?;

        let result = self.invoke_object(&call)?;
        decode_feature(&call, &result)
    }

    /// Finds the self-intersections of the polygon.
    ///
    /// Returns a collection of points, one per intersection, or [`TurfError::NoResult`] if the polygon has none.
    pub fn kinks(&self, polygon: &Polygon) -> Result<FeatureCollection, TurfError> {
        let call = OperationCall::new(Operation::Kinks).feature(polygon);
        let result = self.invoke_object(&call)?;
        decode_points(&call, &result)
    }

    /// Finds the intersection points of two lines.
    ///
    /// Returns [`TurfError::NoResult`] if the lines do not intersect.
    pub fn line_intersect(
        &self,
        line1: &LineString,
        line2: &LineString,
    ) -> Result<FeatureCollection, TurfError> {
        let call = OperationCall::new(Operation::LineIntersect)
            .feature(line1)
            .feature(line2);
        let result = self.invoke_object(&call)?;
        decode_points(&call, &result)
    }

    /// Calculates the point at the given distance and bearing (in degrees, clockwise from north) from the origin.
    pub fn destination(
        &self,
        point: &Point,
        distance: f64,
        bearing: f64,
        options: DestinationOptions,
    ) -> Result<Point, TurfError> {
        let call = OperationCall::new(Operation::Destination)
            .feature(point)
            .scalar("distance", distance)?
            .scalar("bearing", bearing)?
            .config(&options)?;

        let result = self.invoke_object(&call)?;
        decode_feature(&call, &result)
    }

    /// Returns true if the point is given and lies inside the polygon (holes excluded).
    ///
    /// An absent point gives `false` without calling the engine. Any answer of the engine other than a boolean is
    /// treated as `false`.
    pub fn contains(&self, polygon: &Polygon, point: Option<&Point>) -> bool {
        let Some(point) = point else {
            return false;
        };

        let call = OperationCall::new(Operation::Contains)
            .feature(polygon)
            .feature(point);
        match self.invoke(&call) {
            Ok(JsonValue::Bool(value)) => value,
            Ok(other) => {
                log::debug!("Engine answered '{}' with a non-boolean: {other}", call.name());
                false
            }
            Err(_) => false,
        }
    }

    /// Calls an arbitrary engine operation and returns its raw answer.
    pub fn call_raw(&self, call: &OperationCall) -> Result<JsonValue, TurfError> {
        self.invoke(call)
    }

    fn invoke(&self, call: &OperationCall) -> Result<JsonValue, TurfError> {
        log::debug!(
            "Calling '{}' with {} arguments",
            call.name(),
            call.args().len()
        );
        self.engine
            .call(call.name(), call.args())
            .ok_or(TurfError::NoResult)
    }

    fn invoke_object(&self, call: &OperationCall) -> Result<JsonObject, TurfError> {
        match self.invoke(call)? {
            JsonValue::Object(object) => Ok(object),
            other => {
                log::debug!("Engine answered '{}' with a non-object: {other}", call.name());
                Err(TurfError::NoResult)
            }
        }
    }
}

fn decode_feature<G>(call: &OperationCall, envelope: &JsonObject) -> Result<G, TurfError>
where
    G: EnvelopeGeometry,
{
    Feature::<G>::from_envelope(envelope)
        .map(Feature::into_geometry)
        .map_err(|err| {
            log::debug!("Failed to decode result of '{}': {err}", call.name());
            TurfError::NoResult
        })
}

fn decode_points(
    call: &OperationCall,
    envelope: &JsonObject,
) -> Result<FeatureCollection, TurfError> {
    let collection: FeatureCollection = FeatureCollection::from_envelope(envelope)
        .into_iter()
        .filter(|feature| {
            let is_point = matches!(feature.geometry(), Geometry::Point(_));
            if !is_point {
                log::debug!(
                    "Skipping {} feature in the answer of '{}'",
                    feature.geometry().kind(),
                    call.name()
                );
            }
            is_point
        })
        .collect();

    if collection.is_empty() {
        log::debug!("Engine answered '{}' with no features", call.name());
        return Err(TurfError::NoResult);
    }

    Ok(collection)
}
