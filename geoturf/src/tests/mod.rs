use std::sync::Arc;

use geo::line_intersection::{line_intersection, LineIntersection};
use geo::{Contains, HaversineDestination, Line};
use geoturf_types::{
    EnvelopeGeometry, Feature, FeatureCollection, GeoJsonConvertible, JsonValue, LineString,
    Point, Polygon,
};
use parking_lot::Mutex;

use crate::engine::GeometryEngine;
use crate::error::EngineFault;
use crate::options::{DestinationOptions, Units};

const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Name of the operation and its arguments.
pub type RecordedCall = (String, Vec<JsonValue>);
pub type CallLog = Arc<Mutex<Vec<RecordedCall>>>;

type Responder =
    Box<dyn FnMut(&str, &[JsonValue]) -> Result<Option<JsonValue>, EngineFault> + Send>;

/// Engine that records every call and answers with a closure.
pub struct ScriptedEngine {
    respond: Responder,
    calls: CallLog,
}

impl ScriptedEngine {
    pub fn new(
        respond: impl FnMut(&str, &[JsonValue]) -> Result<Option<JsonValue>, EngineFault>
            + Send
            + 'static,
    ) -> (Self, CallLog) {
        let calls = CallLog::default();
        let engine = Self {
            respond: Box::new(respond),
            calls: calls.clone(),
        };
        (engine, calls)
    }
}

impl GeometryEngine for ScriptedEngine {
    fn call(
        &mut self,
        operation: &str,
        args: &[JsonValue],
    ) -> Result<Option<JsonValue>, EngineFault> {
        self.calls.lock().push((operation.to_string(), args.to_vec()));
        (self.respond)(operation, args)
    }
}

/// Engine computing the planar and spherical operations with `geo`. Buffers are not supported and produce no result.
pub struct ReferenceEngine;

impl GeometryEngine for ReferenceEngine {
    fn call(
        &mut self,
        operation: &str,
        args: &[JsonValue],
    ) -> Result<Option<JsonValue>, EngineFault> {
        let fault = |message: String| EngineFault::new(operation, message);
        let result = match operation {
            "contains" => {
                let polygon: Polygon = arg(args, 0).map_err(fault)?;
                let point: Point = arg(args, 1).map_err(fault)?;
                let contains = geo_types::Polygon::from(&polygon)
                    .contains(&geo_types::Point::from(&point));
                JsonValue::Bool(contains)
            }
            "destination" => {
                let origin: Point = arg(args, 0).map_err(fault)?;
                let distance = number(args, 1).map_err(fault)?;
                let bearing = number(args, 2).map_err(fault)?;
                let options: DestinationOptions = args
                    .get(3)
                    .map(|value| serde_json::from_value(value.clone()))
                    .transpose()
                    .map_err(|err| fault(err.to_string()))?
                    .unwrap_or_default();

                let meters = to_meters(distance, options.units);
                let destination =
                    geo_types::Point::from(&origin).haversine_destination(bearing, meters);
                JsonValue::Object(Point::from(destination).to_envelope())
            }
            "lineIntersect" => {
                let line1: LineString = arg(args, 0).map_err(fault)?;
                let line2: LineString = arg(args, 1).map_err(fault)?;
                let first = segments(line1.coordinates());
                let second = segments(line2.coordinates());
                let points = first
                    .iter()
                    .flat_map(|a| second.iter().filter_map(move |b| intersection(*a, *b)))
                    .collect::<FeatureCollection>();
                JsonValue::Object(points.to_envelope())
            }
            "kinks" => {
                let polygon: Polygon = arg(args, 0).map_err(fault)?;
                let points = polygon
                    .rings()
                    .iter()
                    .flat_map(|ring| ring_kinks(ring))
                    .collect::<FeatureCollection>();
                JsonValue::Object(points.to_envelope())
            }
            "buffer" => return Ok(None),
            other => return Err(fault(format!("{other} is not a function"))),
        };

        Ok(Some(result))
    }
}

fn arg<G: EnvelopeGeometry>(args: &[JsonValue], index: usize) -> Result<G, String> {
    let envelope = args
        .get(index)
        .and_then(JsonValue::as_object)
        .ok_or_else(|| format!("argument {index} is not an object"))?;
    Feature::<G>::from_envelope(envelope)
        .map(Feature::into_geometry)
        .map_err(|err| err.to_string())
}

fn number(args: &[JsonValue], index: usize) -> Result<f64, String> {
    args.get(index)
        .and_then(JsonValue::as_f64)
        .ok_or_else(|| format!("argument {index} is not a number"))
}

fn to_meters(distance: f64, units: Units) -> f64 {
    match units {
        Units::Meters => distance,
        Units::Kilometers => distance * 1000.0,
        Units::Feet => distance * 0.3048,
        Units::Miles => distance * 1609.344,
        Units::Degrees => distance.to_radians() * EARTH_RADIUS_METERS,
    }
}

fn segments(coordinates: &[geoturf_types::Coordinate]) -> Vec<Line<f64>> {
    coordinates
        .windows(2)
        .map(|pair| Line::new(pair[0], pair[1]))
        .collect()
}

fn intersection(a: Line<f64>, b: Line<f64>) -> Option<Point> {
    match line_intersection(a, b)? {
        LineIntersection::SinglePoint { intersection, .. } => {
            Some(Point::new(intersection.into()))
        }
        LineIntersection::Collinear { .. } => None,
    }
}

fn ring_kinks(ring: &[geoturf_types::Coordinate]) -> Vec<Point> {
    let segments = segments(ring);
    let count = segments.len();
    let mut kinks = vec![];
    for i in 0..count {
        for j in i + 2..count {
            if i == 0 && j == count - 1 {
                continue;
            }

            kinks.extend(intersection(segments[i], segments[j]));
        }
    }

    kinks
}
