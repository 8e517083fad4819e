//! Marshaling of the engine arguments.

use std::fmt::{Display, Formatter};

use geoturf_types::{GeoJsonConvertible, JsonValue};
use serde::Serialize;

use crate::error::TurfError;

/// Operations of the geometry engine used by [`Turf`](crate::Turf).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Buffer around a geometry.
    Buffer,
    /// Self-intersections of a polygon.
    Kinks,
    /// Intersection points of two lines.
    LineIntersect,
    /// Point at a distance and bearing from another point.
    Destination,
    /// Point-in-polygon test.
    Contains,
}

impl Operation {
    /// Name of the operation in the engine.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Buffer => "buffer",
            Operation::Kinks => "kinks",
            Operation::LineIntersect => "lineIntersect",
            Operation::Destination => "destination",
            Operation::Contains => "contains",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named engine call with its positional arguments.
///
/// ```ignore
/// let call = OperationCall::new(Operation::Destination)
///     .feature(&point)
///     .scalar("distance", 200.0)?
///     .scalar("bearing", 90.0)?
///     .config(&DestinationOptions::default())?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OperationCall {
    name: String,
    args: Vec<JsonValue>,
}

impl OperationCall {
    /// Starts a call of one of the known operations.
    pub fn new(operation: Operation) -> Self {
        Self::named(operation.name())
    }

    /// Starts a call of an operation by its engine name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: vec![],
        }
    }

    /// Appends the GeoJSON envelope of a value.
    pub fn feature(mut self, value: &impl GeoJsonConvertible) -> Self {
        self.args.push(JsonValue::Object(value.to_envelope()));
        self
    }

    /// Appends a number. Fails if the number is not finite.
    pub fn scalar(mut self, name: &str, value: f64) -> Result<Self, TurfError> {
        let Some(number) = serde_json::Number::from_f64(value) else {
            return Err(TurfError::InvalidArgument(format!(
                "{name} must be finite, got {value}"
            )));
        };
        self.args.push(JsonValue::Number(number));
        Ok(self)
    }

    /// Appends a configuration object.
    pub fn config(mut self, config: &impl Serialize) -> Result<Self, TurfError> {
        let value = serde_json::to_value(config)
            .map_err(|err| TurfError::InvalidArgument(err.to_string()))?;
        self.args.push(value);
        Ok(self)
    }

    /// Engine name of the operation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional arguments.
    pub fn args(&self) -> &[JsonValue] {
        &self.args
    }
}
