//! Geoturf is a typed calling convention for the geospatial operations of an external geometry engine.
//!
//! The engine itself (anything implementing [`GeometryEngine`]) receives operation names with GeoJSON arguments and
//! answers with GeoJSON. The [`Turf`] dispatcher hides this boundary behind typed operations:
//!
//! * [`Turf::buffer`] - polygon around a feature at a given distance;
//! * [`Turf::kinks`] - self-intersections of a polygon;
//! * [`Turf::line_intersect`] - intersection points of two lines;
//! * [`Turf::destination`] - point at a distance and bearing from the origin;
//! * [`Turf::contains`] - point-in-polygon test.
//!
//! ```ignore
//! use std::sync::Arc;
//! use geoturf::{EngineHandle, Turf, DestinationOptions};
//! use geoturf::geoturf_types::{latlon, Point};
//!
//! let engine = Arc::new(EngineHandle::lazy(|| load_engine()));
//! let turf = Turf::new(engine);
//!
//! let origin = Point::new(latlon!(36.7314, -118.2992));
//! let target = turf.destination(&origin, 200.0, 90.0, DestinationOptions::default())?;
//! ```
//!
//! Geometry types are defined in the [`geoturf_types`] crate, which is re-exported here.

mod engine;
mod error;
mod operation;
mod options;
mod turf;

#[cfg(test)]
mod tests;

pub use engine::{EngineHandle, GeometryEngine};
pub use error::{EngineFault, TurfError};
pub use operation::{Operation, OperationCall};
pub use options::{BufferOptions, DestinationOptions, Units, DEFAULT_STEPS};
pub use turf::Turf;

pub use geoturf_types;
