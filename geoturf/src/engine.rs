//! Call boundary to the geometry engine.

use std::fmt::{Debug, Formatter};

use geoturf_types::JsonValue;
use parking_lot::Mutex;

use crate::error::EngineFault;

/// External engine that computes the geospatial operations.
///
/// The engine receives the name of the operation and a positional list of arguments: GeoJSON envelopes, scalars and
/// configuration objects. It answers with a GeoJSON envelope, a boolean, or nothing at all.
///
/// Implementations are not required to be reentrant; [`EngineHandle`] serializes all calls.
pub trait GeometryEngine: Send {
    /// Executes the named operation.
    fn call(&mut self, operation: &str, args: &[JsonValue])
        -> Result<Option<JsonValue>, EngineFault>;
}

type EngineLoader = Box<dyn FnOnce() -> Result<Box<dyn GeometryEngine>, EngineFault> + Send>;
type FaultHandler = Box<dyn Fn(&EngineFault) + Send + Sync>;

enum EngineState {
    Unloaded(EngineLoader),
    Ready(Box<dyn GeometryEngine>),
    Unavailable,
}

/// Shared handle to a geometry engine.
///
/// Calls through the handle are executed one at a time. The handle is usually created once and shared between
/// dispatchers with an `Arc`.
///
/// Faults reported by the engine are given to the fault handler (by default they are logged with `log::error!`)
/// and never returned to the caller: a failed call produces no result.
pub struct EngineHandle {
    state: Mutex<EngineState>,
    fault_handler: FaultHandler,
}

impl EngineHandle {
    /// Creates a handle for an engine that is ready to use.
    pub fn new(engine: impl GeometryEngine + 'static) -> Self {
        Self::with_state(EngineState::Ready(Box::new(engine)))
    }

    /// Creates a handle that loads the engine on first use.
    ///
    /// The loader runs exactly once. If it fails, the fault is reported and the handle stays unavailable: every
    /// following call produces no result.
    pub fn lazy<F>(loader: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn GeometryEngine>, EngineFault> + Send + 'static,
    {
        Self::with_state(EngineState::Unloaded(Box::new(loader)))
    }

    fn with_state(state: EngineState) -> Self {
        Self {
            state: Mutex::new(state),
            fault_handler: Box::new(|fault| log::error!("{fault}")),
        }
    }

    /// Replaces the handler that receives engine faults.
    pub fn with_fault_handler(
        mut self,
        handler: impl Fn(&EngineFault) + Send + Sync + 'static,
    ) -> Self {
        self.fault_handler = Box::new(handler);
        self
    }

    /// Returns true if the engine has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.lock(), EngineState::Ready(_))
    }

    /// Calls the named operation of the engine.
    ///
    /// Returns `None` if the engine is unavailable, answers with nothing (or `null`), or reports a fault.
    pub fn call(&self, operation: &str, args: &[JsonValue]) -> Option<JsonValue> {
        let mut state = self.state.lock();
        if matches!(*state, EngineState::Unloaded(_)) {
            let loaded = match std::mem::replace(&mut *state, EngineState::Unavailable) {
                EngineState::Unloaded(loader) => loader(),
                _ => return None,
            };

            match loaded {
                Ok(engine) => {
                    log::debug!("Geometry engine is loaded");
                    *state = EngineState::Ready(engine);
                }
                Err(fault) => {
                    drop(state);
                    (self.fault_handler)(&fault);
                    return None;
                }
            }
        }

        let EngineState::Ready(engine) = &mut *state else {
            log::debug!("Geometry engine is not available, skipping '{operation}'");
            return None;
        };

        let result = engine.call(operation, args);
        drop(state);

        match result {
            Ok(Some(JsonValue::Null)) | Ok(None) => None,
            Ok(value) => value,
            Err(fault) => {
                (self.fault_handler)(&fault);
                None
            }
        }
    }
}

impl Debug for EngineHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = match *self.state.lock() {
            EngineState::Unloaded(_) => "unloaded",
            EngineState::Ready(_) => "ready",
            EngineState::Unavailable => "unavailable",
        };
        f.debug_struct("EngineHandle").field("state", &state).finish()
    }
}
