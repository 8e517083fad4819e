//! Configuration objects passed to the geometry engine.

use serde::{Deserialize, Serialize};

/// Number of vertices used by default to approximate curves of a buffer.
pub const DEFAULT_STEPS: u32 = 45;

/// Units of distance understood by the engine.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Meters.
    #[default]
    Meters,
    /// Kilometers.
    Kilometers,
    /// International feet.
    Feet,
    /// Statute miles.
    Miles,
    /// Degrees of arc on the sphere.
    Degrees,
}

impl Units {
    /// Token of the unit in the configuration object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Meters => "meters",
            Units::Kilometers => "kilometers",
            Units::Feet => "feet",
            Units::Miles => "miles",
            Units::Degrees => "degrees",
        }
    }
}

/// Configuration of the `buffer` operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BufferOptions {
    /// Units of the buffer distance.
    pub units: Units,
    /// Number of vertices used to draw curves.
    pub steps: u32,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            units: Units::default(),
            steps: DEFAULT_STEPS,
        }
    }
}

impl BufferOptions {
    /// Sets the units of distance.
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Sets the number of vertices used to draw curves.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

/// Configuration of the `destination` operation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DestinationOptions {
    /// Units of the distance.
    pub units: Units,
}

impl DestinationOptions {
    /// Sets the units of distance.
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }
}
