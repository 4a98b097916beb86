use serde::{Deserialize, Serialize};
use std::fmt;

/// Location string as returned by the suggestion service,
/// e.g. `"53226, Milwaukee, WI, USA"`. Passed on unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalLocation(String);

impl CanonicalLocation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub label: String,
    /// Display text as shown on the page, e.g. `"High: 45 °F"`.
    pub temperature: String,
    pub short_description: String,
    /// Empty when the page has no detailed entry at this period's index.
    pub long_description: String,
}

impl fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.label, self.long_description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub periods: Vec<ForecastPeriod>,
    pub advisories: Vec<Advisory>,
}

impl ForecastResult {
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() && self.advisories.is_empty()
    }
}
