use serde::Deserialize;

/// A named, unit-tagged sequence of measurements.
///
/// Values hold either a real number or the missing-value marker (JSON
/// `null`). A series that carries no data at all arrives as a single
/// marker element rather than an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub units: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// True when the series collapsed to the missing-value marker: the
    /// distinct-value set is exactly the marker and nothing else.
    pub fn is_degenerate(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|value| value.is_none())
    }

    /// Concrete measurement values with the missing marker filtered out.
    pub fn numbers(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }
}
