use std::ops::Range;
use std::path::{Path, PathBuf};

/// Figure size for the single- and two-panel charts, in pixels.
pub const DEFAULT_FIGURE_SIZE: (u32, u32) = (640, 480);

/// Fixed size of the four-panel sounding figure.
pub const FIELD_FIGURE_SIZE: (u32, u32) = (800, 500);

/// The four chart families produced per location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    VelocityProfile,
    DispersionData,
    LabTest,
    FieldTest,
}

impl ChartKind {
    pub fn tag_suffix(self) -> &'static str {
        match self {
            ChartKind::VelocityProfile => "velocityProfile",
            ChartKind::DispersionData => "dispersionData",
            ChartKind::LabTest => "labTest",
            ChartKind::FieldTest => "fieldTest",
        }
    }

    /// The `{locationName}_{chartType}` string naming the output artifact.
    pub fn tag(self, location_name: &str) -> String {
        format!("{}_{}", location_name, self.tag_suffix())
    }

    pub fn output_path(self, out_dir: &Path, location_name: &str) -> PathBuf {
        out_dir.join(format!("{}.png", self.tag(location_name)))
    }
}

/// Padded axis range over a value sequence. Falls back to a unit range
/// when no finite values are present, so an empty panel still lays out.
pub(crate) fn axis_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let padding = if span.abs() < 1e-9 { 0.5 } else { span * 0.05 };
    (min - padding)..(max + padding)
}

/// Expands a point sequence into a pre-step trace: each value holds until
/// the next sample position.
pub(crate) fn step_trace(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut trace = Vec::with_capacity(points.len() * 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        if i > 0 {
            trace.push((points[i - 1].0, y));
        }
        trace.push((x, y));
    }
    trace
}
