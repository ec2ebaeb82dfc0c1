use crate::model::Series;

/// True if any supplied series is degenerate, i.e. collapsed to the
/// missing-value marker. Renderers call this once per chart with every
/// series that chart requires and skip rendering when it holds.
///
/// A zero-length series is not degenerate and passes through to the
/// rendering step.
pub fn has_missing_series(series: &[&Series]) -> bool {
    series.iter().any(|s| s.is_degenerate())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(values: Vec<Option<f64>>) -> Series {
        Series {
            units: String::new(),
            values,
        }
    }

    #[test]
    fn single_marker_series_is_degenerate() {
        assert!(series_of(vec![None]).is_degenerate());
        assert!(series_of(vec![None, None]).is_degenerate());
    }

    #[test]
    fn populated_series_is_not_degenerate() {
        assert!(!series_of(vec![Some(1.0), Some(2.0)]).is_degenerate());
    }

    #[test]
    fn mixed_series_is_not_degenerate() {
        // distinct-value set has two members, not just the marker
        assert!(!series_of(vec![Some(1.0), None]).is_degenerate());
    }

    #[test]
    fn zero_length_series_is_not_degenerate() {
        assert!(!series_of(Vec::new()).is_degenerate());
    }

    #[test]
    fn predicate_trips_on_any_degenerate_member() {
        let populated = series_of(vec![Some(5.0), Some(10.0)]);
        let empty = series_of(vec![None]);
        assert!(has_missing_series(&[&populated, &empty]));
        assert!(!has_missing_series(&[&populated]));
        assert!(!has_missing_series(&[]));
    }
}
