use geocore::navigate::NavigationError;
use std::fmt::Display;
use thiserror::Error;

/// Failures raised by the chart renderers.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("chart backend failure: {0}")]
    Backend(String),
}

impl ChartError {
    /// Collapses the backend's generic drawing errors, which carry the
    /// backend type parameter, into a displayable variant.
    pub(crate) fn backend(err: impl Display) -> Self {
        ChartError::Backend(err.to_string())
    }
}
