//! Data model and record navigation for the site-characterization
//! plotting platform.
//!
//! The modules mirror the hierarchical layout of the site dataset files
//! while providing typed records, explicit navigation errors, and the
//! series-completeness checks the chart renderers gate on.

pub mod dataset;
pub mod model;
pub mod navigate;
pub mod telemetry;
pub mod validate;

pub use dataset::{DatasetError, SiteDataset};
pub use model::{Location, Series};
pub use navigate::{child_at, primary, NavigationError};
pub use validate::has_missing_series;
