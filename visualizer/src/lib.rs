//! Chart renderers for the site-characterization plotting platform.
//!
//! Each renderer locates its series through the `geocore` navigator,
//! gates on series completeness, and draws one fixed multi-panel figure
//! to a PNG file named from the location and chart-type tags. The figure
//! backend lives and dies inside each render call.

pub mod chart;
pub mod dispersion;
pub mod error;
pub mod field_test;
pub mod style;
pub mod velocity_profile;

pub use chart::ChartKind;
pub use error::ChartError;
pub use style::ChartStyle;
