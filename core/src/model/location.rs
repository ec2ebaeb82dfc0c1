use crate::model::geotechnical::GeotechnicalData;
use crate::model::series::Series;
use serde::Deserialize;

/// A single measurement site, identified by name and owning the typed
/// child record categories consulted by the chart renderers.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub children: LocationChildren,
}

/// Top-level child categories of a location. Absent categories
/// deserialize as empty sequences and surface as navigation errors when a
/// renderer asks for their primary record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationChildren {
    #[serde(default)]
    pub velocity_profile: Vec<VelocityProfile>,
    #[serde(default)]
    pub dispersion_data: Vec<DispersionData>,
    #[serde(default)]
    pub geotechnical_data: Vec<GeotechnicalData>,
}

/// Co-indexed compression/shear velocity measurements by depth.
#[derive(Debug, Clone, Deserialize)]
pub struct VelocityProfile {
    pub vp: Series,
    pub vs: Series,
    pub depth: Series,
}

/// Theoretical and inverted dispersion curves over a shared frequency axis.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionData {
    pub theoretical_dispersion_velocity: Series,
    pub site_dispersion_velocity: Series,
    pub frequency: Series,
}
