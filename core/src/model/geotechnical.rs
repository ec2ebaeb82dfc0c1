use crate::model::series::Series;
use serde::Deserialize;

/// Container record grouping the laboratory and field test batteries run
/// at a location.
#[derive(Debug, Clone, Deserialize)]
pub struct GeotechnicalData {
    #[serde(default)]
    pub children: GeotechnicalChildren,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeotechnicalChildren {
    #[serde(default)]
    pub lab_test: Vec<LabTest>,
    #[serde(default)]
    pub field_test: Vec<FieldTest>,
}

/// Laboratory battery: one grain-size distribution plus a family of
/// nonlinear soil-property curves.
#[derive(Debug, Clone, Deserialize)]
pub struct LabTest {
    #[serde(default)]
    pub children: LabTestChildren,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTestChildren {
    #[serde(default)]
    pub grain_size_distribution: Vec<GrainSizeDistribution>,
    #[serde(default)]
    pub nonlinear_test: Vec<NonlinearTest>,
}

/// Portion-finer percentage by sieve grain size.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrainSizeDistribution {
    pub grain_size: Series,
    pub portion_finer: Series,
}

/// One soil-property curve over cyclic shear strain. The `property_type`
/// tag stays a free-form string so unrecognized entries survive
/// deserialization and can be skipped at render time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonlinearTest {
    pub property_type: String,
    pub strain: Series,
    pub property: Series,
}

/// Field battery: one SPT sounding and one CPT sounding, with
/// independently indexed depth series.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldTest {
    #[serde(default)]
    pub children: FieldTestChildren,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTestChildren {
    #[serde(default)]
    pub standard_penetration_test: Vec<StandardPenetrationTest>,
    #[serde(default)]
    pub cone_penetration_test: Vec<ConePenetrationTest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandardPenetrationTest {
    #[serde(rename = "Blow count (N)")]
    pub blow_count: Series,
    pub depth: Series,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConePenetrationTest {
    #[serde(rename = "Sleeve Friction")]
    pub sleeve_friction: Series,
    #[serde(rename = "Tip Resistance")]
    pub tip_resistance: Series,
    #[serde(rename = "Pore Pressure")]
    pub pore_pressure: Series,
    pub depth: Series,
}
