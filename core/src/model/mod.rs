pub mod geotechnical;
pub mod location;
pub mod series;

pub use geotechnical::{
    ConePenetrationTest, FieldTest, FieldTestChildren, GeotechnicalChildren, GeotechnicalData,
    GrainSizeDistribution, LabTest, LabTestChildren, NonlinearTest, StandardPenetrationTest,
};
pub use location::{DispersionData, Location, LocationChildren, VelocityProfile};
pub use series::Series;
