mod axis_weighted;
mod center_surcharge;
mod cost_function;
mod flat;

pub use axis_weighted::AxisWeightedCost;
pub use center_surcharge::CenterSurchargeCost;
pub use cost_function::{CostFunction, CostFunctionName};
pub use flat::{FlatCost, UnitCost};
