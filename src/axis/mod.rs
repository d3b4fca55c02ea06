mod config;
mod json_contract;
mod limit_line;
pub mod ticks;
mod y_axis;

pub use config::{
    AxisConfig, AxisDependency, AxisLineStyle, GridLineStyle, YAxisLabelPosition, ZeroLineStyle,
};
pub use json_contract::{AXIS_CONFIG_JSON_SCHEMA_V1, AxisConfigJsonContractV1};
pub use limit_line::{LimitLabelPosition, LimitLine};
pub use ticks::{AxisValues, compute_axis_values};
pub use y_axis::{AxisValueFormatter, YAxis};
