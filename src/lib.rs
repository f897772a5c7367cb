//! Battery sizing for TotaLite monitoring deployments.
//!
//! [`compute_power`] turns a [`DeviceConfiguration`] into an average power
//! draw, [`compute_capacity`] turns that into the energy and battery
//! capacity a deployment needs. Both are pure; validation of raw input lives
//! in [`config`].

pub mod capacity;
pub mod config;
pub mod error;
pub mod guide;
pub mod power;
pub mod report;
pub mod types;

pub use capacity::{compute_capacity, recommended_battery_ah, SAFETY_MARGIN};
pub use config::Config;
pub use error::ConfigError;
pub use power::compute_power;
pub use report::BatteryReport;
pub use types::{
    CapacityResult, DeviceConfiguration, IntegrationCycles, LteCondition, MeasurementInterval, PowerResult,
    SupplyVoltage, TemperatureCondition,
};
