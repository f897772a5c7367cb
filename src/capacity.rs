use tracing::debug;

use crate::types::{CapacityResult, DeviceConfiguration, PowerResult};

/// Overhead on the raw energy need for battery ageing and reserve.
pub const SAFETY_MARGIN: f64 = 1.3;

const HOURS_PER_DAY: f64 = 24.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Off-the-shelf batteries come in 10 Ah steps.
const BATTERY_SIZE_STEP_AH: f64 = 10.0;

pub fn compute_capacity(power: &PowerResult, config: &DeviceConfiguration) -> CapacityResult {
    let days = config.deployment_days as f64;
    let interval = config.measurement_interval.as_secs() as f64;
    let volts = config.supply_voltage.volts() as f64;

    let hours_in_deployment = days * HOURS_PER_DAY;
    let total_energy_wh = power.avg_power_watts * hours_in_deployment;
    let required_capacity_wh = total_energy_wh * SAFETY_MARGIN;
    let required_capacity_ah = required_capacity_wh / volts;
    let total_measurements = (days * HOURS_PER_DAY * SECONDS_PER_HOUR) / interval;
    let energy_per_measurement_wh = (power.avg_power_watts * interval) / SECONDS_PER_HOUR;

    debug!(
        total_energy_wh,
        required_capacity_wh,
        required_capacity_ah,
        total_measurements,
        "Computed battery capacity"
    );

    CapacityResult {
        total_energy_wh,
        required_capacity_wh,
        required_capacity_ah,
        total_measurements,
        energy_per_measurement_wh,
    }
}

/// Smallest stock battery size covering `required_ah`.
pub fn recommended_battery_ah(required_ah: f64) -> f64 {
    (required_ah / BATTERY_SIZE_STEP_AH).ceil() * BATTERY_SIZE_STEP_AH
}
