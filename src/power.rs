use tracing::debug;

use crate::types::{
    DeviceConfiguration, IntegrationCycles, LteCondition, PowerResult, SupplyVoltage, TemperatureCondition,
};

// Calibrated against controlled test data. Keep the values exact.
pub const IDLE_POWER_W: f64 = 0.066;
pub const TILT_SENSOR_COLD_W: f64 = 0.071;
pub const SLOPE_3_CYCLES: f64 = 0.00233;
pub const INTERCEPT_3_CYCLES: f64 = 0.3367;

const SINGLE_CYCLE_POWER_FACTOR: f64 = 0.54;
const SINGLE_CYCLE_DURATION_FACTOR: f64 = 0.95;
const HIGH_VOLTAGE_FACTOR: f64 = 1.12;
const POOR_LTE_FACTOR: f64 = 1.15;

const BASE_MEASUREMENT_SECS: f64 = 380.0;
const DURATION_PER_LED_PERCENT_SECS: f64 = 0.22;

/// Peak draw during a measurement.
///
/// Adjustments are applied in a fixed order: cycle derating, regulator
/// overhead, cold heating (additive), then LTE scaling on top of the heating load.
pub fn base_power(config: &DeviceConfiguration) -> f64 {
    let mut base = SLOPE_3_CYCLES * config.led_power_percent as f64 + INTERCEPT_3_CYCLES;

    if config.integration_cycles == IntegrationCycles::One {
        base *= SINGLE_CYCLE_POWER_FACTOR;
    }
    if config.supply_voltage == SupplyVoltage::V24 {
        base *= HIGH_VOLTAGE_FACTOR;
    }
    if config.temperature == TemperatureCondition::Cold {
        base += TILT_SENSOR_COLD_W;
    }
    if config.lte == LteCondition::Poor {
        base *= POOR_LTE_FACTOR;
    }

    base
}

/// Length of one measurement in seconds. Dimmer LEDs need longer exposures.
pub fn measurement_duration(config: &DeviceConfiguration) -> f64 {
    let mut duration =
        BASE_MEASUREMENT_SECS + (100.0 - config.led_power_percent as f64) * DURATION_PER_LED_PERCENT_SECS;

    if config.integration_cycles == IntegrationCycles::One {
        duration *= SINGLE_CYCLE_DURATION_FACTOR;
    }

    duration
}

pub fn compute_power(config: &DeviceConfiguration) -> PowerResult {
    let interval = config.measurement_interval.as_secs() as f64;

    let base_power_watts = base_power(config);
    let measurement_duration_seconds = measurement_duration(config);
    // A measurement longer than its interval leaves no idle time.
    let idle_time_seconds = (interval - measurement_duration_seconds).max(0.0);

    let active_power_contrib_watts = (base_power_watts * measurement_duration_seconds) / interval;
    let idle_power_contrib_watts = (IDLE_POWER_W * idle_time_seconds) / interval;
    let avg_power_watts = active_power_contrib_watts + idle_power_contrib_watts;

    debug!(
        base_power_watts,
        measurement_duration_seconds,
        idle_time_seconds,
        avg_power_watts,
        "Computed power profile"
    );

    PowerResult {
        base_power_watts,
        measurement_duration_seconds,
        idle_time_seconds,
        active_power_contrib_watts,
        idle_power_contrib_watts,
        avg_power_watts,
    }
}
