use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::capacity::{compute_capacity, recommended_battery_ah, SAFETY_MARGIN};
use crate::guide::{distance_guide, format_count, format_duration, format_interval, share_percent};
use crate::power::{compute_power, IDLE_POWER_W};
use crate::types::{CapacityResult, DeviceConfiguration, PowerResult};

const SITE_CONDITIONS_NOTE: &str = "These calculations are based on controlled test data. \
Actual consumption may vary with specific site conditions.";

/// Everything the calculator shows for one configuration.
#[derive(Serialize, Debug, Clone)]
pub struct BatteryReport {
    pub generated_at: DateTime<Utc>,
    pub configuration: DeviceConfiguration,
    pub power: PowerResult,
    pub capacity: CapacityResult,
    pub idle_power_watts: f64,
    pub safety_margin_percent: f64,
    pub recommended_battery_ah: f64,
    pub active_share_percent: f64,
    pub idle_share_percent: f64,
    pub distance_guide: &'static str,
    pub interval_label: String,
}

impl BatteryReport {
    pub fn build(configuration: DeviceConfiguration) -> Self {
        let power = compute_power(&configuration);
        let capacity = compute_capacity(&power, &configuration);

        BatteryReport {
            generated_at: Utc::now(),
            configuration,
            power,
            capacity,
            idle_power_watts: IDLE_POWER_W,
            safety_margin_percent: ((SAFETY_MARGIN - 1.0) * 100.0).round(),
            recommended_battery_ah: recommended_battery_ah(capacity.required_capacity_ah),
            active_share_percent: share_percent(power.active_power_contrib_watts, power.avg_power_watts),
            idle_share_percent: share_percent(power.idle_power_contrib_watts, power.avg_power_watts),
            distance_guide: distance_guide(configuration.led_power_percent),
            interval_label: format_interval(configuration.measurement_interval.as_secs()),
        }
    }
}

impl fmt::Display for BatteryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let volts = self.configuration.supply_voltage.volts();
        let margin = self.safety_margin_percent;

        writeln!(f, "TotaLite Battery Requirements")?;
        writeln!(f, "=============================")?;
        writeln!(
            f,
            "LED power {}% ({}), {} integration cycle(s), {} V DC, {} temperature, {} LTE",
            self.configuration.led_power_percent,
            self.distance_guide,
            u32::from(self.configuration.integration_cycles),
            volts,
            self.configuration.temperature,
            self.configuration.lte,
        )?;
        writeln!(f)?;
        writeln!(f, "Required capacity:   {:.1} Ah at {}V DC", self.capacity.required_capacity_ah, volts)?;
        writeln!(
            f,
            "Energy required:     {:.0} Wh (with {}% safety margin)",
            self.capacity.required_capacity_wh, margin
        )?;
        writeln!(f, "Avg power draw:      {:.3} W (continuous average)", self.power.avg_power_watts)?;
        writeln!(f)?;

        writeln!(f, "Power Breakdown")?;
        writeln!(f, "  Peak during measurement: {:.3} W", self.power.base_power_watts)?;
        writeln!(f, "  Idle power:              {} W", self.idle_power_watts)?;
        writeln!(
            f,
            "  Measurement duration:    {}",
            format_duration(self.power.measurement_duration_seconds)
        )?;
        writeln!(f, "  Idle duration:           {}", format_duration(self.power.idle_time_seconds))?;
        writeln!(f, "  Active contribution:     {:.1}%", self.active_share_percent)?;
        writeln!(f, "  Idle contribution:       {:.1}%", self.idle_share_percent)?;
        writeln!(f)?;

        writeln!(f, "Deployment Summary")?;
        writeln!(f, "  Total measurements:      {}", format_count(self.capacity.total_measurements))?;
        writeln!(f, "  Energy per measurement:  {:.4} Wh", self.capacity.energy_per_measurement_wh)?;
        writeln!(f, "  Measurement interval:    {}", self.interval_label)?;
        writeln!(f, "  Total energy (no margin): {:.1} Wh", self.capacity.total_energy_wh)?;
        writeln!(f, "  Deployment duration:     {} days", self.configuration.deployment_days)?;
        writeln!(f, "  Safety margin applied:   {}%", margin)?;
        writeln!(f)?;

        writeln!(
            f,
            "Select a battery with capacity of at least {:.1} Ah at {}V ({:.0} Wh total).",
            self.capacity.required_capacity_ah, volts, self.capacity.required_capacity_wh
        )?;
        writeln!(
            f,
            "For optimal performance, consider using a battery rated for {} Ah or higher.",
            self.recommended_battery_ah
        )?;
        writeln!(f)?;
        write!(f, "Note: {}", SITE_CONDITIONS_NOTE)
    }
}
