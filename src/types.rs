use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u32", into = "u32")]
pub enum IntegrationCycles {
    One,
    Three,
}

impl TryFrom<u32> for IntegrationCycles {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(IntegrationCycles::One),
            3 => Ok(IntegrationCycles::Three),
            other => Err(ConfigError::UnsupportedIntegrationCycles(other)),
        }
    }
}

impl From<IntegrationCycles> for u32 {
    fn from(cycles: IntegrationCycles) -> Self {
        match cycles {
            IntegrationCycles::One => 1,
            IntegrationCycles::Three => 3,
        }
    }
}

/// Time between two measurements, restricted to the intervals the device firmware offers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub enum MeasurementInterval {
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    TwentyFourHours,
}

impl MeasurementInterval {
    pub const ALL: [MeasurementInterval; 9] = [
        MeasurementInterval::FiveMinutes,
        MeasurementInterval::FifteenMinutes,
        MeasurementInterval::ThirtyMinutes,
        MeasurementInterval::OneHour,
        MeasurementInterval::TwoHours,
        MeasurementInterval::FourHours,
        MeasurementInterval::SixHours,
        MeasurementInterval::TwelveHours,
        MeasurementInterval::TwentyFourHours,
    ];

    pub fn as_secs(self) -> u32 {
        match self {
            MeasurementInterval::FiveMinutes => 300,
            MeasurementInterval::FifteenMinutes => 900,
            MeasurementInterval::ThirtyMinutes => 1800,
            MeasurementInterval::OneHour => 3600,
            MeasurementInterval::TwoHours => 7200,
            MeasurementInterval::FourHours => 14400,
            MeasurementInterval::SixHours => 21600,
            MeasurementInterval::TwelveHours => 43200,
            MeasurementInterval::TwentyFourHours => 86400,
        }
    }
}

impl TryFrom<u32> for MeasurementInterval {
    type Error = ConfigError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        MeasurementInterval::ALL
            .into_iter()
            .find(|interval| interval.as_secs() == secs)
            .ok_or(ConfigError::UnsupportedInterval(secs))
    }
}

impl From<MeasurementInterval> for u32 {
    fn from(interval: MeasurementInterval) -> Self {
        interval.as_secs()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u32", into = "u32")]
pub enum SupplyVoltage {
    V12,
    V24,
}

impl SupplyVoltage {
    pub fn volts(self) -> u32 {
        match self {
            SupplyVoltage::V12 => 12,
            SupplyVoltage::V24 => 24,
        }
    }
}

impl TryFrom<u32> for SupplyVoltage {
    type Error = ConfigError;

    fn try_from(volts: u32) -> Result<Self, Self::Error> {
        match volts {
            12 => Ok(SupplyVoltage::V12),
            24 => Ok(SupplyVoltage::V24),
            other => Err(ConfigError::UnsupportedVoltage(other)),
        }
    }
}

impl From<SupplyVoltage> for u32 {
    fn from(voltage: SupplyVoltage) -> Self {
        voltage.volts()
    }
}

/// Ambient temperature band. Below 10°C the tilt sensor has to be heated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCondition {
    Normal,
    Cold,
}

impl FromStr for TemperatureCondition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(TemperatureCondition::Normal),
            "cold" => Ok(TemperatureCondition::Cold),
            _ => Err(ConfigError::UnknownTemperatureCondition(s.to_string())),
        }
    }
}

impl fmt::Display for TemperatureCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureCondition::Normal => write!(f, "normal"),
            TemperatureCondition::Cold => write!(f, "cold"),
        }
    }
}

/// LTE coverage at the deployment site. Poor coverage raises transmit power.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LteCondition {
    Good,
    Poor,
}

impl FromStr for LteCondition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(LteCondition::Good),
            "poor" => Ok(LteCondition::Poor),
            _ => Err(ConfigError::UnknownLteCondition(s.to_string())),
        }
    }
}

impl fmt::Display for LteCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LteCondition::Good => write!(f, "good"),
            LteCondition::Poor => write!(f, "poor"),
        }
    }
}

/// Validated operating parameters for one calculation.
///
/// Only `led_power_percent` and `deployment_days` carry ranges the type
/// system cannot express; [`crate::config::Config::validate`] checks them,
/// and it is the only way in from outside input.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct DeviceConfiguration {
    pub led_power_percent: u32,
    pub integration_cycles: IntegrationCycles,
    pub measurement_interval: MeasurementInterval,
    pub deployment_days: u32,
    pub supply_voltage: SupplyVoltage,
    pub temperature: TemperatureCondition,
    pub lte: LteCondition,
}

impl Default for DeviceConfiguration {
    fn default() -> Self {
        Self {
            led_power_percent: 50,
            integration_cycles: IntegrationCycles::Three,
            measurement_interval: MeasurementInterval::FifteenMinutes,
            deployment_days: 30,
            supply_voltage: SupplyVoltage::V12,
            temperature: TemperatureCondition::Normal,
            lte: LteCondition::Good,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PowerResult {
    /// Peak draw while a measurement is running.
    pub base_power_watts: f64,
    pub measurement_duration_seconds: f64,
    pub idle_time_seconds: f64,
    pub active_power_contrib_watts: f64,
    pub idle_power_contrib_watts: f64,
    /// Time-weighted average over one measurement interval.
    pub avg_power_watts: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CapacityResult {
    pub total_energy_wh: f64,
    pub required_capacity_wh: f64,
    pub required_capacity_ah: f64,
    /// Average measurement count over the deployment; not rounded.
    pub total_measurements: f64,
    pub energy_per_measurement_wh: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_round_trips_through_seconds() {
        for interval in MeasurementInterval::ALL {
            assert_eq!(MeasurementInterval::try_from(interval.as_secs()).unwrap(), interval);
        }
        assert!(matches!(
            MeasurementInterval::try_from(600),
            Err(ConfigError::UnsupportedInterval(600))
        ));
    }

    #[test]
    fn only_one_and_three_cycles_exist() {
        assert_eq!(IntegrationCycles::try_from(1).unwrap(), IntegrationCycles::One);
        assert_eq!(IntegrationCycles::try_from(3).unwrap(), IntegrationCycles::Three);
        assert!(IntegrationCycles::try_from(2).is_err());
    }

    #[test]
    fn conditions_parse_case_insensitively() {
        assert_eq!("Cold".parse::<TemperatureCondition>().unwrap(), TemperatureCondition::Cold);
        assert_eq!(" poor ".parse::<LteCondition>().unwrap(), LteCondition::Poor);
        assert!("freezing".parse::<TemperatureCondition>().is_err());
    }

    #[test]
    fn configuration_serializes_with_plain_numbers() {
        let json = serde_json::to_value(DeviceConfiguration::default()).unwrap();
        assert_eq!(json["integration_cycles"], 3);
        assert_eq!(json["measurement_interval"], 900);
        assert_eq!(json["supply_voltage"], 12);
        assert_eq!(json["temperature"], "normal");
        assert_eq!(json["lte"], "good");
    }

    #[test]
    fn unknown_enum_values_are_rejected_on_deserialize() {
        assert!(serde_json::from_str::<SupplyVoltage>("48").is_err());
        assert!(serde_json::from_str::<MeasurementInterval>("600").is_err());
        assert_eq!(serde_json::from_str::<SupplyVoltage>("24").unwrap(), SupplyVoltage::V24);
        assert_eq!(serde_json::from_str::<LteCondition>("\"poor\"").unwrap(), LteCondition::Poor);
    }
}
