use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::{DeviceConfiguration, IntegrationCycles, MeasurementInterval, SupplyVoltage};

const LED_POWER_MIN: u32 = 5;
const LED_POWER_MAX: u32 = 100;
const LED_POWER_STEP: u32 = 5;
const DEPLOYMENT_DAYS_MIN: u32 = 1;
const DEPLOYMENT_DAYS_MAX: u32 = 365;

/// Raw calculator input as it arrives from the environment or a JSON file.
///
/// Nothing here is trusted until [`Config::validate`] has turned it into a
/// [`DeviceConfiguration`]. Fields missing from a file take the same
/// defaults as missing environment variables.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub led_power_percent: u32,
    pub integration_cycles: u32,
    pub measurement_interval_secs: u32,
    pub deployment_days: u32,
    pub supply_voltage: u32,
    pub temperature_condition: String,
    pub lte_condition: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::from(DeviceConfiguration::default())
    }
}

impl From<DeviceConfiguration> for Config {
    fn from(device: DeviceConfiguration) -> Self {
        Config {
            led_power_percent: device.led_power_percent,
            integration_cycles: device.integration_cycles.into(),
            measurement_interval_secs: device.measurement_interval.into(),
            deployment_days: device.deployment_days,
            supply_voltage: device.supply_voltage.into(),
            temperature_condition: device.temperature.to_string(),
            lte_condition: device.lte.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for missing keys.
    /// A present but unparsable number is an error rather than a silent default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            led_power_percent: get_u32(&lookup, "LED_POWER_PERCENT", defaults.led_power_percent)?,
            integration_cycles: get_u32(&lookup, "INTEGRATION_CYCLES", defaults.integration_cycles)?,
            measurement_interval_secs: get_u32(
                &lookup,
                "MEASUREMENT_INTERVAL_SECS",
                defaults.measurement_interval_secs,
            )?,
            deployment_days: get_u32(&lookup, "DEPLOYMENT_DAYS", defaults.deployment_days)?,
            supply_voltage: get_u32(&lookup, "SUPPLY_VOLTAGE", defaults.supply_voltage)?,
            temperature_condition: lookup("TEMPERATURE_CONDITION").unwrap_or(defaults.temperature_condition),
            lte_condition: lookup("LTE_CONDITION").unwrap_or(defaults.lte_condition),
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        // Ensure the directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    pub fn validate(&self) -> Result<DeviceConfiguration, ConfigError> {
        let led = self.led_power_percent;
        if !(LED_POWER_MIN..=LED_POWER_MAX).contains(&led) {
            return Err(ConfigError::LedPowerOutOfRange(led));
        }
        if led % LED_POWER_STEP != 0 {
            return Err(ConfigError::LedPowerStep(led));
        }
        if !(DEPLOYMENT_DAYS_MIN..=DEPLOYMENT_DAYS_MAX).contains(&self.deployment_days) {
            return Err(ConfigError::DeploymentDaysOutOfRange(self.deployment_days));
        }

        Ok(DeviceConfiguration {
            led_power_percent: led,
            integration_cycles: IntegrationCycles::try_from(self.integration_cycles)?,
            measurement_interval: MeasurementInterval::try_from(self.measurement_interval_secs)?,
            deployment_days: self.deployment_days,
            supply_voltage: SupplyVoltage::try_from(self.supply_voltage)?,
            temperature: self.temperature_condition.parse()?,
            lte: self.lte_condition.parse()?,
        })
    }
}

fn get_u32<F>(lookup: &F, key: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(val) => val.trim().parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: val,
        }),
    }
}
