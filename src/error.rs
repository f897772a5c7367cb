use thiserror::Error;

/// Rejections raised while turning raw input into a [`crate::types::DeviceConfiguration`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LED power {0}% is outside 5-100%")]
    LedPowerOutOfRange(u32),
    #[error("LED power {0}% is not a multiple of 5")]
    LedPowerStep(u32),
    #[error("Unsupported integration cycles: {0} (expected 1 or 3)")]
    UnsupportedIntegrationCycles(u32),
    #[error("Unsupported measurement interval: {0}s")]
    UnsupportedInterval(u32),
    #[error("Deployment of {0} days is outside 1-365 days")]
    DeploymentDaysOutOfRange(u32),
    #[error("Unsupported supply voltage: {0}V (expected 12 or 24)")]
    UnsupportedVoltage(u32),
    #[error("Unknown temperature condition: {0}")]
    UnknownTemperatureCondition(String),
    #[error("Unknown LTE condition: {0}")]
    UnknownLteCondition(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: String, value: String },
}
