use anyhow::{bail, Result};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use totalite_calculator::{BatteryReport, Config};

const USAGE: &str = "Usage: totalite-calculator [--config PATH] [--json] [--save PATH] [--help]

Without --config the configuration is read from LED_POWER_PERCENT, INTEGRATION_CYCLES,
MEASUREMENT_INTERVAL_SECS, DEPLOYMENT_DAYS, SUPPLY_VOLTAGE, TEMPERATURE_CONDITION and
LTE_CONDITION, each falling back to the calculator default.";

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => parsed.config_path = Some(PathBuf::from(path)),
                None => bail!("--config requires a path"),
            },
            "--save" => match args.next() {
                Some(path) => parsed.save_path = Some(PathBuf::from(path)),
                None => bail!("--save requires a path"),
            },
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            other => bail!("Unknown argument: {}\n\n{}", other, USAGE),
        }
    }
    Ok(parsed)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr);

    if env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    init_logging();

    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = match &args.config_path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::from_env()?,
    };
    log::debug!("Raw configuration: {:?}", config);

    let device = config.validate()?;
    tracing::info!(
        led_power_percent = device.led_power_percent,
        measurement_interval_secs = device.measurement_interval.as_secs(),
        deployment_days = device.deployment_days,
        supply_voltage = device.supply_voltage.volts(),
        "Calculating battery requirements"
    );

    if let Some(path) = &args.save_path {
        Config::from(device).save_to_file(path)?;
        log::info!("Saved configuration to {}", path.display());
    }

    let report = BatteryReport::build(device);
    tracing::info!(
        avg_power_watts = report.power.avg_power_watts,
        required_capacity_ah = report.capacity.required_capacity_ah,
        recommended_battery_ah = report.recommended_battery_ah,
        "Calculation complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_all_flags() {
        let parsed = parse_args(args(&["--config", "a.json", "--json", "--save", "b.json"])).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("a.json")));
        assert_eq!(parsed.save_path, Some(PathBuf::from("b.json")));
        assert!(parsed.json);
        assert!(!parsed.help);
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["--config"])).is_err());
    }
}
