//! Invariants of the power and capacity models over the whole input domain.

use approx::assert_relative_eq;
use proptest::prelude::*;

use totalite_calculator::power::{base_power, measurement_duration, TILT_SENSOR_COLD_W};
use totalite_calculator::{
    compute_capacity, compute_power, DeviceConfiguration, IntegrationCycles, LteCondition, MeasurementInterval,
    SupplyVoltage, TemperatureCondition, SAFETY_MARGIN,
};

fn any_configuration() -> impl Strategy<Value = DeviceConfiguration> {
    (
        (1u32..=20).prop_map(|step| step * 5),
        prop_oneof![Just(IntegrationCycles::One), Just(IntegrationCycles::Three)],
        proptest::sample::select(MeasurementInterval::ALL.to_vec()),
        1u32..=365,
        prop_oneof![Just(SupplyVoltage::V12), Just(SupplyVoltage::V24)],
        prop_oneof![Just(TemperatureCondition::Normal), Just(TemperatureCondition::Cold)],
        prop_oneof![Just(LteCondition::Good), Just(LteCondition::Poor)],
    )
        .prop_map(|(led, cycles, interval, days, voltage, temperature, lte)| DeviceConfiguration {
            led_power_percent: led,
            integration_cycles: cycles,
            measurement_interval: interval,
            deployment_days: days,
            supply_voltage: voltage,
            temperature,
            lte,
        })
}

proptest! {
    #[test]
    fn average_is_sum_of_contributions(config in any_configuration()) {
        let power = compute_power(&config);
        prop_assert_eq!(power.avg_power_watts, power.active_power_contrib_watts + power.idle_power_contrib_watts);
        prop_assert!(power.idle_time_seconds >= 0.0);
        prop_assert!(power.idle_power_contrib_watts >= 0.0);
    }

    #[test]
    fn capacity_applies_margin_and_voltage(config in any_configuration()) {
        let power = compute_power(&config);
        let capacity = compute_capacity(&power, &config);
        let volts = config.supply_voltage.volts() as f64;

        prop_assert_eq!(capacity.required_capacity_wh, capacity.total_energy_wh * SAFETY_MARGIN);
        prop_assert_eq!(capacity.required_capacity_ah, capacity.required_capacity_wh / volts);
        prop_assert_eq!(
            capacity.total_measurements,
            (config.deployment_days as f64 * 86400.0) / config.measurement_interval.as_secs() as f64
        );
    }

    #[test]
    fn brighter_led_draws_more_but_measures_faster(config in any_configuration()) {
        prop_assume!(config.led_power_percent < 100);
        let brighter = DeviceConfiguration { led_power_percent: config.led_power_percent + 5, ..config };

        prop_assert!(base_power(&brighter) > base_power(&config));
        prop_assert!(measurement_duration(&brighter) < measurement_duration(&config));
    }

    #[test]
    fn cold_adds_heating_before_lte_scaling(config in any_configuration()) {
        let normal = DeviceConfiguration {
            temperature: TemperatureCondition::Normal,
            lte: LteCondition::Good,
            ..config
        };
        let cold = DeviceConfiguration { temperature: TemperatureCondition::Cold, ..normal };
        let cold_poor = DeviceConfiguration { lte: LteCondition::Poor, ..cold };

        assert_relative_eq!(base_power(&cold) - base_power(&normal), TILT_SENSOR_COLD_W, epsilon = 1e-12);
        assert_relative_eq!(
            base_power(&cold_poor),
            (base_power(&normal) + TILT_SENSOR_COLD_W) * 1.15,
            epsilon = 1e-12
        );
    }

    #[test]
    fn single_cycle_always_saves_power(config in any_configuration()) {
        let three = DeviceConfiguration { integration_cycles: IntegrationCycles::Three, ..config };
        let one = DeviceConfiguration { integration_cycles: IntegrationCycles::One, ..config };
        let (p3, p1) = (compute_power(&three), compute_power(&one));

        assert_relative_eq!(p1.measurement_duration_seconds, p3.measurement_duration_seconds * 0.95, epsilon = 1e-9);
        prop_assert!(p1.avg_power_watts < p3.avg_power_watts);
    }
}

#[test]
fn single_cycle_derates_base_before_other_adjustments() {
    let three = DeviceConfiguration {
        supply_voltage: SupplyVoltage::V24,
        ..DeviceConfiguration::default()
    };
    let one = DeviceConfiguration {
        integration_cycles: IntegrationCycles::One,
        ..three
    };
    assert_relative_eq!(base_power(&one), base_power(&three) * 0.54, epsilon = 1e-12);
}

#[test]
fn reference_deployment_needs_twenty_amp_hour_battery() {
    let config = DeviceConfiguration::default();
    let power = compute_power(&config);
    let capacity = compute_capacity(&power, &config);

    assert_relative_eq!(power.avg_power_watts, 0.2342168888888889, epsilon = 1e-12);
    assert_relative_eq!(capacity.total_energy_wh, 168.63616, epsilon = 1e-9);
    assert_relative_eq!(capacity.required_capacity_ah, 18.268917333, epsilon = 1e-8);
    assert_eq!(totalite_calculator::recommended_battery_ah(capacity.required_capacity_ah), 20.0);
}
