use proptest::prelude::*;
use serde_json::json;
use trendchart_types::{AxisType, ChartModelConfiguration};

fn axis_type() -> impl Strategy<Value = AxisType> {
    prop_oneof![Just(AxisType::Build), Just(AxisType::Date)]
}

proptest! {
    #[test]
    fn build_count_threshold(n in any::<i32>()) {
        let payload = json!({ "numberOfBuilds": n }).to_string();
        let config = ChartModelConfiguration::from_payload(Some(payload.as_str()));
        prop_assert_eq!(config.build_count(), if n > 1 { n } else { 50 });
        prop_assert_eq!(config.day_count(), 0);
        prop_assert_eq!(config.axis_type(), AxisType::Build);
    }

    #[test]
    fn day_count_threshold(n in any::<i32>()) {
        let payload = json!({ "numberOfDays": n }).to_string();
        let config = ChartModelConfiguration::from_payload(Some(payload.as_str()));
        prop_assert_eq!(config.day_count(), if n > 1 { n } else { 0 });
        prop_assert_eq!(config.build_count(), 50);
    }

    #[test]
    fn definedness_follows_stored_counts(
        axis in axis_type(),
        builds in any::<i32>(),
        days in any::<i32>(),
    ) {
        let config = ChartModelConfiguration::new(axis, builds, days);
        prop_assert_eq!(config.axis_type(), axis);
        prop_assert_eq!(config.is_build_count_defined(), builds > 1);
        prop_assert_eq!(config.is_day_count_defined(), days > 0);
    }

    #[test]
    fn resolution_never_fails(payload in ".{0,64}") {
        let config = ChartModelConfiguration::from_payload(Some(payload.as_str()));
        prop_assert!(config.build_count() > 1);
        prop_assert!(config.day_count() == 0 || config.day_count() > 1);
    }

    #[test]
    fn integers_wider_than_64_bits_keep_low_bits(n in any::<u128>(), negative in any::<bool>()) {
        let sign = if negative { "-" } else { "" };
        let payload = format!(r#"{{"buildAsDomain": false, "numberOfBuilds": {sign}{n}}}"#);
        let low = (n % (1 << 32)) as u32;
        let expected = (if negative { low.wrapping_neg() } else { low }) as i32;

        let config = ChartModelConfiguration::from_payload(Some(payload.as_str()));
        prop_assert_eq!(config.axis_type(), AxisType::Date);
        prop_assert_eq!(config.build_count(), if expected > 1 { expected } else { 50 });
    }

    #[test]
    fn exponents_beyond_f64_saturate(exponent in 309..100_000_u32, negative in any::<bool>()) {
        let sign = if negative { "-" } else { "" };
        let payload = format!(r#"{{"buildAsDomain": false, "numberOfDays": {sign}1e{exponent}}}"#);

        let config = ChartModelConfiguration::from_payload(Some(payload.as_str()));
        prop_assert_eq!(config.axis_type(), AxisType::Date);
        prop_assert_eq!(config.day_count(), if negative { 0 } else { i32::MAX });
    }

    #[test]
    fn serialized_configuration_resolves_to_itself(
        axis in axis_type(),
        builds in 2..i32::MAX,
        days in prop_oneof![Just(0), 2..i32::MAX],
    ) {
        let config = ChartModelConfiguration::new(axis, builds, days);
        let payload = serde_json::to_string(&config).unwrap();
        prop_assert_eq!(ChartModelConfiguration::from_payload(Some(payload.as_str())), config);
    }
}
