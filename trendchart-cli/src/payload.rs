use clap::Args;
use trendchart_types::{
    config::{DEFAULT_BUILD_COUNT, DEFAULT_DAY_COUNT},
    AxisType, ChartModelConfiguration,
};

use crate::handle_resp;

#[derive(Args, Debug)]
pub struct Payload {
    #[arg(long, default_value_t = AxisType::Build, help = "domain axis type: build or date")]
    axis: AxisType,

    #[arg(long, default_value_t = DEFAULT_BUILD_COUNT, allow_negative_numbers = true)]
    builds: i32,

    #[arg(long, default_value_t = DEFAULT_DAY_COUNT, allow_negative_numbers = true)]
    days: i32,
}

impl Payload {
    pub fn handle(self) {
        handle_resp(Ok(self.configuration()));
    }

    fn configuration(&self) -> ChartModelConfiguration {
        ChartModelConfiguration::new(self.axis, self.builds, self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_resolves_back() {
        let payload = Payload {
            axis: AxisType::Date,
            builds: 20,
            days: 7,
        };
        let config = payload.configuration();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"buildAsDomain":false,"numberOfBuilds":20,"numberOfDays":7}"#
        );
        assert_eq!(ChartModelConfiguration::from_payload(Some(json.as_str())), config);
    }
}
