use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::debug;
use trendchart_types::{AxisType, ChartModelConfiguration};

use crate::handle_resp;

#[derive(Args, Debug)]
pub struct Resolve {
    #[arg(short, long, env = "TRENDCHART_PAYLOAD", help = "JSON payload to resolve")]
    payload: Option<String>,

    #[arg(short, long, help = "read the payload from a file, takes precedence over --payload")]
    file: Option<PathBuf>,

    #[arg(long, help = "fail instead of falling back to defaults on an unusable payload")]
    strict: bool,
}

/// A resolved configuration together with the limits a chart should apply.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    pub axis_type: AxisType,
    pub build_count: i32,
    pub build_count_defined: bool,
    pub day_count: i32,
    pub day_count_defined: bool,
}

impl From<ChartModelConfiguration> for Resolved {
    fn from(config: ChartModelConfiguration) -> Self {
        Self {
            axis_type: config.axis_type(),
            build_count: config.build_count(),
            build_count_defined: config.is_build_count_defined(),
            day_count: config.day_count(),
            day_count_defined: config.is_day_count_defined(),
        }
    }
}

impl Resolve {
    pub fn handle(self) {
        handle_resp(self.resolve());
    }

    fn resolve(self) -> Result<Resolved, String> {
        let payload = match self.file {
            Some(path) => {
                debug!(path = %path.display(), "Reading chart configuration payload");
                let payload = std::fs::read_to_string(&path)
                    .map_err(|e| format!("unable to read `{}`: {e}", path.display()))?;
                Some(payload)
            }
            None => self.payload,
        };

        let config = if self.strict {
            ChartModelConfiguration::try_from_payload(payload.as_deref().unwrap_or_default())
                .map_err(|e| e.to_string())?
        } else {
            ChartModelConfiguration::from_payload(payload.as_deref())
        };
        Ok(config.into())
    }
}
