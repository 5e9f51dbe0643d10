use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{
    axis::AxisType,
    error::PayloadError,
    payload::{
        self, ChartPayload, BUILD_AS_DOMAIN_PROPERTY, NUMBER_OF_BUILDS_PROPERTY,
        NUMBER_OF_DAYS_PROPERTY,
    },
};

pub const DEFAULT_BUILD_COUNT: i32 = 50;
pub const DEFAULT_DAY_COUNT: i32 = 0;
pub const DEFAULT_AXIS_TYPE: AxisType = AxisType::Build;

/// Configures the model of a trend chart: the type of the domain axis and how
/// many builds or days of history are plotted.
///
/// Values are immutable. Counts are stored as given; whether a count should be
/// applied by the chart is answered by [`Self::is_build_count_defined`] and
/// [`Self::is_day_count_defined`].
///
/// Serializes into the payload form understood by [`Self::from_payload`].
/// Deserializing never fails: any JSON value is resolved the same way a
/// payload is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ChartPayload", from = "Value")]
pub struct ChartModelConfiguration {
    axis_type: AxisType,
    build_count: i32,
    day_count: i32,
}

impl Default for ChartModelConfiguration {
    fn default() -> Self {
        Self::from_axis_type(DEFAULT_AXIS_TYPE)
    }
}

impl ChartModelConfiguration {
    #[must_use]
    pub fn new(axis_type: AxisType, build_count: i32, day_count: i32) -> Self {
        Self {
            axis_type,
            build_count,
            day_count,
        }
    }

    /// Configuration with the given axis type and the default counts.
    #[must_use]
    pub fn from_axis_type(axis_type: AxisType) -> Self {
        Self::new(axis_type, DEFAULT_BUILD_COUNT, DEFAULT_DAY_COUNT)
    }

    /// Resolve an optional JSON payload.
    ///
    /// A missing, empty or unusable payload resolves to the default
    /// configuration. Unknown properties are ignored and every recognized
    /// property falls back to its default on its own.
    #[must_use]
    pub fn from_payload(payload: Option<&str>) -> Self {
        let Some(payload) = payload else {
            return Self::default();
        };
        match Self::try_from_payload(payload) {
            Ok(config) => config,
            Err(PayloadError::Empty) => Self::default(),
            Err(err) => {
                debug!(error = %err, "Discarding chart configuration payload");
                Self::default()
            }
        }
    }

    /// Resolve a JSON payload, reporting payloads that are not a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is empty, is not valid JSON or is not a
    /// JSON object. Properties inside an object never cause an error.
    pub fn try_from_payload(payload: &str) -> Result<Self, PayloadError> {
        let object = payload::parse_object(payload)?;
        Ok(Self::from_object(&object))
    }

    /// Resolve the recognized properties of an already parsed payload object.
    #[must_use]
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self::new(
            axis_type_property(object),
            count_property(object, NUMBER_OF_BUILDS_PROPERTY, DEFAULT_BUILD_COUNT),
            count_property(object, NUMBER_OF_DAYS_PROPERTY, DEFAULT_DAY_COUNT),
        )
    }

    #[must_use]
    pub fn axis_type(&self) -> AxisType {
        self.axis_type
    }

    #[must_use]
    pub fn build_count(&self) -> i32 {
        self.build_count
    }

    /// Whether the chart should be limited to the last [`Self::build_count`] builds.
    #[must_use]
    pub fn is_build_count_defined(&self) -> bool {
        self.build_count > 1
    }

    #[must_use]
    pub fn day_count(&self) -> i32 {
        self.day_count
    }

    /// Whether the chart should be limited to the last [`Self::day_count`] days.
    #[must_use]
    pub fn is_day_count_defined(&self) -> bool {
        self.day_count > 0
    }
}

impl From<Value> for ChartModelConfiguration {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(object) => Self::from_object(&object),
            _ => Self::default(),
        }
    }
}

impl From<ChartModelConfiguration> for ChartPayload {
    fn from(config: ChartModelConfiguration) -> Self {
        Self {
            build_as_domain: config.axis_type.is_build_as_domain(),
            number_of_builds: config.build_count,
            number_of_days: config.day_count,
        }
    }
}

fn axis_type_property(object: &Map<String, Value>) -> AxisType {
    object
        .get(BUILD_AS_DOMAIN_PROPERTY)
        .map_or(DEFAULT_AXIS_TYPE, |value| {
            AxisType::from_build_as_domain(payload::as_bool(value, true))
        })
}

// Both counts only accept values above one, the day count included.
fn count_property(object: &Map<String, Value>, property: &str, default: i32) -> i32 {
    let Some(value) = object.get(property) else {
        return default;
    };
    let count = payload::as_int(value, default);
    if count > 1 {
        count
    } else {
        trace!(property, count, default, "Falling back to default count");
        default
    }
}
