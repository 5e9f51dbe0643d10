use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

/// Indexing scheme of the domain (horizontal) axis of a trend chart.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum AxisType {
    /// Axis indexed by build sequence number.
    #[default]
    #[strum(ascii_case_insensitive, serialize = "build")]
    Build,
    /// Axis indexed by calendar date.
    #[strum(ascii_case_insensitive, serialize = "date")]
    Date,
}

impl AxisType {
    #[must_use]
    pub fn from_build_as_domain(build_as_domain: bool) -> Self {
        if build_as_domain {
            AxisType::Build
        } else {
            AxisType::Date
        }
    }

    #[must_use]
    pub fn is_build_as_domain(self) -> bool {
        self == AxisType::Build
    }
}
