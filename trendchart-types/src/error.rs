use thiserror::Error;

/// Reasons a configuration payload cannot be used at all.
///
/// Only produced by [`ChartModelConfiguration::try_from_payload`]. The lenient
/// [`ChartModelConfiguration::from_payload`] folds every variant into the
/// default configuration.
///
/// [`ChartModelConfiguration::try_from_payload`]: crate::config::ChartModelConfiguration::try_from_payload
/// [`ChartModelConfiguration::from_payload`]: crate::config::ChartModelConfiguration::from_payload
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,
    #[error("payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("payload is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}
