/// Rejected configuration values.
///
/// The layout engine itself never fails; these are only returned by the strict constructors and
/// `validate` helpers, for callers that prefer to catch bad settings early.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid estimated item size: {0} (expected a finite value >= 1)")]
    InvalidItemSize(f64),

    #[error("invalid end-reached threshold: {0} (expected a finite value in (0, 1])")]
    InvalidThreshold(f64),
}
