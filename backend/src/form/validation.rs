//! Numeric checks applied to a submitted search form.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, digits, optional fractional part.
static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]+(\.[0-9]+)?$").expect("valid decimal regex"));

/// Why a submission was rejected before any request was built.
///
/// The display strings are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter the name of the location.")]
    MissingPlaceName,
    #[error("Invalid values for bound.")]
    InvalidBound,
    #[error("Invalid values for nearby points.")]
    InvalidNearbyPoints,
}

pub fn is_decimal(value: &str) -> bool {
    DECIMAL.is_match(value)
}

/// Any finite number as the service prints it, exponent notation included
/// (`42.44`, `1.0`, `8.5E-4`). `NaN` and infinities are rejected.
pub fn is_finite_number(value: &str) -> bool {
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// A blank field is an omitted constraint, not a malformed one.
pub(crate) fn is_blank_or_decimal(value: &str) -> bool {
    value.is_empty() || is_decimal(value)
}
