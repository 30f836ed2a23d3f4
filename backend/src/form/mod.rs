//! Search form input: field names, parsing and validation.

pub mod params;
pub mod validation;

pub use params::SearchForm;
pub use validation::{is_decimal, is_finite_number, ValidationError};
