//! Turning service responses into pages.
//!
//! [`xml`] reads the response body, [`table`] builds the result view model,
//! [`page`] wraps everything in the site layout. All markup goes through
//! `maud`, so text from the service or the user is always escaped.

pub mod page;
pub mod table;
pub mod xml;

pub use table::{nearby_link, ResultRow, ResultTable, TableKind};
pub use xml::{parse_places, PlaceRecord};
