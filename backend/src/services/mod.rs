//! Service layer: one round trip to the geocoding service per page.
//!
//! [`client`] owns the HTTP seam, [`search`] and [`nearby`] compose the
//! request URL, fetch it and turn the XML body into result rows.

pub mod client;
pub mod nearby;
pub mod search;

pub use client::{HttpPlaceService, PlaceService};
pub use nearby::run_nearby;
pub use search::run_search;
