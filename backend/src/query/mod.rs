//! Query-string serialization for the geocoding service.
//!
//! The service takes every spatial filter as a delimiter-joined string
//! (`bound`, `nearbyPlaces`, `point`). [`wire`] owns the delimiter contract,
//! [`serializer`] turns typed requests into outbound URLs.

pub mod serializer;
pub mod wire;

pub use serializer::{
    build_nearby_url, build_search_url, encode_value, serialize_bound, serialize_nearby,
    PlaceNameEncoding,
};
pub use wire::{parse_bound, parse_nearby, parse_point, WireFormat};
