//! # Geosearch Web
//!
//! Server-rendered front end for a place-name geocoding service.
//!
//! A user fills in a place name, an optional bounding box and any number of
//! "near this point" constraints. This crate validates the form, serializes
//! it into the service's query string, fetches the XML result document and
//! renders it as an HTML table whose rows link to a radius lookup around
//! each result.
//!
//! ## Architecture
//!
//! - [`models`]: points, constraints, requests and results
//! - [`query`]: wire format and query-string serialization
//! - [`form`]: search form parsing and validation
//! - [`render`]: XML result parsing, result table and page markup
//! - [`services`]: the geocoding service client and the two round trips
//! - [`config`]: TOML + environment configuration
//! - [`http`]: axum page controllers (feature `http-server`)

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod query;
pub mod render;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
