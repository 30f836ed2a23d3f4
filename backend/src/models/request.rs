//! Outbound request shapes, one per query type the service understands.

use serde::{Deserialize, Serialize};

use super::place::{BoundingBox, GeoPoint, NearbyConstraint, SearchMode};

/// A free-text place search with optional spatial filters.
///
/// Built from one form submission and consumed by one outbound query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub place_name: String,
    pub bound: Option<BoundingBox>,
    /// Kept in the order the user entered them.
    pub nearby: Vec<NearbyConstraint>,
    pub mode: SearchMode,
}

impl SearchRequest {
    pub fn new(place_name: impl Into<String>) -> Self {
        Self {
            place_name: place_name.into(),
            ..Default::default()
        }
    }

    pub fn with_bound(mut self, bound: BoundingBox) -> Self {
        self.bound = Some(bound);
        self
    }

    pub fn with_nearby(mut self, constraint: NearbyConstraint) -> Self {
        self.nearby.push(constraint);
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Radius query around a single point, issued from a result's drill-down link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyRequest {
    pub place_name: String,
    pub point: GeoPoint,
    pub radius_miles: String,
}

impl NearbyRequest {
    /// Build a lookup, falling back to `default_radius` when the caller gave
    /// no radius or a blank one.
    pub fn from_lookup(
        place_name: impl Into<String>,
        point: GeoPoint,
        radius_miles: Option<&str>,
        default_radius: &str,
    ) -> Self {
        let radius = radius_miles
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(default_radius);

        Self {
            place_name: place_name.into(),
            point,
            radius_miles: radius.to_string(),
        }
    }
}
