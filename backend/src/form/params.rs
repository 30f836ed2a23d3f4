//! The search form as submitted by the browser.
//!
//! Field names match the legacy pages, so bookmarked result
//! URLs keep working.

use std::collections::HashMap;

use super::validation::{is_blank_or_decimal, ValidationError};
use crate::models::{BoundingBox, GeoPoint, NearbyConstraint, SearchMode, SearchRequest};

pub const PLACE_NAME: &str = "placeName";
pub const NEARBY_POINT_COUNT: &str = "nearbyPointCount";
pub const SEARCH_OPTION: &str = "searchOption";
/// Submit button on the form page that asks for one more nearby row.
pub const ADD_NEARBY_POINT: &str = "addNearbyPoint";

/// `boundPoint1Lat`, `boundPoint2Lng`, ...
pub fn bound_field(corner: usize, suffix: &str) -> String {
    format!("boundPoint{}{}", corner, suffix)
}

/// `nearbyPoint1Lat`, `nearbyPoint3Rng`, ... (1-based)
pub fn nearby_field(index: usize, suffix: &str) -> String {
    format!("nearbyPoint{}{}", index, suffix)
}

/// Raw, trimmed form state. Blank fields are kept so the form can be
/// re-rendered exactly as the user left it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub place_name: String,
    pub bound: [GeoPoint; 2],
    pub nearby: Vec<NearbyConstraint>,
    pub mode: SearchMode,
}

impl SearchForm {
    /// Read the form from decoded query parameters.
    ///
    /// Rows `1..=nearbyPointCount` are read; a count that is not a
    /// non-negative integer reads as zero, and counts above `max_rows` are
    /// clamped.
    pub fn from_params(params: &HashMap<String, String>, max_rows: usize) -> Self {
        let field = |name: &str| {
            params
                .get(name)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let count = params
            .get(NEARBY_POINT_COUNT)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0)
            .min(max_rows);

        let bound = [1, 2].map(|corner| {
            GeoPoint::new(
                field(bound_field(corner, "Lat").as_str()),
                field(bound_field(corner, "Lng").as_str()),
            )
        });

        let nearby = (1..=count)
            .map(|i| {
                NearbyConstraint::new(
                    GeoPoint::new(
                        field(nearby_field(i, "Lat").as_str()),
                        field(nearby_field(i, "Lng").as_str()),
                    ),
                    field(nearby_field(i, "Rng").as_str()),
                )
            })
            .collect();

        Self {
            place_name: field(PLACE_NAME),
            bound,
            nearby,
            mode: SearchMode::from_form_value(field(SEARCH_OPTION).as_str()),
        }
    }

    /// Append a blank nearby row unless `max_rows` is reached.
    pub fn add_nearby_row(&mut self, max_rows: usize) {
        if self.nearby.len() < max_rows {
            self.nearby.push(NearbyConstraint::default());
        }
    }

    /// Check the form and turn it into a request.
    ///
    /// The place name is checked first, then the bound, then the nearby rows;
    /// the first failure is returned.
    pub fn validate(&self) -> Result<SearchRequest, ValidationError> {
        if self.place_name.is_empty() {
            return Err(ValidationError::MissingPlaceName);
        }

        let bound_ok = self
            .bound
            .iter()
            .all(|p| is_blank_or_decimal(&p.latitude) && is_blank_or_decimal(&p.longitude));
        if !bound_ok {
            return Err(ValidationError::InvalidBound);
        }

        let nearby_ok = self.nearby.iter().all(|c| {
            is_blank_or_decimal(&c.point.latitude)
                && is_blank_or_decimal(&c.point.longitude)
                && is_blank_or_decimal(&c.radius_miles)
        });
        if !nearby_ok {
            return Err(ValidationError::InvalidNearbyPoints);
        }

        let [corner1, corner2] = self.bound.clone();
        let bound = BoundingBox::new(corner1, corner2);

        Ok(SearchRequest {
            place_name: self.place_name.clone(),
            bound: bound.is_complete().then_some(bound),
            nearby: self.nearby.clone(),
            mode: self.mode,
        })
    }
}
