//! Geographic primitives shared by requests and results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair kept as the decimal text it arrived as.
///
/// Form fields may be blank, and service coordinates are echoed back to the
/// user verbatim, so the text is never round-tripped through `f64`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: String,
    pub longitude: String,
}

impl GeoPoint {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Both coordinates are non-blank.
    pub fn is_complete(&self) -> bool {
        !self.latitude.trim().is_empty() && !self.longitude.trim().is_empty()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Rectangular filter given by two opposite corners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub corner1: GeoPoint,
    pub corner2: GeoPoint,
}

impl BoundingBox {
    pub fn new(corner1: GeoPoint, corner2: GeoPoint) -> Self {
        Self { corner1, corner2 }
    }

    /// All four coordinates are non-blank.
    pub fn is_complete(&self) -> bool {
        self.corner1.is_complete() && self.corner2.is_complete()
    }
}

/// A point-plus-radius filter. The radius is in miles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyConstraint {
    pub point: GeoPoint,
    pub radius_miles: String,
}

impl NearbyConstraint {
    pub fn new(point: GeoPoint, radius_miles: impl Into<String>) -> Self {
        Self {
            point,
            radius_miles: radius_miles.into(),
        }
    }

    /// Latitude, longitude and radius are all non-blank.
    pub fn is_complete(&self) -> bool {
        self.point.is_complete() && !self.radius_miles.trim().is_empty()
    }
}

/// Which place dataset the service searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Modern,
    Historical,
    #[default]
    Both,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [Self::Modern, Self::Historical, Self::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Historical => "historical",
            Self::Both => "both",
        }
    }

    /// Label shown next to the radio button on the search form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Modern => "Modern Locations",
            Self::Historical => "Historical Locations",
            Self::Both => "Both",
        }
    }

    /// Lenient parse used for form input: anything unrecognised searches both
    /// datasets, which is also what the service does with an unknown option.
    pub fn from_form_value(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "historical" => Ok(Self::Historical),
            "both" => Ok(Self::Both),
            _ => Err(format!("Unknown search mode: {}", s)),
        }
    }
}

/// One scored match from a place search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub place_name: String,
    pub location: GeoPoint,
    /// Score text exactly as the service printed it.
    pub score: Option<String>,
}

/// One match from a nearby lookup. The service scores these too, but the
/// nearby view never shows the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyResult {
    pub place_name: String,
    pub location: GeoPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_completeness_ignores_whitespace() {
        assert!(GeoPoint::new("40.1", "-75.2").is_complete());
        assert!(!GeoPoint::new("40.1", "").is_complete());
        assert!(!GeoPoint::new("  ", "-75.2").is_complete());
    }

    #[test]
    fn test_bound_needs_all_four_coordinates() {
        let full = BoundingBox::new(GeoPoint::new("1", "2"), GeoPoint::new("3", "4"));
        assert!(full.is_complete());

        let partial = BoundingBox::new(GeoPoint::new("1", "2"), GeoPoint::new("3", ""));
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_nearby_constraint_needs_radius() {
        let c = NearbyConstraint::new(GeoPoint::new("1", "2"), "");
        assert!(!c.is_complete());
        let c = NearbyConstraint::new(GeoPoint::new("1", "2"), "5");
        assert!(c.is_complete());
    }

    #[test]
    fn test_search_mode_parsing() {
        assert_eq!("modern".parse::<SearchMode>().unwrap(), SearchMode::Modern);
        assert_eq!("HISTORICAL".parse::<SearchMode>().unwrap(), SearchMode::Historical);
        assert_eq!("both".parse::<SearchMode>().unwrap(), SearchMode::Both);
        assert!("ancient".parse::<SearchMode>().is_err());
    }

    #[test]
    fn test_unknown_form_mode_searches_both() {
        assert_eq!(SearchMode::from_form_value(""), SearchMode::Both);
        assert_eq!(SearchMode::from_form_value("ancient"), SearchMode::Both);
        assert_eq!(SearchMode::from_form_value("modern"), SearchMode::Modern);
    }

    #[test]
    fn test_search_mode_serde_names() {
        let json = serde_json::to_string(&SearchMode::Historical).unwrap();
        assert_eq!(json, "\"historical\"");
    }

    #[test]
    fn test_point_display() {
        assert_eq!(GeoPoint::new("40.1", "-75.2").to_string(), "40.1, -75.2");
    }
}
