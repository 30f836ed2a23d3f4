//! The delimiter contract shared with the geocoding service.
//!
//! Two legacy pages disagreed on the point separator (`;` vs `/`). Only the
//! semicolon form is produced here; it is what the service splits on unless
//! reconfigured.

use crate::models::{BoundingBox, GeoPoint, NearbyConstraint};

/// Versioned wire format for spatial query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFormat {
    pub version: u32,
    /// Joins the fields of one point (`lat,lng` or `lat,lng,radius`).
    pub field_separator: char,
    /// Joins points (the two bound corners, or nearby entries).
    pub point_separator: char,
}

impl WireFormat {
    pub const V1: WireFormat = WireFormat {
        version: 1,
        field_separator: ',',
        point_separator: ';',
    };

    pub const CURRENT: WireFormat = Self::V1;

    pub fn join_fields<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> String {
        join(fields, self.field_separator)
    }

    pub fn join_points<S: AsRef<str>>(&self, points: impl IntoIterator<Item = S>) -> String {
        join(points, self.point_separator)
    }
}

fn join<S: AsRef<str>>(parts: impl IntoIterator<Item = S>, separator: char) -> String {
    let parts: Vec<S> = parts.into_iter().collect();
    let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
    parts.join(separator.to_string().as_str())
}

/// Parse a serialized `bound` value back into its corners.
///
/// Returns `None` for the empty string and for anything that is not exactly
/// two `lat,lng` pairs.
pub fn parse_bound(value: &str) -> Option<BoundingBox> {
    let format = WireFormat::CURRENT;
    if value.is_empty() {
        return None;
    }

    let corners: Vec<&str> = value.split(format.point_separator).collect();
    let [first, second] = corners.as_slice() else {
        return None;
    };

    let corner1 = parse_pair(first, format)?;
    let corner2 = parse_pair(second, format)?;
    Some(BoundingBox::new(corner1, corner2))
}

/// Parse a serialized `nearbyPlaces` value.
///
/// An entry with only `lat,lng`, or with a blank radius, gets
/// `default_radius`, matching how the service reads the parameter. Any entry
/// with another field count makes the whole value invalid.
pub fn parse_nearby(value: &str, default_radius: &str) -> Option<Vec<NearbyConstraint>> {
    if value.is_empty() {
        return Some(Vec::new());
    }

    value
        .split(WireFormat::CURRENT.point_separator)
        .map(|entry| parse_point(entry, default_radius))
        .collect()
}

/// Parse one `lat,lng[,radius]` triple (the `point` parameter).
pub fn parse_point(value: &str, default_radius: &str) -> Option<NearbyConstraint> {
    let fields: Vec<&str> = value.split(WireFormat::CURRENT.field_separator).collect();
    match fields.as_slice() {
        [lat, lng] => Some(NearbyConstraint::new(
            GeoPoint::new(*lat, *lng),
            default_radius,
        )),
        [lat, lng, radius] => {
            let radius = if radius.is_empty() { default_radius } else { *radius };
            Some(NearbyConstraint::new(GeoPoint::new(*lat, *lng), radius))
        }
        _ => None,
    }
}

fn parse_pair(value: &str, format: WireFormat) -> Option<GeoPoint> {
    let fields: Vec<&str> = value.split(format.field_separator).collect();
    match fields.as_slice() {
        [lat, lng] => Some(GeoPoint::new(*lat, *lng)),
        _ => None,
    }
}
