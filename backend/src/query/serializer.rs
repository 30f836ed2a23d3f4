//! Typed requests to service URLs.
//!
//! Serialization never fails: missing or partial spatial filters become empty
//! parameter values, and the place name is passed through unvalidated.
//! Validation is the form layer's job.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

use super::wire::WireFormat;
use crate::models::{BoundingBox, NearbyConstraint, NearbyRequest, SearchRequest};

/// RFC 3986 unreserved characters stay literal, everything else is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// How parameter values are escaped in outbound URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceNameEncoding {
    /// Percent-encode every reserved or non-ASCII character.
    #[default]
    Full,
    /// Only spaces become `%20`; `&`, `#`, `+` and the rest go out literally.
    /// Matches the old PHP pages and breaks on names containing those
    /// characters.
    SpacesOnly,
}

/// Escape one query parameter value.
pub fn encode_value(value: &str, encoding: PlaceNameEncoding) -> Cow<'_, str> {
    match encoding {
        PlaceNameEncoding::Full => utf8_percent_encode(value, QUERY_VALUE).into(),
        PlaceNameEncoding::SpacesOnly if value.contains(' ') => {
            Cow::Owned(value.replace(' ', "%20"))
        }
        PlaceNameEncoding::SpacesOnly => Cow::Borrowed(value),
    }
}

/// Serialize a bounding box as `lat1,lng1;lat2,lng2`.
///
/// Empty when the bound is absent or any of its four coordinates is blank.
pub fn serialize_bound(bound: Option<&BoundingBox>) -> String {
    let format = WireFormat::CURRENT;
    match bound {
        Some(b) if b.is_complete() => format.join_points([
            format.join_fields([b.corner1.latitude.as_str(), b.corner1.longitude.as_str()]),
            format.join_fields([b.corner2.latitude.as_str(), b.corner2.longitude.as_str()]),
        ]),
        _ => String::new(),
    }
}

/// Serialize nearby constraints as `lat,lng,radius;lat,lng,radius;...`.
///
/// Constraints with a blank field are skipped; the rest keep their order.
pub fn serialize_nearby(nearby: &[NearbyConstraint]) -> String {
    let format = WireFormat::CURRENT;
    format.join_points(
        nearby
            .iter()
            .filter(|c| c.is_complete())
            .map(|c| triple(c, format)),
    )
}

fn triple(constraint: &NearbyConstraint, format: WireFormat) -> String {
    format.join_fields([
        constraint.point.latitude.as_str(),
        constraint.point.longitude.as_str(),
        constraint.radius_miles.as_str(),
    ])
}

/// URL for a `type=match` place search.
pub fn build_search_url(
    request: &SearchRequest,
    base_url: &Url,
    encoding: PlaceNameEncoding,
) -> Url {
    let bound = serialize_bound(request.bound.as_ref());
    let nearby = serialize_nearby(&request.nearby);

    compose(
        base_url,
        &[
            ("type", "match"),
            ("searchOption", request.mode.as_str()),
            ("placeName", request.place_name.as_str()),
            ("bound", bound.as_str()),
            ("nearbyPlaces", nearby.as_str()),
        ],
        encoding,
    )
}

/// URL for a `type=nearby` single-point radius lookup.
pub fn build_nearby_url(
    request: &NearbyRequest,
    base_url: &Url,
    encoding: PlaceNameEncoding,
) -> Url {
    let point = WireFormat::CURRENT.join_fields([
        request.point.latitude.as_str(),
        request.point.longitude.as_str(),
        request.radius_miles.as_str(),
    ]);

    compose(
        base_url,
        &[
            ("type", "nearby"),
            ("placeName", request.place_name.as_str()),
            ("point", point.as_str()),
        ],
        encoding,
    )
}

/// Append `pairs` to whatever query the base URL already carries.
fn compose(base_url: &Url, pairs: &[(&str, &str)], encoding: PlaceNameEncoding) -> Url {
    let mut query = String::new();
    if let Some(existing) = base_url.query().filter(|q| !q.is_empty()) {
        query.push_str(existing);
        query.push('&');
    }
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(&encode_value(value, encoding));
    }

    let mut url = base_url.clone();
    url.set_query(Some(&query));
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPoint, SearchMode};
    use crate::query::wire::{parse_bound, parse_nearby};
    use proptest::prelude::*;

    fn base() -> Url {
        Url::parse("https://svc/geosearch").unwrap()
    }

    fn sample_bound() -> BoundingBox {
        BoundingBox::new(GeoPoint::new("40.1", "-75.2"), GeoPoint::new("40.5", "-75.9"))
    }

    #[test]
    fn test_search_url_without_filters() {
        let request = SearchRequest::new("Old Fort");
        let url = build_search_url(&request, &base(), PlaceNameEncoding::Full);
        assert_eq!(
            url.as_str(),
            "https://svc/geosearch?type=match&searchOption=both&placeName=Old%20Fort&bound=&nearbyPlaces="
        );
    }

    #[test]
    fn test_search_url_without_filters_legacy_escaping() {
        let request = SearchRequest::new("Old Fort");
        let url = build_search_url(&request, &base(), PlaceNameEncoding::SpacesOnly);
        assert_eq!(
            url.as_str(),
            "https://svc/geosearch?type=match&searchOption=both&placeName=Old%20Fort&bound=&nearbyPlaces="
        );
    }

    #[test]
    fn test_serialize_bound() {
        assert_eq!(
            serialize_bound(Some(&sample_bound())),
            "40.1,-75.2;40.5,-75.9"
        );
    }

    #[test]
    fn test_serialize_bound_absent_or_partial() {
        assert_eq!(serialize_bound(None), "");

        let mut partial = sample_bound();
        partial.corner2.longitude.clear();
        assert_eq!(serialize_bound(Some(&partial)), "");
    }

    #[test]
    fn test_serialize_nearby_skips_incomplete() {
        let nearby = vec![
            NearbyConstraint::new(GeoPoint::new("42.4", "-76.5"), "10"),
            NearbyConstraint::new(GeoPoint::new("43.0", "-77.1"), ""),
        ];
        assert_eq!(serialize_nearby(&nearby), "42.4,-76.5,10");
    }

    #[test]
    fn test_serialize_nearby_joins_in_order() {
        let nearby = vec![
            NearbyConstraint::new(GeoPoint::new("1", "2"), "3"),
            NearbyConstraint::new(GeoPoint::new("", "5"), "6"),
            NearbyConstraint::new(GeoPoint::new("7", "8"), "9"),
        ];
        assert_eq!(serialize_nearby(&nearby), "1,2,3;7,8,9");
        assert_eq!(serialize_nearby(&[]), "");
    }

    #[test]
    fn test_search_url_with_filters() {
        let request = SearchRequest::new("Ithaca")
            .with_bound(sample_bound())
            .with_nearby(NearbyConstraint::new(GeoPoint::new("42.4", "-76.5"), "10"))
            .with_mode(SearchMode::Historical);

        let legacy = build_search_url(&request, &base(), PlaceNameEncoding::SpacesOnly);
        assert_eq!(
            legacy.as_str(),
            "https://svc/geosearch?type=match&searchOption=historical&placeName=Ithaca\
             &bound=40.1,-75.2;40.5,-75.9&nearbyPlaces=42.4,-76.5,10"
        );

        let full = build_search_url(&request, &base(), PlaceNameEncoding::Full);
        assert_eq!(
            full.as_str(),
            "https://svc/geosearch?type=match&searchOption=historical&placeName=Ithaca\
             &bound=40.1%2C-75.2%3B40.5%2C-75.9&nearbyPlaces=42.4%2C-76.5%2C10"
        );
    }

    #[test]
    fn test_legacy_escaping_only_touches_spaces() {
        let request = SearchRequest::new("Fish & Chips");
        let url = build_search_url(&request, &base(), PlaceNameEncoding::SpacesOnly);
        assert!(url.as_str().contains("placeName=Fish%20&%20Chips&bound="));
    }

    #[test]
    fn test_full_escaping_encodes_reserved_and_non_ascii() {
        assert_eq!(encode_value("Fish & Chips", PlaceNameEncoding::Full), "Fish%20%26%20Chips");
        assert_eq!(encode_value("St. #1+2", PlaceNameEncoding::Full), "St.%20%231%2B2");
        assert_eq!(encode_value("Zürich", PlaceNameEncoding::Full), "Z%C3%BCrich");

        let request = SearchRequest::new("Fish & Chips");
        let url = build_search_url(&request, &base(), PlaceNameEncoding::Full);
        let name = url
            .query_pairs()
            .find(|(k, _)| k == "placeName")
            .map(|(_, v)| v.into_owned());
        assert_eq!(name.as_deref(), Some("Fish & Chips"));
    }

    #[test]
    fn test_empty_place_name_passes_through() {
        let url = build_search_url(&SearchRequest::new(""), &base(), PlaceNameEncoding::Full);
        assert!(url.as_str().contains("&placeName=&bound="));
    }

    #[test]
    fn test_nearby_url() {
        let request = NearbyRequest::from_lookup("Old Fort", GeoPoint::new("42.44", "-76.5"), None, "5");

        let legacy = build_nearby_url(&request, &base(), PlaceNameEncoding::SpacesOnly);
        assert_eq!(
            legacy.as_str(),
            "https://svc/geosearch?type=nearby&placeName=Old%20Fort&point=42.44,-76.5,5"
        );

        let full = build_nearby_url(&request, &base(), PlaceNameEncoding::Full);
        assert_eq!(
            full.as_str(),
            "https://svc/geosearch?type=nearby&placeName=Old%20Fort&point=42.44%2C-76.5%2C5"
        );
    }

    #[test]
    fn test_base_url_query_is_kept() {
        let base = Url::parse("https://svc/geosearch?key=abc").unwrap();
        let url = build_search_url(&SearchRequest::new("X"), &base, PlaceNameEncoding::Full);
        assert!(url.as_str().starts_with("https://svc/geosearch?key=abc&type=match&"));
    }

    #[test]
    fn test_legacy_escaping_loses_plus_signs() {
        let request = SearchRequest::new("X")
            .with_nearby(NearbyConstraint::new(GeoPoint::new("+42.4", "-76.5"), "10"));
        let url = build_search_url(&request, &base(), PlaceNameEncoding::SpacesOnly);
        let nearby = url
            .query_pairs()
            .find(|(k, _)| k == "nearbyPlaces")
            .map(|(_, v)| v.into_owned());
        // A literal `+` decodes as a space on the other side.
        assert_eq!(nearby.as_deref(), Some(" 42.4,-76.5,10"));
    }

    fn decimal() -> impl Strategy<Value = String> {
        "[-+]?[0-9]{1,3}(\\.[0-9]{1,4})?"
    }

    fn maybe_decimal() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), decimal()]
    }

    proptest! {
        #[test]
        fn prop_bound_empty_unless_complete(
            a in "\\PC*", b in "\\PC*", c in "\\PC*", d in "\\PC*"
        ) {
            let bound = BoundingBox::new(GeoPoint::new(a, b), GeoPoint::new(c, d));
            let serialized = serialize_bound(Some(&bound));
            prop_assert_eq!(serialized.is_empty(), !bound.is_complete());
        }

        #[test]
        fn prop_nearby_count_and_order(
            rows in prop::collection::vec((maybe_decimal(), maybe_decimal(), maybe_decimal()), 0..8)
        ) {
            let nearby: Vec<NearbyConstraint> = rows
                .into_iter()
                .map(|(lat, lng, r)| NearbyConstraint::new(GeoPoint::new(lat, lng), r))
                .collect();
            let expected: Vec<NearbyConstraint> =
                nearby.iter().filter(|c| c.is_complete()).cloned().collect();

            let serialized = serialize_nearby(&nearby);
            let parsed = parse_nearby(&serialized, "5").unwrap();
            prop_assert_eq!(parsed, expected);
        }

        #[test]
        fn prop_search_url_round_trip(
            corners in prop::option::of((decimal(), decimal(), decimal(), decimal())),
            rows in prop::collection::vec((decimal(), decimal(), decimal()), 0..5),
        ) {
            let mut request = SearchRequest::new("Old Fort");
            if let Some((a, b, c, d)) = corners {
                request = request.with_bound(BoundingBox::new(GeoPoint::new(a, b), GeoPoint::new(c, d)));
            }
            for (lat, lng, r) in rows {
                request = request.with_nearby(NearbyConstraint::new(GeoPoint::new(lat, lng), r));
            }

            let url = build_search_url(&request, &base(), PlaceNameEncoding::Full);
            let param = |name: &str| {
                url.query_pairs()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| v.into_owned())
                    .unwrap_or_default()
            };

            prop_assert_eq!(parse_bound(&param("bound")), request.bound.clone());
            prop_assert_eq!(parse_nearby(&param("nearbyPlaces"), "5"), Some(request.nearby.clone()));
            prop_assert_eq!(param("placeName"), "Old Fort");
        }
    }
}
