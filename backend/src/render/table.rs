//! Result table view model and its markup.

use maud::{html, Markup, Render};
use url::form_urlencoded;

use crate::models::{GeoPoint, NearbyResult, SearchResult};

/// Path of the nearby-lookup page, relative to the results page.
pub const NEARBY_PAGE: &str = "nearbyplaces";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Name, coordinate, score and a drill-down link.
    Search,
    /// Name and coordinate only.
    Nearby,
}

impl TableKind {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Search => &["Place Name", "Coordinate", "Score", "Nearby Places"],
            Self::Nearby => &["Place Name", "Coordinate"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub place_name: String,
    /// `"<lat>, <lng>"`
    pub coordinate: String,
    pub score: Option<String>,
    pub nearby_link: Option<String>,
}

/// Display-ready results. Rows keep the order the service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub kind: TableKind,
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Header row only.
    pub fn empty(kind: TableKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn for_search(results: &[SearchResult]) -> Self {
        let rows = results
            .iter()
            .map(|r| ResultRow {
                place_name: r.place_name.clone(),
                coordinate: r.location.to_string(),
                score: r.score.clone(),
                nearby_link: Some(nearby_link(&r.place_name, &r.location)),
            })
            .collect();

        Self {
            kind: TableKind::Search,
            rows,
        }
    }

    pub fn for_nearby(results: &[NearbyResult]) -> Self {
        let rows = results
            .iter()
            .map(|r| ResultRow {
                place_name: r.place_name.clone(),
                coordinate: r.location.to_string(),
                score: None,
                nearby_link: None,
            })
            .collect();

        Self {
            kind: TableKind::Nearby,
            rows,
        }
    }
}

/// Link to the nearby-lookup page for one result.
pub fn nearby_link(place_name: &str, location: &GeoPoint) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("placeName", place_name)
        .append_pair("latitude", &location.latitude)
        .append_pair("longitude", &location.longitude)
        .finish();
    format!("{}?{}", NEARBY_PAGE, query)
}

impl Render for ResultTable {
    fn render(&self) -> Markup {
        html! {
            table #resultTable {
                tr {
                    @for header in self.kind.headers() {
                        th scope="col" { (header) }
                    }
                }
                @for row in &self.rows {
                    tr {
                        td { (row.place_name) }
                        td { (row.coordinate) }
                        @if self.kind == TableKind::Search {
                            td { (row.score.as_deref().unwrap_or("")) }
                            td {
                                @if let Some(link) = &row.nearby_link {
                                    a.nearbyLink href=(link) { "nearby places" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
