//! Page layout and the three page bodies.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::form::params::{bound_field, nearby_field, ADD_NEARBY_POINT, NEARBY_POINT_COUNT};
use crate::form::{SearchForm, ValidationError};
use crate::models::{GeoPoint, SearchMode};

use super::table::ResultTable;

const SITE_TITLE: &str = "Place Search";

const STYLESHEET: &str = r#"
body { font-family: Verdana, Arial, sans-serif; font-size: 14px; margin: 0; }
#container { margin: 0 auto; width: 900px; }
#header h1 { border-bottom: 1px solid #999; padding: 12px 0; }
.formBigLabel { font-size: 18px; font-weight: bold; margin: 8px 0; }
.pointField { width: 80px; }
.errorBanner { background: #fde; border: 1px solid #c66; padding: 8px; margin: 12px 0; }
#resultTable { border-collapse: collapse; margin-top: 12px; }
#resultTable th, #resultTable td { border: 1px solid #ccc; padding: 4px 10px; text-align: left; }
.groovybutton { font-size: 14px; padding: 2px 10px; }
"#;

/// Shared chrome around every page.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " | " (SITE_TITLE) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div #container {
                    div #header { h1 { (SITE_TITLE) } }
                    (content)
                }
            }
        }
    }
}

fn control_buttons() -> Markup {
    html! {
        p #controlButtons {
            a.groovybutton href="./" { "New search" }
        }
    }
}

fn error_banner(message: &str) -> Markup {
    html! {
        div.errorBanner role="alert" { (message) }
    }
}

fn point_inputs(lat_name: &str, lng_name: &str, point: &GeoPoint) -> Markup {
    html! {
        td {
            "Latitude: "
            input.pointField type="text" name=(lat_name) id=(lat_name) value=(point.latitude);
        }
        td {
            "Longitude: "
            input.pointField type="text" name=(lng_name) id=(lng_name) value=(point.longitude);
        }
    }
}

/// The search form, prefilled with `form` and showing `error` if set.
pub fn search_form_page(form: &SearchForm, error: Option<&ValidationError>) -> Markup {
    let content = html! {
        @if let Some(error) = error {
            (error_banner(&error.to_string()))
        }
        form #geoSearchForm name="geoSearchForm" method="get" action="geosearch" {
            div.formBigLabel { "Place Name" }
            input #placeName name="placeName" type="text" size="45" value=(form.place_name);

            div.formBigLabel { "Bound" }
            table style="margin-left:10px;" {
                @for (i, corner) in form.bound.iter().enumerate() {
                    tr {
                        td { "Point " (i + 1) }
                        (point_inputs(&bound_field(i + 1, "Lat"), &bound_field(i + 1, "Lng"), corner))
                    }
                }
            }

            div.formBigLabel { "Nearby Places" }
            input type="hidden" name=(NEARBY_POINT_COUNT) id=(NEARBY_POINT_COUNT) value=(form.nearby.len());
            table #nearbyPoints style="margin-left:10px;" {
                @for (i, row) in form.nearby.iter().enumerate() {
                    @let n = i + 1;
                    tr {
                        td { "Point " (n) }
                        (point_inputs(&nearby_field(n, "Lat"), &nearby_field(n, "Lng"), &row.point))
                        td {
                            "Range (mile): "
                            input.pointField type="text" name=(nearby_field(n, "Rng")) id=(nearby_field(n, "Rng")) value=(row.radius_miles);
                        }
                    }
                }
            }
            button.groovybutton type="submit" formaction="./" name=(ADD_NEARBY_POINT) value="1" { "Add Point" }

            div.formBigLabel { "Search Through" }
            @for mode in SearchMode::ALL {
                label {
                    input type="radio" name="searchOption" value=(mode.as_str()) checked[mode == form.mode];
                    (mode.label())
                }
                br;
            }
            br;
            button #searchButton.groovybutton type="submit" { "Search" }
        }
    };
    layout("Search", content)
}

/// Result page: heading, optional error banner, then the table.
pub fn results_page(heading: &str, table: &ResultTable, error: Option<&str>) -> Markup {
    let content = html! {
        p { label #resultListLabel { (heading) } }
        @if let Some(message) = error {
            (error_banner(message))
        }
        (table)
        (control_buttons())
    };
    layout("Results", content)
}

/// Page shown for requests that cannot produce any result view.
pub fn error_page(title: &str, message: &str) -> Markup {
    let content = html! {
        h2 { (title) }
        (error_banner(message))
        (control_buttons())
    };
    layout(title, content)
}

/// `Search results for "<name>":`
pub fn search_heading(place_name: &str) -> String {
    format!("Search results for \"{}\":", place_name)
}

/// `Nearby places for "<name> (<lat>,<lng>)":`
pub fn nearby_heading(place_name: &str, point: &GeoPoint) -> String {
    format!(
        "Nearby places for \"{} ({},{})\":",
        place_name, point.latitude, point.longitude
    )
}
