//! Reading the service's XML result document.
//!
//! The service answers with
//!
//! ```text
//! <places>
//!   <place>
//!     <place_name>Ithaca</place_name>
//!     <doc_id>1041</doc_id>
//!     <latitude>42.44063</latitude>
//!     <longitude>-76.49661</longitude>
//!     <score>3.21</score>
//!   </place>
//!   ...
//! </places>
//! ```
//!
//! Every child of the root is one result regardless of its tag name. Unknown
//! fields such as `doc_id` are skipped.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ParseError;
use crate::form::is_finite_number;
use crate::models::{GeoPoint, NearbyResult, SearchResult};

const PLACE_NAME: &str = "place_name";
const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";
const SCORE: &str = "score";

/// One result element with its numeric fields checked. Numbers keep the
/// text the service sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRecord {
    pub place_name: String,
    pub location: GeoPoint,
    pub score: Option<String>,
}

impl PlaceRecord {
    pub fn into_search_result(self) -> SearchResult {
        SearchResult {
            place_name: self.place_name,
            location: self.location,
            score: self.score,
        }
    }

    pub fn into_nearby_result(self) -> NearbyResult {
        NearbyResult {
            place_name: self.place_name,
            location: self.location,
        }
    }
}

#[derive(Debug, Default)]
struct RawRecord {
    place_name: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    score: Option<String>,
}

impl RawRecord {
    fn set(&mut self, field: &str, value: String) {
        let slot = match field {
            PLACE_NAME => &mut self.place_name,
            LATITUDE => &mut self.latitude,
            LONGITUDE => &mut self.longitude,
            SCORE => &mut self.score,
            _ => return,
        };
        *slot = Some(value);
    }

    fn finish(self, index: usize) -> Result<PlaceRecord, ParseError> {
        let place_name = self.place_name.ok_or(ParseError::MissingField {
            index,
            field: PLACE_NAME,
        })?;
        let latitude = require_number(self.latitude, index, LATITUDE)?;
        let longitude = require_number(self.longitude, index, LONGITUDE)?;

        let score = match self.score.filter(|s| !s.is_empty()) {
            Some(text) => Some(check_number(text, index, SCORE)?),
            None => None,
        };

        Ok(PlaceRecord {
            place_name,
            location: GeoPoint::new(latitude, longitude),
            score,
        })
    }
}

fn require_number(
    value: Option<String>,
    index: usize,
    field: &'static str,
) -> Result<String, ParseError> {
    let value = value.ok_or(ParseError::MissingField { index, field })?;
    check_number(value, index, field)
}

fn check_number(value: String, index: usize, field: &'static str) -> Result<String, ParseError> {
    if !is_finite_number(&value) {
        return Err(ParseError::InvalidNumber { index, field, value });
    }
    Ok(value)
}

/// Parse a result document into records, in document order.
pub fn parse_places(body: &str) -> Result<Vec<PlaceRecord>, ParseError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut saw_root = false;
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;
    let mut field: Option<String> = None;
    let mut text = String::new();

    loop {
        let event = reader.read_event().map_err(|e| ParseError::Malformed {
            position: reader.error_position(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                depth += 1;
                match depth {
                    1 => saw_root = true,
                    2 => current = Some(RawRecord::default()),
                    3 => {
                        field = Some(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
                        text.clear();
                    }
                    _ => {}
                }
            }
            Event::Empty(empty) => match depth {
                0 => saw_root = true,
                1 => records.push(RawRecord::default().finish(records.len())?),
                2 => {
                    if let Some(record) = current.as_mut() {
                        let name = String::from_utf8_lossy(empty.local_name().as_ref()).into_owned();
                        record.set(&name, String::new());
                    }
                }
                _ => {}
            },
            Event::Text(t) if depth == 3 => {
                let unescaped = t.unescape().map_err(|e| ParseError::Malformed {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                })?;
                text.push_str(&unescaped);
            }
            Event::CData(c) if depth == 3 => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Event::End(_) => {
                match depth {
                    3 => {
                        if let (Some(record), Some(name)) = (current.as_mut(), field.take()) {
                            record.set(&name, text.trim().to_string());
                        }
                    }
                    2 => {
                        if let Some(record) = current.take() {
                            records.push(record.finish(records.len())?);
                        }
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::Malformed {
            position: reader.buffer_position(),
            message: "document ended inside an element".to_string(),
        });
    }
    if !saw_root {
        return Err(ParseError::Empty);
    }

    Ok(records)
}
