//! Legacy Places web service (`/maps/api/place/textsearch/json`,
//! `/maps/api/place/details/json`).
//!
//! Responses are wrapped in a `{"status": "OK", ...}` envelope; field names
//! are snake_case and opening times are `"HHMM"` strings.

use serde::Deserialize;

use crate::error::PlacesError;
use crate::types::{ClockTime, OpeningPeriod, PeriodPoint, PlaceCandidate, WeeklyHours};

/// Fields requested from the details endpoint.
pub(crate) const DETAILS_FIELDS: &str = "place_id,name,formatted_phone_number,formatted_address,\
website,rating,user_ratings_total,opening_hours,business_status,types,url";

#[derive(Debug, Deserialize)]
pub(crate) struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<LegacyPlace>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<LegacyPlace>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyPlace {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    /// Google Maps page for the place (details only).
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<LegacyOpeningHours>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyOpeningHours {
    #[serde(default)]
    pub periods: Vec<LegacyPeriod>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyPeriod {
    #[serde(default)]
    pub open: Option<LegacyPoint>,
    #[serde(default)]
    pub close: Option<LegacyPoint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyPoint {
    #[serde(default)]
    pub day: Option<u8>,
    /// `"HHMM"`, e.g. `"0900"`.
    #[serde(default)]
    pub time: Option<String>,
}

/// Envelope statuses that carry results.
pub(crate) fn check_status(status: &str, error_message: Option<String>) -> Result<(), PlacesError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(PlacesError::ApiStatus {
            status: other.to_owned(),
            message: error_message,
        }),
    }
}

impl LegacyPlace {
    /// Converts into the shared candidate type.
    ///
    /// `fallback_id` is used when the record omits `place_id`, which the
    /// details endpoint does unless asked for it.
    pub(crate) fn into_candidate(
        self,
        fallback_id: Option<&str>,
        context: &str,
    ) -> Result<PlaceCandidate, PlacesError> {
        let id = self
            .place_id
            .filter(|id| !id.is_empty())
            .or_else(|| fallback_id.map(str::to_owned))
            .ok_or_else(|| PlacesError::MissingField {
                context: context.to_owned(),
                field: "place_id",
            })?;

        let opening_hours = self
            .opening_hours
            .map(|hours| convert_hours(hours, &id));

        Ok(PlaceCandidate {
            display_name: self.name,
            formatted_address: self.formatted_address,
            phone: self.formatted_phone_number,
            website: self.website,
            rating: self.rating,
            rating_count: self.user_ratings_total,
            business_status: self.business_status,
            // The legacy API has no primary type; `types` is ordered most
            // specific first.
            primary_type: self.types.into_iter().next(),
            google_maps_uri: self.url,
            opening_hours,
            id,
        })
    }
}

fn convert_hours(hours: LegacyOpeningHours, place_id: &str) -> WeeklyHours {
    let periods = hours
        .periods
        .into_iter()
        .filter_map(|period| {
            let Some(open) = period.open.and_then(|p| convert_point(p, place_id)) else {
                tracing::warn!(place_id, "dropping opening period without an open day");
                return None;
            };
            let close = period.close.and_then(|p| convert_point(p, place_id));
            Some(OpeningPeriod { open, close })
        })
        .collect();
    WeeklyHours { periods }
}

/// A point without a day is unusable; a point with an unreadable time keeps
/// its day.
fn convert_point(point: LegacyPoint, place_id: &str) -> Option<PeriodPoint> {
    let day = point.day?;
    let raw = point.time.as_deref().unwrap_or_default();
    let time = ClockTime::parse_hhmm(raw);
    if time.is_none() {
        tracing::warn!(place_id, day, time = raw, "malformed opening-hours time");
    }
    Some(PeriodPoint { day, time })
}
