//! Places API (`places.googleapis.com/v1`).
//!
//! Requests carry the key in `X-Goog-Api-Key` and select fields with
//! `X-Goog-FieldMask`. Field names are camelCase and opening times are
//! `{ "day", "hour", "minute" }` objects.

use serde::{Deserialize, Serialize};

use crate::error::PlacesError;
use crate::types::{ClockTime, OpeningPeriod, PeriodPoint, PlaceCandidate, WeeklyHours};

const PLACE_FIELDS: [&str; 11] = [
    "id",
    "displayName",
    "formattedAddress",
    "nationalPhoneNumber",
    "websiteUri",
    "rating",
    "userRatingCount",
    "businessStatus",
    "primaryType",
    "googleMapsUri",
    "regularOpeningHours",
];

/// Field mask for `places:searchText`, where every field sits under `places.`.
pub(crate) fn search_field_mask() -> String {
    PLACE_FIELDS
        .iter()
        .map(|field| format!("places.{field}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Field mask for a single-place details request.
pub(crate) fn details_field_mask() -> String {
    PLACE_FIELDS.join(",")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchTextRequest<'a> {
    pub text_query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchTextResponse {
    /// Omitted entirely when nothing matched.
    #[serde(default)]
    pub places: Vec<CurrentPlace>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalizedText {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CurrentPlace {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub national_phone_number: Option<String>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub primary_type: Option<String>,
    #[serde(default)]
    pub google_maps_uri: Option<String>,
    #[serde(default)]
    pub regular_opening_hours: Option<CurrentOpeningHours>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentOpeningHours {
    #[serde(default)]
    pub periods: Vec<CurrentPeriod>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentPeriod {
    #[serde(default)]
    pub open: Option<CurrentPoint>,
    #[serde(default)]
    pub close: Option<CurrentPoint>,
}

/// Proto3 JSON drops zero-valued fields, so `hour`/`minute` may be missing.
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentPoint {
    #[serde(default)]
    pub day: u8,
    #[serde(default)]
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

impl CurrentPlace {
    pub(crate) fn into_candidate(
        self,
        fallback_id: Option<&str>,
        context: &str,
    ) -> Result<PlaceCandidate, PlacesError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .or_else(|| fallback_id.map(str::to_owned))
            .ok_or_else(|| PlacesError::MissingField {
                context: context.to_owned(),
                field: "id",
            })?;

        Ok(PlaceCandidate {
            id,
            display_name: self.display_name.map(|name| name.text),
            formatted_address: self.formatted_address,
            phone: self.national_phone_number,
            website: self.website_uri,
            rating: self.rating,
            rating_count: self.user_rating_count,
            business_status: self.business_status,
            primary_type: self.primary_type,
            google_maps_uri: self.google_maps_uri,
            opening_hours: self.regular_opening_hours.map(convert_hours),
        })
    }
}

fn convert_hours(hours: CurrentOpeningHours) -> WeeklyHours {
    let periods = hours
        .periods
        .into_iter()
        .filter_map(|period| {
            let open = convert_point(period.open?);
            let close = period.close.map(convert_point);
            Some(OpeningPeriod { open, close })
        })
        .collect();
    WeeklyHours { periods }
}

fn convert_point(point: CurrentPoint) -> PeriodPoint {
    PeriodPoint {
        day: point.day,
        time: Some(ClockTime {
            hour: point.hour,
            minute: point.minute,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_place(value: serde_json::Value) -> CurrentPlace {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn search_field_mask_prefixes_every_field() {
        let mask = search_field_mask();
        assert!(mask.starts_with("places.id,places.displayName"));
        assert!(mask.ends_with("places.regularOpeningHours"));
        assert_eq!(mask.matches("places.").count(), PLACE_FIELDS.len());
    }

    #[test]
    fn details_field_mask_has_no_prefix() {
        assert!(!details_field_mask().contains("places."));
    }

    #[test]
    fn search_request_serializes_camel_case() {
        let body = serde_json::to_value(SearchTextRequest {
            text_query: "Acme Austin USA",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "textQuery": "Acme Austin USA" }));
    }

    #[test]
    fn into_candidate_maps_nested_fields() {
        let place = parse_place(serde_json::json!({
            "id": "ChIJabc",
            "displayName": { "text": "Acme Plumbing", "languageCode": "en" },
            "formattedAddress": "1 Main St, Austin, TX 78701, USA",
            "nationalPhoneNumber": "(512) 555-0100",
            "websiteUri": "https://acmeplumbing.com/",
            "rating": 4.5,
            "userRatingCount": 88,
            "businessStatus": "OPERATIONAL",
            "primaryType": "plumber",
            "googleMapsUri": "https://maps.google.com/?cid=42",
            "regularOpeningHours": {
                "periods": [
                    {
                        "open": { "day": 1, "hour": 8 },
                        "close": { "day": 1, "hour": 17, "minute": 30 }
                    }
                ]
            }
        }));

        let candidate = place.into_candidate(None, "test").unwrap();
        assert_eq!(candidate.id, "ChIJabc");
        assert_eq!(candidate.display_name.as_deref(), Some("Acme Plumbing"));
        assert_eq!(candidate.phone.as_deref(), Some("(512) 555-0100"));
        assert_eq!(candidate.rating_count, Some(88));
        assert_eq!(candidate.primary_type.as_deref(), Some("plumber"));
        assert_eq!(candidate.maps_link(), "https://maps.google.com/?cid=42");

        let hours = candidate.opening_hours.unwrap();
        assert_eq!(
            hours.periods[0].open.time,
            Some(ClockTime { hour: 8, minute: 0 })
        );
        assert_eq!(
            hours.periods[0].close.and_then(|c| c.time).map(|t| t.to_string()).as_deref(),
            Some("17:30")
        );
    }

    #[test]
    fn always_open_place_has_single_period_without_close() {
        let place = parse_place(serde_json::json!({
            "id": "ChIJ24",
            "regularOpeningHours": { "periods": [ { "open": { "day": 0 } } ] }
        }));
        let hours = place.into_candidate(None, "test").unwrap().opening_hours.unwrap();
        assert_eq!(hours.periods.len(), 1);
        assert_eq!(hours.periods[0].open.day, 0);
        assert!(hours.periods[0].close.is_none());
    }

    #[test]
    fn into_candidate_without_id_is_an_error() {
        let place = parse_place(serde_json::json!({ "displayName": { "text": "Acme" } }));
        let err = place.into_candidate(None, "searchText").unwrap_err();
        assert!(matches!(err, PlacesError::MissingField { field: "id", .. }));
    }
}
