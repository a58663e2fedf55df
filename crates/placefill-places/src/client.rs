//! HTTP client for the Google Places API.
//!
//! Wraps `reqwest` with API key handling, typed errors, and one adapter per
//! upstream response shape (see [`crate::shapes`]). The client makes exactly
//! one request per call: no retries, no backoff.

use std::time::Duration;

use placefill_core::{ApiShape, AppConfig};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::shapes::{current, legacy};
use crate::types::PlaceCandidate;

const LEGACY_BASE_URL: &str = "https://maps.googleapis.com/";
const CURRENT_BASE_URL: &str = "https://places.googleapis.com/";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Error bodies are echoed into logs; keep them short.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for the Google Places text-search and details endpoints.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    shape: ApiShape,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production host for `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        shape: ApiShape,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PlacesError> {
        Self::with_base_url(
            api_key,
            shape,
            timeout_secs,
            user_agent,
            default_base_url(shape),
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        shape: ApiShape,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so relative joins append to the base
        // path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            shape,
            base_url,
        })
    }

    /// Builds a client from application configuration, honouring the
    /// optional base URL override.
    ///
    /// # Errors
    ///
    /// See [`PlacesClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let base_url = config
            .places_base_url
            .as_deref()
            .unwrap_or_else(|| default_base_url(config.places_api_shape));
        Self::with_base_url(
            &config.places_api_key,
            config.places_api_shape,
            config.request_timeout_secs,
            &config.user_agent,
            base_url,
        )
    }

    /// Runs a free-text place search and returns candidates in upstream
    /// ranking order.
    ///
    /// An empty vector means the API answered successfully with no matches.
    /// Results after the first that cannot be converted are logged and left
    /// out; an unusable first result is an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::UnexpectedStatus`] on a non-2xx response.
    /// - [`PlacesError::ApiStatus`] when the legacy envelope reports an error.
    /// - [`PlacesError::Deserialize`] / [`PlacesError::MissingField`] on a
    ///   malformed body.
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
        tracing::debug!(shape = %self.shape, query, "places text search request");
        match self.shape {
            ApiShape::Legacy => {
                let url = self.legacy_url(
                    "maps/api/place/textsearch/json",
                    &[("query", query)],
                )?;
                let body = self.send(self.client.get(url), "textsearch").await?;
                let parsed: legacy::TextSearchResponse = parse_body(&body, "textsearch")?;
                legacy::check_status(&parsed.status, parsed.error_message)?;
                keep_ranked(
                    parsed
                        .results
                        .into_iter()
                        .map(|place| place.into_candidate(None, "textsearch")),
                )
            }
            ApiShape::Current => {
                let url = self.join("v1/places:searchText")?;
                let request = self
                    .client
                    .post(url)
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(FIELD_MASK_HEADER, current::search_field_mask())
                    .json(&current::SearchTextRequest { text_query: query });
                let body = self.send(request, "places:searchText").await?;
                let parsed: current::SearchTextResponse =
                    parse_body(&body, "places:searchText")?;
                keep_ranked(
                    parsed
                        .places
                        .into_iter()
                        .map(|place| place.into_candidate(None, "places:searchText")),
                )
            }
        }
    }

    /// Fetches the extended record for one place.
    ///
    /// # Errors
    ///
    /// Same as [`PlacesClient::text_search`]; additionally the legacy shape
    /// treats any envelope status other than `OK` as
    /// [`PlacesError::ApiStatus`].
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceCandidate, PlacesError> {
        tracing::debug!(shape = %self.shape, place_id, "places details request");
        match self.shape {
            ApiShape::Legacy => {
                let url = self.legacy_url(
                    "maps/api/place/details/json",
                    &[("place_id", place_id), ("fields", legacy::DETAILS_FIELDS)],
                )?;
                let body = self.send(self.client.get(url), "details").await?;
                let parsed: legacy::DetailsResponse = parse_body(&body, "details")?;
                if parsed.status != "OK" {
                    return Err(PlacesError::ApiStatus {
                        status: parsed.status,
                        message: parsed.error_message,
                    });
                }
                parsed
                    .result
                    .ok_or_else(|| PlacesError::MissingField {
                        context: "details".to_owned(),
                        field: "result",
                    })?
                    .into_candidate(Some(place_id), "details")
            }
            ApiShape::Current => {
                let url = self.current_details_url(place_id)?;
                let request = self
                    .client
                    .get(url)
                    .header(API_KEY_HEADER, &self.api_key)
                    .header(FIELD_MASK_HEADER, current::details_field_mask());
                let body = self.send(request, "places/{id}").await?;
                let parsed: current::CurrentPlace = parse_body(&body, "places/{id}")?;
                parsed.into_candidate(Some(place_id), "places/{id}")
            }
        }
    }

    fn join(&self, path: &str) -> Result<Url, PlacesError> {
        self.base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Builds a legacy endpoint URL with percent-encoded query parameters;
    /// the API key is always appended last.
    fn legacy_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    fn current_details_url(&self, place_id: &str) -> Result<Url, PlacesError> {
        let mut url = self.join("v1/places/")?;
        url.path_segments_mut()
            .map_err(|()| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "base URL cannot have path segments".to_owned(),
            })?
            .pop_if_empty()
            .push(place_id);
        Ok(url)
    }

    /// Sends a request, asserts a 2xx status, and returns the body text.
    ///
    /// URLs are stripped from transport errors because legacy URLs carry
    /// the API key.
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<String, PlacesError> {
        let response = request.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "places API response");

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        tracing::trace!(endpoint, body = %body, "places API response body");
        Ok(body)
    }
}

/// Keeps upstream order. Only the top-ranked result is allowed to fail the
/// search.
fn keep_ranked(
    results: impl Iterator<Item = Result<PlaceCandidate, PlacesError>>,
) -> Result<Vec<PlaceCandidate>, PlacesError> {
    let mut candidates = Vec::new();
    for (rank, result) in results.enumerate() {
        match result {
            Ok(candidate) => candidates.push(candidate),
            Err(e) if rank == 0 => return Err(e),
            Err(e) => tracing::warn!(rank, error = %e, "skipping unusable search result"),
        }
    }
    Ok(candidates)
}

fn default_base_url(shape: ApiShape) -> &'static str {
    match shape {
        ApiShape::Legacy => LEGACY_BASE_URL,
        ApiShape::Current => CURRENT_BASE_URL,
    }
}

fn parse_body<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, PlacesError> {
    serde_json::from_str(body).map_err(|e| PlacesError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
