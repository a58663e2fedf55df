//! Matching an organization to a single place record.

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::name::normalize_org_name;
use crate::types::PlaceCandidate;

/// Outcome of one resolution attempt.
#[derive(Debug)]
pub enum Resolution {
    /// The first search result, possibly merged with its details record.
    Matched(PlaceCandidate),
    /// The search succeeded but returned nothing.
    NoResults,
    /// The search request itself failed. The row gets no match.
    Failed(PlacesError),
}

impl Resolution {
    #[must_use]
    pub fn into_candidate(self) -> Option<PlaceCandidate> {
        match self {
            Resolution::Matched(candidate) => Some(candidate),
            Resolution::NoResults | Resolution::Failed(_) => None,
        }
    }
}

/// Builds the free-text query sent to the search endpoint.
#[must_use]
pub fn build_query(normalized_name: &str, location: &str) -> String {
    format!("{normalized_name} {location} USA").trim().to_owned()
}

/// Resolves organizations to places: one search, first result wins, then
/// an optional details lookup.
pub struct PlaceResolver {
    client: PlacesClient,
    fetch_details: bool,
}

impl PlaceResolver {
    #[must_use]
    pub fn new(client: PlacesClient, fetch_details: bool) -> Self {
        Self {
            client,
            fetch_details,
        }
    }

    /// Searches for `org_name` near `location` and returns the match, if any.
    ///
    /// Failures are logged and reported as `None`; see [`Self::resolve`] for
    /// the variant that tells them apart.
    pub async fn search(
        &self,
        org_name: &str,
        location: &str,
        reference_website: Option<&str>,
    ) -> Option<PlaceCandidate> {
        self.resolve(org_name, location, reference_website)
            .await
            .into_candidate()
    }

    /// Searches for `org_name` near `location`.
    ///
    /// The upstream ranking is trusted: the first result is accepted as the
    /// match without scoring it against `reference_website`, which is only
    /// logged. When details are enabled a failed details lookup keeps the
    /// search result as is.
    pub async fn resolve(
        &self,
        org_name: &str,
        location: &str,
        reference_website: Option<&str>,
    ) -> Resolution {
        let normalized = normalize_org_name(org_name);
        let query = build_query(&normalized, location);
        tracing::debug!(org_name, query = %query, reference_website, "searching places");

        let candidates = match self.client.text_search(&query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!(org_name, query = %query, error = %e, "place search failed");
                return Resolution::Failed(e);
            }
        };

        let Some(mut candidate) = candidates.into_iter().next() else {
            tracing::warn!(query = %query, "no places found for query");
            return Resolution::NoResults;
        };

        tracing::info!(
            place_id = %candidate.id,
            name = candidate.display_name.as_deref().unwrap_or_default(),
            "found place"
        );

        if self.fetch_details {
            match self.client.place_details(&candidate.id).await {
                Ok(details) => candidate.merge_details(details),
                Err(e) => {
                    tracing::warn!(
                        place_id = %candidate.id,
                        error = %e,
                        "place details lookup failed; keeping search result"
                    );
                }
            }
        }

        Resolution::Matched(candidate)
    }
}
