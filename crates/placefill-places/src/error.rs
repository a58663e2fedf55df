use thiserror::Error;

/// Errors returned by the places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx HTTP status.
    #[error("unexpected HTTP status {status} from {endpoint}: {body}")]
    UnexpectedStatus {
        status: u16,
        endpoint: String,
        body: String,
    },

    /// The legacy API returned a non-`OK` envelope status such as
    /// `REQUEST_DENIED` or `OVER_QUERY_LIMIT`.
    #[error("places API status {status}: {}", message.as_deref().unwrap_or("no error message"))]
    ApiStatus {
        status: String,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A place record came back without a field the pipeline cannot do without.
    #[error("place record from {context} is missing `{field}`")]
    MissingField {
        context: String,
        field: &'static str,
    },

    #[error("invalid places base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
