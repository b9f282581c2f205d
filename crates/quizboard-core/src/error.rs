/// Score payloads arrive JSON-encoded inside a string; a value that does not
/// decode to a number fails the whole fetch cycle, not just the record.
#[derive(Debug, Clone, thiserror::Error)]
#[error("score {value:?} for user {user} is not a number")]
pub struct ParseError {
    pub user: String,
    pub value: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
