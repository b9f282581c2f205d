use crate::config::CoreConfig;
use crate::error::ApiError;
use crate::models::{FilterState, RawHistoryRecord, UserProfile};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::debug;

/// Seam over the quiz backend so the fetch orchestrator can be exercised
/// against an in-memory implementation in tests.
pub trait LeaderboardApi: Send + Sync {
    /// `GET /api/userprofile/{userId}`.
    fn user_profile(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// `GET /api/questionhistoryget/` with advisory difficulty/domain query
    /// parameters. The server may or may not honor them; callers must
    /// re-filter client-side regardless.
    fn question_history(
        &self,
        filters: &FilterState,
    ) -> impl Future<Output = Result<Vec<RawHistoryRecord>, ApiError>> + Send;

    /// Resolve a profile photo path against the API origin.
    fn photo_url(&self, path: &str) -> String;
}

/// HTTP client for the quiz backend.
pub struct QuizApiClient {
    base: String,
    client: reqwest::Client,
}

impl QuizApiClient {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            base: config.api_base.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        debug!(%url, "api request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

impl LeaderboardApi for QuizApiClient {
    async fn user_profile(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let url = format!("{}/api/userprofile/{}", self.base, user_id);
        self.get_json(url, &[]).await
    }

    async fn question_history(
        &self,
        filters: &FilterState,
    ) -> Result<Vec<RawHistoryRecord>, ApiError> {
        let url = format!("{}/api/questionhistoryget/", self.base);

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(difficulty) = filters.difficulty.query_value() {
            query.push(("difficulty_level", difficulty));
        }
        if let Some(domain) = filters.domain.query_value() {
            query.push(("domain", domain));
        }

        self.get_json(url, &query).await
    }

    fn photo_url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DifficultyFilter;

    #[test]
    fn photo_url_joins_origin_and_path() {
        let client = QuizApiClient::new(&CoreConfig::new("http://127.0.0.1:8000"));
        assert_eq!(
            client.photo_url("/media/photos/alice.jpg"),
            "http://127.0.0.1:8000/media/photos/alice.jpg"
        );
    }

    #[tokio::test]
    #[ignore] // Requires a running quiz backend
    async fn fetches_history_from_live_backend() {
        let client = QuizApiClient::new(&CoreConfig::default());
        let filters = FilterState {
            difficulty: DifficultyFilter::Easy,
            ..FilterState::default()
        };
        let records = client.question_history(&filters).await.unwrap();
        assert!(records.iter().all(|r| !r.user.is_empty()));
    }
}
