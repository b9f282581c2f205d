//! Data fetch orchestrator: runs one full refetch-and-rederive cycle
//! against the quiz API. All network and parse failures are caught here or
//! surfaced as a typed error; nothing escapes to crash the view.

use crate::api::LeaderboardApi;
use crate::constants::DEFAULT_PHOTO;
use crate::error::ApiError;
use crate::models::{FilterState, HistoryRecord, LeaderboardEntry};
use crate::rank;
use crate::session::SessionContext;
use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Result of one fetch cycle. Entries are a fresh derivation; nothing from
/// a previous cycle survives into this one.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    /// Monotonic cycle number, used by the UI's supersede policy. A cycle
    /// that resolves after a newer one was issued can be detected (and
    /// optionally discarded) by comparing generations.
    pub generation: u64,
    pub entries: Vec<LeaderboardEntry>,
    /// Domains observed in the unfiltered fetch, for the domain selector.
    pub unique_domains: Vec<String>,
    pub self_user_id: Option<String>,
    /// Resolved photo URL for the session user, or the sentinel.
    pub self_photo: String,
}

/// A cycle that failed after its generation was issued. The generation is
/// carried alongside the cause so the UI can apply the same supersede
/// policy to failures as to successful cycles.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct CycleError {
    pub generation: u64,
    #[source]
    pub source: ApiError,
}

pub struct Orchestrator<A: LeaderboardApi> {
    api: A,
    session: Box<dyn SessionContext>,
    generation: AtomicU64,
}

impl<A: LeaderboardApi> Orchestrator<A> {
    pub fn new(api: A, session: Box<dyn SessionContext>) -> Self {
        Self {
            api,
            session,
            generation: AtomicU64::new(0),
        }
    }

    /// Generation of the most recently issued cycle.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Run one cycle: session lookup, self-profile fetch, history fetch,
    /// normalization, derivation, and (for the profiles variant) the
    /// username fan-out.
    ///
    /// A history fetch or score parse failure aborts the whole cycle. A
    /// self-profile or per-user profile failure is isolated: it degrades to
    /// the sentinel photo or an empty username.
    pub async fn run_cycle(
        &self,
        filters: &FilterState,
        resolve_usernames: bool,
    ) -> Result<CycleOutcome, CycleError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, ?filters, "starting fetch cycle");

        self.cycle(generation, filters, resolve_usernames)
            .await
            .map_err(|source| CycleError { generation, source })
    }

    async fn cycle(
        &self,
        generation: u64,
        filters: &FilterState,
        resolve_usernames: bool,
    ) -> Result<CycleOutcome, ApiError> {
        let self_user_id = self.session.current_user_id();
        let self_photo = match &self_user_id {
            Some(user_id) => self.fetch_self_photo(user_id).await,
            None => DEFAULT_PHOTO.to_string(),
        };

        let raw = self.api.question_history(filters).await?;
        let records = raw
            .iter()
            .map(HistoryRecord::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        let unique_domains = rank::unique_domains(&records);
        let mut entries = rank::derive(&records, filters);

        if resolve_usernames && !entries.is_empty() {
            self.resolve_usernames(&mut entries).await;
        }

        debug!(generation, entries = entries.len(), "fetch cycle complete");
        Ok(CycleOutcome {
            generation,
            entries,
            unique_domains,
            self_user_id,
            self_photo,
        })
    }

    async fn fetch_self_photo(&self, user_id: &str) -> String {
        match self.api.user_profile(user_id).await {
            Ok(profile) => match profile.photo {
                Some(path) => self.api.photo_url(&path),
                None => DEFAULT_PHOTO.to_string(),
            },
            Err(e) => {
                warn!(user_id, error = %e, "self profile fetch failed");
                DEFAULT_PHOTO.to_string()
            }
        }
    }

    /// Fan-out/fan-in: one concurrent profile lookup per distinct user id.
    /// Every task settles before the entry set is considered enriched; a
    /// failed lookup leaves that user's username empty.
    async fn resolve_usernames(&self, entries: &mut [LeaderboardEntry]) {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = entries
            .iter()
            .filter(|e| seen.insert(e.user_id.clone()))
            .map(|e| e.user_id.clone())
            .collect();

        let lookups = distinct.into_iter().map(|user_id| {
            let api = &self.api;
            async move {
                let result = api.user_profile(&user_id).await;
                (user_id, result)
            }
        });

        let mut usernames: HashMap<String, String> = HashMap::new();
        for (user_id, result) in join_all(lookups).await {
            match result {
                Ok(profile) => {
                    usernames.insert(user_id, profile.username);
                }
                Err(e) => warn!(%user_id, error = %e, "username lookup failed; leaving blank"),
            }
        }

        for entry in entries {
            if let Some(name) = usernames.get(&entry.user_id) {
                entry.username = name.clone();
            }
        }
    }
}
