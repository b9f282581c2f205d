//! Rank derivation: the one piece of real logic in the system.
//!
//! Collapses raw history records into at most one leaderboard entry per
//! (user, difficulty, domain) key, keeping the best score, then sorts and
//! assigns dense 1-based ranks. Pure and deterministic; both view variants
//! call the same function, the board simply passes no score bucket.

use crate::models::{FilterState, HistoryRecord, LeaderboardEntry};
use std::collections::{HashMap, HashSet};

fn passes(record: &HistoryRecord, filters: &FilterState) -> bool {
    filters.difficulty.matches(&record.difficulty_level)
        && filters.domain.matches(&record.domain)
        && filters
            .score_bucket
            .map_or(true, |bucket| bucket.matches(record.score))
}

/// Derive the ranked leaderboard for one fetch cycle.
///
/// Records failing the filter predicate are excluded before dedup, so they
/// never influence a key's max score. The max-reduction is online: a higher
/// score replaces only `max_score` and `photo` on the existing entry, all
/// other fields keep their first-seen values. Ties keep first-appearance
/// order (stable sort).
pub fn derive(records: &[HistoryRecord], filters: &FilterState) -> Vec<LeaderboardEntry> {
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();
    let mut entries: Vec<LeaderboardEntry> = Vec::new();

    for record in records {
        if !passes(record, filters) {
            continue;
        }

        let key = (
            record.user.clone(),
            record.difficulty_level.clone(),
            record.domain.clone(),
        );

        match index.get(&key) {
            Some(&i) => {
                let existing = &mut entries[i];
                if record.score > existing.max_score {
                    existing.max_score = record.score;
                    existing.photo = record.photo.clone();
                }
            }
            None => {
                index.insert(key, entries.len());
                entries.push(LeaderboardEntry {
                    user_id: record.user.clone(),
                    username: String::new(),
                    domain: record.domain.clone(),
                    difficulty_level: record.difficulty_level.clone(),
                    max_score: record.score,
                    rank: 1,
                    photo: record.photo.clone(),
                });
            }
        }
    }

    // Vec::sort_by is stable, so equal scores stay in first-seen order.
    entries.sort_by(|a, b| b.max_score.total_cmp(&a.max_score));

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    entries
}

/// Domains observed in the current unfiltered fetch, in encounter order.
/// Used only to populate the domain selector.
pub fn unique_domains(records: &[HistoryRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.domain.clone()))
        .map(|r| r.domain.clone())
        .collect()
}
