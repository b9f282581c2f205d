use quizboard_core::constants::DEFAULT_PHOTO;
use quizboard_core::{
    CycleOutcome, DifficultyFilter, DomainFilter, FilterState, LeaderboardEntry, ScoreBucket,
};
use tracing::debug;

/// A failed fetch cycle as surfaced to the UI: the cycle's generation plus
/// the message to display. Failures go through the same supersede policy
/// as successful cycles.
#[derive(Debug, Clone)]
pub struct CycleFailure {
    pub generation: u64,
    pub message: String,
}

/// The two presentation variants over the same derivation output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Board,
    Profiles,
}

/// Single owner of all view state. Updates happen only on the event-loop
/// task; finished fetch cycles arrive through a channel and are applied
/// via `apply_cycle`.
pub struct App {
    pub running: bool,
    pub view: View,
    pub filters: FilterState,
    /// Domain selector is revealed once a concrete difficulty is picked.
    pub show_domain_selection: bool,
    pub entries: Vec<LeaderboardEntry>,
    pub unique_domains: Vec<String>,
    pub self_user_id: Option<String>,
    pub self_photo: String,
    pub loading: bool,
    pub last_error: Option<String>,
    pub applied_generation: u64,
    /// When set, a cycle older than the newest issued one is dropped
    /// instead of applied (default is last-resolved-wins).
    pub discard_superseded: bool,
}

impl App {
    pub fn new(view: View, discard_superseded: bool) -> Self {
        let filters = match view {
            View::Board => FilterState::board(),
            View::Profiles => FilterState::profiles(),
        };
        Self {
            running: true,
            view,
            filters,
            show_domain_selection: false,
            entries: Vec::new(),
            unique_domains: Vec::new(),
            self_user_id: None,
            self_photo: DEFAULT_PHOTO.to_string(),
            loading: false,
            last_error: None,
            applied_generation: 0,
            discard_superseded,
        }
    }

    /// Whether fetch cycles should run the username fan-out.
    pub fn resolve_usernames(&self) -> bool {
        self.view == View::Profiles
    }

    pub fn toggle_view(&mut self) {
        let view = match self.view {
            View::Board => View::Profiles,
            View::Profiles => View::Board,
        };
        self.view = view;
        self.filters.score_bucket = match view {
            View::Board => None,
            View::Profiles => Some(ScoreBucket::All),
        };
    }

    /// Returns true when the selection actually changed (i.e. a refetch is
    /// due). Picking a concrete difficulty reveals the domain selector;
    /// All hides it and resets the domain.
    pub fn set_difficulty(&mut self, difficulty: DifficultyFilter) -> bool {
        if self.filters.difficulty == difficulty {
            return false;
        }
        self.filters.difficulty = difficulty;
        self.show_domain_selection = difficulty != DifficultyFilter::All;
        if !self.show_domain_selection {
            self.filters.domain = DomainFilter::All;
        }
        true
    }

    /// Advance the domain selection: All, then each observed domain in
    /// encounter order, then back to All.
    pub fn cycle_domain(&mut self) -> bool {
        if !self.show_domain_selection || self.unique_domains.is_empty() {
            return false;
        }

        let next = match &self.filters.domain {
            DomainFilter::All => DomainFilter::Named(self.unique_domains[0].clone()),
            DomainFilter::Named(current) => {
                match self.unique_domains.iter().position(|d| d == current) {
                    Some(i) if i + 1 < self.unique_domains.len() => {
                        DomainFilter::Named(self.unique_domains[i + 1].clone())
                    }
                    _ => DomainFilter::All,
                }
            }
        };
        self.filters.domain = next;
        true
    }

    pub fn cycle_bucket(&mut self) -> bool {
        match self.filters.score_bucket {
            Some(bucket) => {
                self.filters.score_bucket = Some(bucket.cycle_next());
                true
            }
            None => false,
        }
    }

    /// Apply a finished fetch cycle.
    ///
    /// `latest_issued` is the orchestrator's newest generation at the time
    /// the result arrived; with `discard_superseded` a stale cycle is
    /// dropped, whether it succeeded or failed.
    /// On failure the board variant keeps its last-good entries
    /// while the profiles variant clears them; either way the error is
    /// surfaced.
    pub fn apply_cycle(&mut self, result: Result<CycleOutcome, CycleFailure>, latest_issued: u64) {
        self.loading = false;

        let generation = match &result {
            Ok(outcome) => outcome.generation,
            Err(failure) => failure.generation,
        };
        if self.discard_superseded && generation < latest_issued {
            debug!(generation, latest_issued, "dropping superseded cycle");
            return;
        }

        match result {
            Ok(outcome) => {
                self.applied_generation = outcome.generation;
                self.entries = outcome.entries;
                self.unique_domains = outcome.unique_domains;
                self.self_user_id = outcome.self_user_id;
                self.self_photo = outcome.self_photo;
                self.last_error = None;
            }
            Err(failure) => {
                if self.view == View::Profiles {
                    self.entries.clear();
                }
                self.last_error = Some(failure.message);
            }
        }
    }

    pub fn is_self(&self, entry: &LeaderboardEntry) -> bool {
        self.self_user_id.as_deref() == Some(entry.user_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(generation: u64, users: &[&str]) -> CycleOutcome {
        CycleOutcome {
            generation,
            entries: users
                .iter()
                .enumerate()
                .map(|(i, user)| LeaderboardEntry {
                    user_id: user.to_string(),
                    username: String::new(),
                    domain: "math".to_string(),
                    difficulty_level: "Easy".to_string(),
                    max_score: 5.0,
                    rank: i + 1,
                    photo: DEFAULT_PHOTO.to_string(),
                })
                .collect(),
            unique_domains: vec!["math".to_string()],
            self_user_id: None,
            self_photo: DEFAULT_PHOTO.to_string(),
        }
    }

    fn failure(generation: u64, message: &str) -> CycleFailure {
        CycleFailure {
            generation,
            message: message.to_string(),
        }
    }

    #[test]
    fn concrete_difficulty_reveals_domain_selection() {
        let mut app = App::new(View::Board, false);
        assert!(app.set_difficulty(DifficultyFilter::Easy));
        assert!(app.show_domain_selection);

        // Same value again is not a change.
        assert!(!app.set_difficulty(DifficultyFilter::Easy));

        assert!(app.set_difficulty(DifficultyFilter::All));
        assert!(!app.show_domain_selection);
        assert_eq!(app.filters.domain, DomainFilter::All);
    }

    #[test]
    fn domain_cycles_through_observed_domains_and_wraps() {
        let mut app = App::new(View::Board, false);
        app.set_difficulty(DifficultyFilter::Easy);
        app.unique_domains = vec!["math".to_string(), "science".to_string()];

        assert!(app.cycle_domain());
        assert_eq!(app.filters.domain, DomainFilter::Named("math".to_string()));
        assert!(app.cycle_domain());
        assert_eq!(
            app.filters.domain,
            DomainFilter::Named("science".to_string())
        );
        assert!(app.cycle_domain());
        assert_eq!(app.filters.domain, DomainFilter::All);
    }

    #[test]
    fn domain_cycle_requires_revealed_selector() {
        let mut app = App::new(View::Board, false);
        app.unique_domains = vec!["math".to_string()];
        assert!(!app.cycle_domain());
    }

    #[test]
    fn bucket_cycle_only_applies_to_profiles() {
        let mut app = App::new(View::Board, false);
        assert!(!app.cycle_bucket());

        let mut app = App::new(View::Profiles, false);
        assert!(app.cycle_bucket());
        assert_eq!(app.filters.score_bucket, Some(ScoreBucket::LessThan3));
    }

    #[test]
    fn toggle_view_adjusts_bucket_presence() {
        let mut app = App::new(View::Board, false);
        app.toggle_view();
        assert_eq!(app.view, View::Profiles);
        assert_eq!(app.filters.score_bucket, Some(ScoreBucket::All));
        app.toggle_view();
        assert_eq!(app.filters.score_bucket, None);
    }

    #[test]
    fn last_resolved_wins_by_default() {
        let mut app = App::new(View::Board, false);
        app.apply_cycle(Ok(outcome(2, &["a"])), 2);
        // An older cycle resolving late still overwrites state.
        app.apply_cycle(Ok(outcome(1, &["b"])), 2);
        assert_eq!(app.entries[0].user_id, "b");
        assert_eq!(app.applied_generation, 1);
    }

    #[test]
    fn discard_superseded_drops_stale_cycles() {
        let mut app = App::new(View::Board, true);
        app.apply_cycle(Ok(outcome(2, &["a"])), 2);
        app.apply_cycle(Ok(outcome(1, &["b"])), 2);
        assert_eq!(app.entries[0].user_id, "a");
        assert_eq!(app.applied_generation, 2);
    }

    #[test]
    fn discard_superseded_drops_stale_failed_cycles_too() {
        // A failed cycle resolving after a newer successful one must not
        // wipe the newer data or surface its outdated error.
        let mut app = App::new(View::Profiles, true);
        app.apply_cycle(Ok(outcome(2, &["a"])), 2);
        app.apply_cycle(Err(failure(1, "stale failure")), 2);
        assert!(!app.entries.is_empty());
        assert!(app.last_error.is_none());
        assert_eq!(app.applied_generation, 2);
    }

    #[test]
    fn stale_failure_still_applies_without_discard_option() {
        let mut app = App::new(View::Profiles, false);
        app.apply_cycle(Ok(outcome(2, &["a"])), 2);
        app.apply_cycle(Err(failure(1, "stale failure")), 2);
        assert!(app.entries.is_empty());
        assert_eq!(app.last_error.as_deref(), Some("stale failure"));
    }

    #[test]
    fn board_keeps_last_good_on_failure_profiles_clears() {
        let mut app = App::new(View::Board, false);
        app.apply_cycle(Ok(outcome(1, &["a"])), 1);
        app.apply_cycle(Err(failure(2, "boom")), 2);
        assert_eq!(app.entries.len(), 1);
        assert_eq!(app.last_error.as_deref(), Some("boom"));

        let mut app = App::new(View::Profiles, false);
        app.apply_cycle(Ok(outcome(1, &["a"])), 1);
        app.apply_cycle(Err(failure(2, "boom")), 2);
        assert!(app.entries.is_empty());
        assert_eq!(app.last_error.as_deref(), Some("boom"));
    }

    #[test]
    fn successful_cycle_clears_previous_error() {
        let mut app = App::new(View::Board, false);
        app.apply_cycle(Err(failure(1, "boom")), 1);
        app.apply_cycle(Ok(outcome(2, &["a"])), 2);
        assert!(app.last_error.is_none());
    }
}
