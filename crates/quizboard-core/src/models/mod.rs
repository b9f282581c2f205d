pub mod entry;
pub mod filters;
pub mod history;
pub mod profile;

pub use entry::LeaderboardEntry;
pub use filters::{DifficultyFilter, DomainFilter, FilterState, ScoreBucket};
pub use history::{HistoryRecord, RawHistoryRecord};
pub use profile::UserProfile;
