pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod models;
pub mod rank;
pub mod session;
pub mod tracing_setup;

pub use api::{LeaderboardApi, QuizApiClient};
pub use error::{ApiError, ParseError};
pub use fetch::{CycleError, CycleOutcome, Orchestrator};
pub use models::{
    DifficultyFilter, DomainFilter, FilterState, HistoryRecord, LeaderboardEntry,
    RawHistoryRecord, ScoreBucket, UserProfile,
};
