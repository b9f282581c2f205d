/// One row of the ranked leaderboard, produced by `rank::derive` on every
/// fetch cycle and fully replaced on the next one. `username` stays empty
/// until the profile fan-out resolves it (and stays empty if that lookup
/// fails), never None, so rendering is total.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub username: String,
    pub domain: String,
    pub difficulty_level: String,
    pub max_score: f64,
    /// Dense 1-based position after the descending sort.
    pub rank: usize,
    pub photo: String,
}
