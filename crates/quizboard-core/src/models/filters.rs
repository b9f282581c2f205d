use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Difficult,
}

impl DifficultyFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Difficult => "Difficult",
        }
    }

    /// Whether a record with this difficulty string passes the filter.
    /// Unknown difficulty strings are ordinary values; they only ever match
    /// the All filter.
    pub fn matches(&self, difficulty_level: &str) -> bool {
        match self {
            Self::All => true,
            other => difficulty_level == other.label(),
        }
    }

    /// Value sent as the advisory `difficulty_level` query parameter;
    /// None for All (the parameter is omitted).
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.label()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainFilter {
    #[default]
    All,
    Named(String),
}

impl DomainFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Named(name) => name,
        }
    }

    pub fn matches(&self, domain: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => domain == name,
        }
    }

    pub fn query_value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }
}

/// Score bucket selector for the profiles variant. Bounds follow the
/// original backend contract: the middle bucket is inclusive on both ends,
/// so a score of exactly 5 satisfies both `Between3And5` and `AtLeast5`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBucket {
    #[default]
    All,
    LessThan3,
    Between3And5,
    AtLeast5,
}

impl ScoreBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::LessThan3 => "<3",
            Self::Between3And5 => "3-5",
            Self::AtLeast5 => ">=5",
        }
    }

    pub fn matches(&self, score: f64) -> bool {
        match self {
            Self::All => true,
            Self::LessThan3 => score < 3.0,
            Self::Between3And5 => (3.0..=5.0).contains(&score),
            Self::AtLeast5 => score >= 5.0,
        }
    }

    pub fn cycle_next(&self) -> Self {
        match self {
            Self::All => Self::LessThan3,
            Self::LessThan3 => Self::Between3And5,
            Self::Between3And5 => Self::AtLeast5,
            Self::AtLeast5 => Self::All,
        }
    }
}

/// Active filter selections. Owned by the view; changing any field is what
/// triggers a refetch-and-rederive cycle. `score_bucket` is None for the
/// board variant, which has no bucket selector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub difficulty: DifficultyFilter,
    pub domain: DomainFilter,
    pub score_bucket: Option<ScoreBucket>,
}

impl FilterState {
    pub fn board() -> Self {
        Self::default()
    }

    pub fn profiles() -> Self {
        Self {
            score_bucket: Some(ScoreBucket::All),
            ..Self::default()
        }
    }
}
