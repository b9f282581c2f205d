use serde::Deserialize;

/// Response of `GET /api/userprofile/{userId}`. `photo`, when present, is a
/// path to be resolved against the API base origin.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub photo: Option<String>,
}
