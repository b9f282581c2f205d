use crate::constants::DEFAULT_PHOTO;
use crate::error::ParseError;
use serde::Deserialize;

/// One attempt row from the question-history endpoint, as it appears on the
/// wire. The backend serializes `score` as a JSON-encoded number inside a
/// string, so it stays a `String` here until normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHistoryRecord {
    pub user: String,
    pub score: String,
    pub domain: String,
    pub difficulty_level: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// A normalized history record: score decoded to a number, photo defaulted
/// to the sentinel reference when the source field is absent or empty.
///
/// Difficulty and domain are kept as plain strings; values outside the
/// known set are ordinary data, not errors.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub user: String,
    pub score: f64,
    pub domain: String,
    pub difficulty_level: String,
    pub photo: String,
}

impl HistoryRecord {
    pub fn from_raw(raw: &RawHistoryRecord) -> Result<Self, ParseError> {
        let score: f64 = serde_json::from_str(raw.score.trim()).map_err(|_| ParseError {
            user: raw.user.clone(),
            value: raw.score.clone(),
        })?;

        let photo = match raw.photo.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => DEFAULT_PHOTO.to_string(),
        };

        Ok(Self {
            user: raw.user.clone(),
            score,
            domain: raw.domain.clone(),
            difficulty_level: raw.difficulty_level.clone(),
            photo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(user: &str, score: &str, photo: Option<&str>) -> RawHistoryRecord {
        RawHistoryRecord {
            user: user.to_string(),
            score: score.to_string(),
            domain: "math".to_string(),
            difficulty_level: "Easy".to_string(),
            photo: photo.map(str::to_string),
        }
    }

    #[test]
    fn decodes_string_encoded_score() {
        let record = HistoryRecord::from_raw(&raw("a", "7", None)).unwrap();
        assert_eq!(record.score, 7.0);

        let record = HistoryRecord::from_raw(&raw("a", "3.5", None)).unwrap();
        assert_eq!(record.score, 3.5);
    }

    #[test]
    fn missing_or_empty_photo_gets_sentinel() {
        let record = HistoryRecord::from_raw(&raw("a", "1", None)).unwrap();
        assert_eq!(record.photo, DEFAULT_PHOTO);

        let record = HistoryRecord::from_raw(&raw("a", "1", Some(""))).unwrap();
        assert_eq!(record.photo, DEFAULT_PHOTO);

        let record = HistoryRecord::from_raw(&raw("a", "1", Some("/media/p.jpg"))).unwrap();
        assert_eq!(record.photo, "/media/p.jpg");
    }

    #[test]
    fn malformed_score_is_a_parse_error() {
        let err = HistoryRecord::from_raw(&raw("a", "seven", None)).unwrap_err();
        assert_eq!(err.user, "a");
        assert_eq!(err.value, "seven");
    }

    #[test]
    fn wire_record_deserializes_without_photo_field() {
        let json = r#"{"user":"u1","score":"4","domain":"science","difficulty_level":"Medium"}"#;
        let raw: RawHistoryRecord = serde_json::from_str(json).unwrap();
        assert!(raw.photo.is_none());
        assert_eq!(raw.difficulty_level, "Medium");
    }
}
