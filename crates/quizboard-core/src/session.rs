//! Session collaborator: a read-only key-value lookup for the current
//! session's user id. Injected into the fetch orchestrator instead of read
//! from ambient global state so cycles are deterministic under test.

use crate::constants::{SESSION_FILE, USER_ID_ENV};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub trait SessionContext: Send + Sync {
    /// Current session user id, if a session exists. Read once per fetch
    /// cycle; never written by this system.
    fn current_user_id(&self) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct SessionFile {
    user_id: String,
}

/// Production session store: a small JSON file under the platform data dir
/// (written by the login flow of the surrounding app), with an env-var
/// override for development.
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Session file at the default location,
    /// `<data_dir>/quizboard/session.json`.
    pub fn from_data_dir() -> Self {
        let dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join("quizboard").join(SESSION_FILE))
    }
}

impl SessionContext for FileSession {
    fn current_user_id(&self) -> Option<String> {
        if let Ok(user_id) = std::env::var(USER_ID_ENV) {
            if !user_id.is_empty() {
                return Some(user_id);
            }
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return None,
        };

        match serde_json::from_str::<SessionFile>(&contents) {
            Ok(session) => Some(session.user_id),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed session file");
                None
            }
        }
    }
}

/// Fixed session for tests and the `--user-id` CLI override.
pub struct StaticSession(pub Option<String>);

impl SessionContext for StaticSession {
    fn current_user_id(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_user_id_from_session_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"user_id":"42"}}"#).unwrap();

        let session = FileSession::new(file.path().to_path_buf());
        assert_eq!(session.current_user_id(), Some("42".to_string()));
    }

    #[test]
    fn missing_or_malformed_file_yields_none() {
        let session = FileSession::new(PathBuf::from("/nonexistent/session.json"));
        assert_eq!(session.current_user_id(), None);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let session = FileSession::new(file.path().to_path_buf());
        assert_eq!(session.current_user_id(), None);
    }

    #[test]
    fn static_session_returns_fixed_id() {
        assert_eq!(
            StaticSession(Some("u1".to_string())).current_user_id(),
            Some("u1".to_string())
        );
        assert_eq!(StaticSession(None).current_user_id(), None);
    }
}
