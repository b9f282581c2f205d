//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Default API base origin, matching the quiz backend's dev server.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Sentinel photo reference used when a record or profile carries no photo.
/// Distinguishes "no photo" from "not yet loaded".
pub const DEFAULT_PHOTO: &str = "default-photo-url";

/// File name of the session store under the platform data dir.
pub const SESSION_FILE: &str = "session.json";

/// Env var overriding the session user id (takes precedence over the file).
pub const USER_ID_ENV: &str = "QUIZBOARD_USER_ID";

/// Env var enabling file logging; value is the log file path.
pub const LOG_FILE_ENV: &str = "QUIZBOARD_LOG_FILE";
