use crate::constants::DEFAULT_API_BASE;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Base origin of the quiz API, without a trailing slash.
    pub api_base: String,
}

impl CoreConfig {
    pub fn new<S: Into<String>>(api_base: S) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self { api_base }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = CoreConfig::new("http://localhost:8000/");
        assert_eq!(config.api_base, "http://localhost:8000");
    }
}
