//! cli/satb-cli/src/config.rs
//! Process configuration read once at startup: the only global state this workspace has.

use std::env;

/// Environment variables carrying a credential for the text-to-audio collaborator, tried in
/// order. At most one is ever used.
const CREDENTIAL_VARS: [&str; 3] = ["REPLICATE_API_KEY", "REPLICATE_API_TOKEN", "AI_MUSIC_TOKEN"];

/// A snapshot of environment-derived configuration, read once in `main`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Listening port, read but unused (no transport is built here; documented for a future one).
    pub port: Option<u16>,
    /// Credential for the text-to-audio collaborator, from the first present variable in
    /// [`CREDENTIAL_VARS`].
    pub ai_music_credential: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|value| value.parse().ok());
        let ai_music_credential =
            CREDENTIAL_VARS.iter().find_map(|var| env::var(var).ok().filter(|value| !value.is_empty()));
        Self { port, ai_music_credential }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credential() {
        let config = Config::default();
        assert!(config.ai_music_credential.is_none());
        assert!(config.port.is_none());
    }
}
