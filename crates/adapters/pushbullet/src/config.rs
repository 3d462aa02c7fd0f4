//! Pushbullet integration configuration.

use serde::Deserialize;

/// Configuration for the Pushbullet stream.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct PushbulletConfig {
    /// Access token from the account settings page.
    pub api_key: String,
    /// Base URL of the realtime stream; the API key is appended as the last path segment.
    pub stream_url: String,
}

impl PushbulletConfig {
    /// Full websocket URL, including the API key.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/{}", self.stream_url.trim_end_matches('/'), self.api_key)
    }
}

impl Default for PushbulletConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            stream_url: "wss://stream.pushbullet.com/websocket".to_string(),
        }
    }
}

impl std::fmt::Debug for PushbulletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushbulletConfig")
            .field("api_key", &"<redacted>")
            .field("stream_url", &self.stream_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_public_stream() {
        let config = PushbulletConfig::default();
        assert_eq!(config.stream_url, "wss://stream.pushbullet.com/websocket");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn should_append_api_key_to_url() {
        let config = PushbulletConfig {
            api_key: "o.abc123".to_string(),
            stream_url: "ws://localhost:9000/websocket/".to_string(),
        };
        assert_eq!(config.url(), "ws://localhost:9000/websocket/o.abc123");
    }

    #[test]
    fn should_redact_api_key_in_debug_output() {
        let config = PushbulletConfig {
            api_key: "o.secret".to_string(),
            ..PushbulletConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("o.secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn should_deserialize_from_toml() {
        let config: PushbulletConfig = toml::from_str(r#"api_key = "o.xyz""#).unwrap();
        assert_eq!(config.api_key, "o.xyz");
        assert_eq!(config.stream_url, "wss://stream.pushbullet.com/websocket");
    }
}
