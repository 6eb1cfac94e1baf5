use crate::error::ConfigError;
use std::fmt;

/// Variable holding the inference endpoint URL.
pub const ENDPOINT_VAR: &str = "AZURE_ENDPOINT";
/// Variable holding the API key.
pub const API_KEY_VAR: &str = "AZURE_API_KEY";
/// Variable holding the deployed model name.
pub const MODEL_NAME_VAR: &str = "AZURE_MODEL_NAME";

/// Credentials of the hosted chat-completion endpoint.
#[derive(Clone)]
pub struct EndpointConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model_name: String,
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl EndpointConfig {
    /// Reads the credentials from the process environment.
    ///
    /// A `.env` file in the working directory (or one of its parents) is loaded
    /// first when present; variables already set in the environment win.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) => log::debug!("No .env file loaded: {e}"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the credentials through an arbitrary variable lookup.
    ///
    /// Unset and blank values are both reported as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let endpoint = read(ENDPOINT_VAR);
        let api_key = read(API_KEY_VAR);
        let model_name = read(MODEL_NAME_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        Ok(Self {
            endpoint,
            api_key,
            model_name,
        })
    }
}
