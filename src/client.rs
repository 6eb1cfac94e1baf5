use crate::{
    config::EndpointConfig,
    error::ClientError,
    messages::{ChatCompletionsRequest, ChatCompletionsResponse},
    model::{MatchRequest, MatchResponse, VisionModel},
};

/// API version appended to every chat-completions call.
pub const API_VERSION: &str = "2024-05-01-preview";

/// Blocking client of a hosted chat-completions endpoint.
///
/// Each call is a single attempt: no retries and no timeout beyond the
/// transport defaults.
pub struct ChatCompletionsClient {
    config: EndpointConfig,
    client: reqwest::blocking::Client,
}

impl ChatCompletionsClient {
    pub fn new(config: EndpointConfig) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            API_VERSION
        )
    }
}

impl VisionModel for ChatCompletionsClient {
    type Error = ClientError;

    fn run(&mut self, request: MatchRequest) -> Result<MatchResponse, Self::Error> {
        let body = ChatCompletionsRequest::new(&self.config.model_name, &request);

        log::debug!(
            "Sending chat completion to {} with model {}",
            self.config.endpoint,
            self.config.model_name
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("Inference endpoint answered {status}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion = response.json::<ChatCompletionsResponse>()?;

        log::debug!("Chat completion received");

        completion
            .first_content()
            .map(|text| MatchResponse { text })
            .ok_or(ClientError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> EndpointConfig {
        EndpointConfig {
            endpoint: endpoint.to_string(),
            api_key: "key".to_string(),
            model_name: "model".to_string(),
        }
    }

    #[test]
    fn completions_url_appends_route_and_version() -> Result<(), ClientError> {
        let client = ChatCompletionsClient::new(config("https://example.services.ai.azure.com/models/"))?;
        assert_eq!(
            client.completions_url(),
            "https://example.services.ai.azure.com/models/chat/completions?api-version=2024-05-01-preview"
        );
        Ok(())
    }
}
