use crate::encode::EncodedImage;

/// Default completion budget of a single matching request.
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// A single prompt-plus-image request sent to a vision model.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    /// Instruction given to the model as the system message.
    pub system_prompt: String,
    /// Text part of the user message.
    pub user_prompt: String,
    /// Image part of the user message.
    pub image: EncodedImage,
    /// Upper bound on the number of generated tokens.
    pub max_tokens: u32,
}

/// Free-text answer of a vision model.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResponse {
    pub text: String,
}

/// Trait for vision models that can answer a prompt about an image.
///
/// The matching logic only talks to this trait, so the hosted endpoint can be
/// swapped for any other implementation, including test doubles.
pub trait VisionModel {
    /// The error type that can be returned during inference.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs inference on the given request and returns a response or error.
    fn run(&mut self, request: MatchRequest) -> Result<MatchResponse, Self::Error>;
}
