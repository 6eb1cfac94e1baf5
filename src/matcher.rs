use crate::{
    config::EndpointConfig,
    encode::EncodedImage,
    error::{ConfigError, MatcherError},
    model::{DEFAULT_MAX_TOKENS, MatchRequest, VisionModel},
};
use std::path::Path;

pub const SYSTEM_PROMPT: &str = "You are a facial feature analysis expert. Look at the image and determine which of the provided descriptions best matches the facial features shown.";

const USER_PROMPT_HEADER: &str = "Look at this image and tell me which of the following descriptions best matches the facial features shown. Please respond with ONLY the matching description, no other text.";

/// Reads the candidate descriptions, one per non-blank line, trimmed.
pub fn read_descriptions(path: impl AsRef<Path>) -> Result<Vec<String>, MatcherError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MatcherError::DescriptionsFile {
        path: path.to_path_buf(),
        source,
    })?;

    let descriptions = parse_descriptions(&text);
    if descriptions.is_empty() {
        return Err(MatcherError::NoDescriptions(path.to_path_buf()));
    }

    log::debug!("Read {} descriptions from {}", descriptions.len(), path.display());

    Ok(descriptions)
}

pub fn parse_descriptions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the user prompt listing every description as a bullet.
pub fn build_user_prompt(descriptions: &[String]) -> String {
    let bullets = descriptions
        .iter()
        .map(|desc| format!("- {desc}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{USER_PROMPT_HEADER}\n\nPossible descriptions:\n{bullets}")
}

/// Asks the model which description best matches the image.
///
/// The answer is returned as given by the model. It is not required to be one
/// of `descriptions`; a mismatch is only logged.
pub fn analyze_facial_features<M>(
    model: &mut M,
    image_path: impl AsRef<Path>,
    descriptions: &[String],
) -> Result<String, MatcherError>
where
    M: VisionModel,
    M::Error: Into<MatcherError>,
{
    let image = EncodedImage::from_path(image_path)?;

    let request = MatchRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt: build_user_prompt(descriptions),
        image,
        max_tokens: DEFAULT_MAX_TOKENS,
    };

    let response = model.run(request).map_err(Into::<MatcherError>::into)?;
    let text = response.text.trim().to_string();

    if !descriptions.iter().any(|desc| *desc == text) {
        log::warn!("Model answer {text:?} is not one of the supplied descriptions");
    }

    Ok(text)
}

/// Full matcher flow: descriptions, credentials, model, inference.
///
/// Credentials are resolved before `connect` is called, so a configuration
/// error never reaches the network.
pub fn match_image<M, L, C>(
    descriptions_path: impl AsRef<Path>,
    image_path: impl AsRef<Path>,
    load_config: L,
    connect: C,
) -> Result<String, MatcherError>
where
    M: VisionModel,
    M::Error: Into<MatcherError>,
    L: FnOnce() -> Result<EndpointConfig, ConfigError>,
    C: FnOnce(EndpointConfig) -> Result<M, M::Error>,
{
    let descriptions = read_descriptions(descriptions_path)?;
    let config = load_config()?;
    let mut model = connect(config).map_err(Into::<MatcherError>::into)?;
    analyze_facial_features(&mut model, image_path, &descriptions)
}

pub fn format_match(text: &str) -> String {
    format!("Matching facial feature description: {text}")
}
