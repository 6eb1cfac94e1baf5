//! Facial feature tools.
//!
//! Two independent utilities share this crate:
//!
//! * the feature matcher asks a hosted vision model which of a list of text
//!   descriptions best matches a facial image ([`matcher`]);
//! * the keypoint image exporter turns rows of the Kaggle facial keypoints
//!   dataset into PNG files, optionally marking the keypoints ([`exporter`]).

pub mod client;
pub mod config;
pub mod dataset;
pub mod encode;
pub mod error;
pub mod exporter;
pub mod keypoints;
pub mod matcher;
pub mod messages;
pub mod model;
pub mod render;

pub use client::ChatCompletionsClient;
pub use config::EndpointConfig;
pub use encode::EncodedImage;
pub use error::{ClientError, ConfigError, EncodeError, ExportError, KeypointError, MatcherError};
pub use exporter::{ExportOptions, ExportSummary, load_and_save_images};
pub use keypoints::{FaceRow, Keypoint};
pub use matcher::{analyze_facial_features, format_match, match_image, read_descriptions};
pub use model::{MatchRequest, MatchResponse, VisionModel};
