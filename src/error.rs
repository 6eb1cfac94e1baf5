use std::path::PathBuf;

/// An error raised while reading the endpoint credentials.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// One or more required variables are unset or empty.
    #[error("Azure credentials not found in environment variables (missing: {})", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

/// An error raised while encoding or decoding an image payload.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    /// Failed to read the image file.
    #[error("Failed to read the image {path}. {source}")]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image file holds no data.
    #[error("Image file is empty: {0}")]
    EmptyImage(PathBuf),

    /// The base64 payload could not be decoded.
    #[error("Failed to decode the base64 payload. {0}")]
    DecodeError(#[from] base64::DecodeError),
}

/// An error raised by the chat-completion client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Transport or body decoding failure.
    #[error("Request to the inference endpoint failed. {0}")]
    HttpError(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Inference endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered without any message content.
    #[error("Inference endpoint returned no content")]
    EmptyResponse,
}

/// An error raised by the feature matcher.
#[derive(thiserror::Error, Debug)]
pub enum MatcherError {
    /// Failed to read the descriptions file.
    #[error("Failed to read descriptions from {path}. {source}")]
    DescriptionsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptions file has no non-blank line.
    #[error("No descriptions found in {0}")]
    NoDescriptions(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// An error raised while decoding a keypoint dataset row.
#[derive(thiserror::Error, Debug)]
pub enum KeypointError {
    /// The row has no `Image` column.
    #[error("Row has no Image column")]
    MissingImage,

    /// The pixel vector does not describe a square raster of the expected size.
    #[error("Expected {expected} pixel values, found {found}")]
    PixelCount { expected: usize, found: usize },

    /// A pixel token is not a number.
    #[error("Invalid pixel value: {0:?}")]
    InvalidPixel(String),

    /// Failed to create the raster.
    #[error("Failed to create the raster. {0}")]
    ImageCreationError(#[from] kornia_image::ImageError),
}

/// An error raised by the keypoint image exporter.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// The dataset file does not exist.
    #[error("Dataset file not found: {0}")]
    DatasetNotFound(PathBuf),

    /// Failed to parse the dataset.
    #[error("Failed to read the dataset. {0}")]
    CsvError(#[from] csv::Error),

    /// Failed to manipulate the output directory.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// A dataset row could not be decoded.
    #[error("Failed to decode row {row}. {source}")]
    Row {
        row: usize,
        #[source]
        source: KeypointError,
    },

    /// Failed to create the output image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] kornia_image::ImageError),

    /// Failed to write the output image.
    #[error("Failed to write image. {0}")]
    WriteError(#[from] kornia_io::error::IoError),
}
