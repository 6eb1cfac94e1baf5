//! Decoding of facial keypoint dataset rows.
//!
//! A row holds a flattened 96x96 grayscale image in its `Image` column and
//! any number of `<landmark>_x`, `<landmark>_y` coordinate columns. Decoding
//! is pure: no file access and no rendering happen here.

use crate::error::KeypointError;
use csv::StringRecord;
use kornia_image::{Image, ImageSize, allocator::CpuAllocator};

/// Side length of the square rasters stored in the dataset.
pub const RASTER_SIZE: usize = 96;

/// Name of the column holding the flattened pixel intensities.
pub const IMAGE_COLUMN: &str = "Image";

/// A facial landmark position in raster pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Keypoint {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// A decoded dataset row.
pub struct FaceRow {
    /// Grayscale intensities, row-major.
    pub raster: Image<f32, 1, CpuAllocator>,
    /// Keypoints whose both coordinates are present.
    pub keypoints: Vec<Keypoint>,
}

/// Decodes one dataset record against the dataset header.
pub fn decode_row(header: &StringRecord, record: &StringRecord) -> Result<FaceRow, KeypointError> {
    let image_index = header
        .iter()
        .position(|name| name == IMAGE_COLUMN)
        .ok_or(KeypointError::MissingImage)?;
    let pixels = record.get(image_index).ok_or(KeypointError::MissingImage)?;

    let raster = decode_raster(pixels)?;

    let coordinates = header
        .iter()
        .zip(record.iter())
        .enumerate()
        .filter(|(i, _)| *i != image_index)
        .map(|(_, column)| column);

    Ok(FaceRow {
        raster,
        keypoints: pair_keypoints(coordinates),
    })
}

/// Reshapes a space-separated intensity vector into a square raster.
pub fn decode_raster(text: &str) -> Result<Image<f32, 1, CpuAllocator>, KeypointError> {
    let pixels = parse_pixels(text)?;

    let expected = RASTER_SIZE * RASTER_SIZE;
    if pixels.len() != expected {
        return Err(KeypointError::PixelCount {
            expected,
            found: pixels.len(),
        });
    }

    let size = ImageSize {
        width: RASTER_SIZE,
        height: RASTER_SIZE,
    };

    Ok(Image::new(size, pixels, CpuAllocator)?)
}

pub fn parse_pixels(text: &str) -> Result<Vec<f32>, KeypointError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|_| KeypointError::InvalidPixel(token.to_string()))
        })
        .collect()
}

/// Parses a coordinate cell. Empty, `NaN` and unparsable cells are missing.
pub fn parse_coordinate(cell: &str) -> Option<f32> {
    cell.trim().parse::<f32>().ok().filter(|value| value.is_finite())
}

/// Pairs consecutive `(column, value)` cells into keypoints.
///
/// A pair with a missing coordinate is dropped; a trailing unpaired column is
/// ignored.
pub fn pair_keypoints<'a, I>(columns: I) -> Vec<Keypoint>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let columns = columns.into_iter().collect::<Vec<_>>();

    columns
        .chunks_exact(2)
        .filter_map(|pair| {
            let (x_name, x_cell) = pair[0];
            let (_, y_cell) = pair[1];
            let x = parse_coordinate(x_cell)?;
            let y = parse_coordinate(y_cell)?;
            Some(Keypoint {
                name: landmark_name(x_name).to_string(),
                x,
                y,
            })
        })
        .collect()
}

fn landmark_name(column: &str) -> &str {
    column.strip_suffix("_x").unwrap_or(column)
}
