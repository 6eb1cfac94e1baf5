use crate::keypoints::{FaceRow, Keypoint};
use kornia_image::{Image, ImageError, allocator::CpuAllocator};
use kornia_imgproc::draw::draw_line;

/// Color of the keypoint markers.
pub const MARKER_COLOR: [u8; 3] = [255, 0, 0];

/// Half length of a marker arm in pixels.
pub const MARKER_RADIUS: i64 = 1;

/// Maps a grayscale raster to an 8-bit RGB image.
///
/// Intensities are stretched to the full 0-255 range using the raster's own
/// minimum and maximum. A flat raster keeps its values, clamped to 0-255.
pub fn to_rgb(raster: &Image<f32, 1, CpuAllocator>) -> Result<Image<u8, 3, CpuAllocator>, ImageError> {
    let values = raster.as_slice();

    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let range = max - min;

    let data = values
        .iter()
        .flat_map(|v| {
            let level = if range > 0.0 {
                (v - min) / range * 255.0
            } else {
                *v
            };
            let level = level.round().clamp(0.0, 255.0) as u8;
            [level; 3]
        })
        .collect::<Vec<_>>();

    Image::new(raster.size(), data, CpuAllocator)
}

/// Draws a small plus-shaped marker at every keypoint.
///
/// Keypoints whose rounded position falls outside the image are skipped.
pub fn draw_keypoints(image: &mut Image<u8, 3, CpuAllocator>, keypoints: &[Keypoint]) {
    let (cols, rows) = (image.cols() as i64, image.rows() as i64);

    for keypoint in keypoints {
        let (x, y) = (keypoint.x.round() as i64, keypoint.y.round() as i64);
        if x < 0 || x >= cols || y < 0 || y >= rows {
            log::debug!("Skipping keypoint {} outside the image", keypoint.name);
            continue;
        }

        let (x0, x1) = ((x - MARKER_RADIUS).max(0), (x + MARKER_RADIUS).min(cols - 1));
        let (y0, y1) = ((y - MARKER_RADIUS).max(0), (y + MARKER_RADIUS).min(rows - 1));

        draw_line(image, (x0, y), (x1, y), MARKER_COLOR, 1);
        draw_line(image, (x, y0), (x, y1), MARKER_COLOR, 1);
    }
}

/// Renders a decoded row, with or without its keypoint markers.
pub fn render_row(
    row: &FaceRow,
    include_keypoints: bool,
) -> Result<Image<u8, 3, CpuAllocator>, ImageError> {
    let mut image = to_rgb(&row.raster)?;
    if include_keypoints && !row.keypoints.is_empty() {
        draw_keypoints(&mut image, &row.keypoints);
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kornia_image::ImageSize;

    fn pixel(image: &Image<u8, 3, CpuAllocator>, x: usize, y: usize) -> [u8; 3] {
        let start = (y * image.cols() + x) * 3;
        let slice = &image.as_slice()[start..start + 3];
        [slice[0], slice[1], slice[2]]
    }

    fn gradient(width: usize, height: usize) -> Result<Image<f32, 1, CpuAllocator>, ImageError> {
        let data = (0..width * height).map(|i| (i % width) as f32 * 10.0).collect();
        Image::new(ImageSize { width, height }, data, CpuAllocator)
    }

    #[test]
    fn to_rgb_stretches_range() -> Result<(), ImageError> {
        let raster = gradient(4, 2)?;
        let image = to_rgb(&raster)?;
        assert_eq!(image.cols(), 4);
        assert_eq!(image.rows(), 2);
        assert_eq!(pixel(&image, 0, 0), [0, 0, 0]);
        assert_eq!(pixel(&image, 3, 1), [255, 255, 255]);
        Ok(())
    }

    #[test]
    fn to_rgb_keeps_flat_raster() -> Result<(), ImageError> {
        let raster = Image::new(ImageSize { width: 2, height: 2 }, vec![42.0; 4], CpuAllocator)?;
        let image = to_rgb(&raster)?;
        assert!(image.as_slice().iter().all(|v| *v == 42));
        Ok(())
    }

    #[test]
    fn markers_are_drawn_at_keypoints() -> Result<(), ImageError> {
        let raster = Image::new(ImageSize { width: 9, height: 9 }, vec![0.0; 81], CpuAllocator)?;
        let mut image = to_rgb(&raster)?;
        draw_keypoints(
            &mut image,
            &[Keypoint {
                name: "nose_tip".to_string(),
                x: 4.2,
                y: 3.8,
            }],
        );

        assert_eq!(pixel(&image, 4, 4), MARKER_COLOR);
        assert_eq!(pixel(&image, 3, 4), MARKER_COLOR);
        assert_eq!(pixel(&image, 5, 4), MARKER_COLOR);
        assert_eq!(pixel(&image, 4, 3), MARKER_COLOR);
        assert_eq!(pixel(&image, 4, 5), MARKER_COLOR);
        assert_eq!(pixel(&image, 3, 3), [0, 0, 0]);
        Ok(())
    }

    #[test]
    fn markers_outside_are_skipped() -> Result<(), ImageError> {
        let raster = Image::new(ImageSize { width: 4, height: 4 }, vec![0.0; 16], CpuAllocator)?;
        let mut image = to_rgb(&raster)?;
        draw_keypoints(
            &mut image,
            &[
                Keypoint {
                    name: "far".to_string(),
                    x: 40.0,
                    y: -3.0,
                },
                Keypoint {
                    name: "corner".to_string(),
                    x: 0.0,
                    y: 0.0,
                },
            ],
        );

        assert_eq!(pixel(&image, 0, 0), MARKER_COLOR);
        assert_eq!(pixel(&image, 1, 0), MARKER_COLOR);
        assert_eq!(pixel(&image, 3, 3), [0, 0, 0]);
        Ok(())
    }
}
