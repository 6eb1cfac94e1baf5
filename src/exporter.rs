use crate::{dataset::KeypointDataset, error::ExportError, render::render_row};
use std::path::{Path, PathBuf};

/// Conventional location of the Kaggle training set.
pub const DEFAULT_DATASET_PATH: &str = "data/kaggle/facial-keypoints-detection/training.csv";

/// Conventional output directory of the rendered images.
pub const DEFAULT_OUTPUT_DIR: &str = "data/images";

/// A progress line is printed every this many images.
pub const PROGRESS_EVERY: usize = 10;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub dataset_path: PathBuf,
    pub output_dir: PathBuf,
    pub num_images: usize,
    pub include_keypoints: bool,
}

impl ExportOptions {
    /// Options using the conventional dataset and output locations.
    pub fn new(num_images: usize, include_keypoints: bool) -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            num_images,
            include_keypoints,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub requested: usize,
    pub exported: usize,
    pub clamped: bool,
    pub output_dir: PathBuf,
}

/// File name of the image rendered from the 1-based row `position`.
pub fn image_file_name(position: usize) -> String {
    format!("image_{position}.png")
}

/// Renders the first `num_images` dataset rows into PNG files.
///
/// Files already written stay on disk when a later row fails.
pub fn load_and_save_images(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    std::fs::create_dir_all(&options.output_dir)?;

    let dataset = KeypointDataset::open(&options.dataset_path)?;
    println!("Loaded dataset with {} entries", dataset.len());

    let requested = options.num_images;
    let clamped = requested > dataset.len();
    let count = if clamped {
        println!(
            "Warning: Requested {} images but dataset only has {}. Using all available images.",
            requested,
            dataset.len()
        );
        dataset.len()
    } else {
        requested
    };

    for index in 0..count {
        let position = index + 1;
        let row = match dataset.row(index) {
            Some(row) => row.map_err(|source| ExportError::Row {
                row: position,
                source,
            })?,
            None => break,
        };

        let image = render_row(&row, options.include_keypoints)?;
        let file_path = options.output_dir.join(image_file_name(position));
        kornia_io::png::write_image_png_rgb8(&file_path, &image)?;

        log::debug!(
            "Wrote {} with {} keypoints",
            file_path.display(),
            row.keypoints.len()
        );

        if position % PROGRESS_EVERY == 0 {
            println!("Processed {position}/{count} images");
        }
    }

    println!(
        "Successfully saved {} images to {}",
        count,
        options.output_dir.display()
    );

    Ok(ExportSummary {
        requested,
        exported: count,
        clamped,
        output_dir: options.output_dir.clone(),
    })
}

/// Lists the exported image files in `dir`, sorted by row position.
pub fn exported_images(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ExportError> {
    let mut images = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter_map(|path| row_position(&path).map(|position| (position, path)))
        .collect::<Vec<_>>();
    images.sort_by_key(|(position, _)| *position);
    Ok(images.into_iter().map(|(_, path)| path).collect())
}

fn row_position(path: &Path) -> Option<usize> {
    path.file_name()?
        .to_str()?
        .strip_prefix("image_")?
        .strip_suffix(".png")?
        .parse()
        .ok()
}
