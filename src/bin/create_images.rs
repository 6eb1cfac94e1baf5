use argh::FromArgs;
use facial_features::{ExportError, ExportOptions, load_and_save_images};
use std::path::Path;

#[derive(FromArgs)]
/// Extract facial images from the Kaggle facial keypoints dataset.
struct CreateImagesArgs {
    /// number of images to extract (also accepted as --num_images)
    #[argh(option)]
    num_images: usize,

    /// include facial keypoints in the images
    #[argh(switch)]
    keypoints: bool,
}

// argh only accepts dashed long names
fn normalize_flag(arg: String) -> String {
    if arg.starts_with("--") && arg.contains('_') {
        arg.replace('_', "-")
    } else {
        arg
    }
}

fn parse_args() -> CreateImagesArgs {
    let args = std::env::args().map(normalize_flag).collect::<Vec<_>>();
    let command = args
        .first()
        .and_then(|cmd| Path::new(cmd).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("create_images");
    let rest = args.iter().skip(1).map(String::as_str).collect::<Vec<_>>();

    CreateImagesArgs::from_args(&[command], &rest).unwrap_or_else(|early_exit| {
        std::process::exit(match early_exit.status {
            Ok(()) => {
                println!("{}", early_exit.output);
                0
            }
            Err(()) => {
                eprintln!(
                    "{}\nRun {} --help for more information.",
                    early_exit.output, command
                );
                1
            }
        })
    })
}

fn main() {
    env_logger::init();
    let args = parse_args();

    if args.num_images == 0 {
        println!("Error: --num_images must be a positive integer");
        return;
    }

    let options = ExportOptions::new(args.num_images, args.keypoints);

    match load_and_save_images(&options) {
        Ok(summary) => log::debug!("Export finished: {summary:?}"),
        Err(ExportError::DatasetNotFound(path)) => {
            log::debug!("Dataset not found at {}", path.display());
            println!("Error: Dataset file not found. Make sure the path is correct.");
        }
        Err(e) => println!("Error: {e}"),
    }
}
