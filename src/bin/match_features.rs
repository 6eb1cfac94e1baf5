use argh::FromArgs;
use facial_features::{ChatCompletionsClient, EndpointConfig, format_match, match_image};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Analyze facial features in an image based on descriptions.
struct MatchArgs {
    /// path to text file containing facial feature descriptions
    #[argh(option)]
    descriptions: PathBuf,

    /// path to the image to analyze
    #[argh(option)]
    image: PathBuf,
}

fn main() {
    env_logger::init();
    let args: MatchArgs = argh::from_env();

    match match_image(
        &args.descriptions,
        &args.image,
        EndpointConfig::from_env,
        ChatCompletionsClient::new,
    ) {
        Ok(text) => println!("{}", format_match(&text)),
        Err(e) => {
            log::debug!("Matching failed: {e:?}");
            println!("Error: {e}");
        }
    }
}
