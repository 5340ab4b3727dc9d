#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::path::PathBuf;

use args::Args;
use banana_config::Config;
use banana_imagegen::{GenerationRequest, Generator};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::load(&args.config)?;

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output.directory.clone())
        .or_else(default_output_dir)
        .ok_or_else(|| {
            anyhow::anyhow!("could not determine an output directory; pass --output-dir")
        })?;

    let request = GenerationRequest {
        provider: args.provider,
        prompt: args.prompt,
        resolution: args.resolution,
        aspect_ratio: args.aspect_ratio,
        input_image: args.input_image,
        search_web: args.search_web,
        debug_mode: args.debug || config.output.debug_mode,
    };

    tracing::info!(provider = %request.provider, "generating image");

    let generator = Generator::new(config, output_dir)?;
    let path = generator.generate(&request).await?;

    println!("{}", path.display());
    Ok(())
}

/// Platform-appropriate application data directory
fn default_output_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("banana"))
}
