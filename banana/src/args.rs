use std::path::PathBuf;

use banana_imagegen::Resolution;
use clap::Parser;

/// Banana image generation
#[derive(Debug, Parser)]
#[command(name = "banana", about = "Generate an image with a configured AI provider")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "banana.toml", env = "BANANA_CONFIG")]
    pub config: PathBuf,

    /// Name of the configured provider to use
    #[arg(short, long)]
    pub provider: String,

    /// Text description of the desired image
    pub prompt: String,

    /// Output resolution tier (1K, 2K, or 4K)
    #[arg(long, default_value = "1K")]
    pub resolution: Resolution,

    /// Aspect ratio label, e.g. 16:9
    #[arg(long, default_value = "1:1")]
    pub aspect_ratio: String,

    /// Reference image fed to the model
    #[arg(long)]
    pub input_image: Option<PathBuf>,

    /// Let the provider consult web search while generating
    #[arg(long)]
    pub search_web: bool,

    /// Echo and persist the outgoing payload
    #[arg(long)]
    pub debug: bool,

    /// Override the output directory
    #[arg(long, env = "BANANA_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}
