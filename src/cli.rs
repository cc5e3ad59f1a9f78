use std::path::PathBuf;

use clap::Parser;

/// Generates square and rounded app icons from an emoji image
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emoji file name, with or without the .png extension (e.g. reshot-icon-cat-BZV4EQRNPJ)
    pub emoji: Option<String>,

    /// Directory holding the Happy and Sad emoji folders
    #[arg(short, long, default_value = "Assets/Resources/Colorcrush/Emoji")]
    pub resources_dir: PathBuf,

    /// Directory the generated icons are written to
    #[arg(short, long, default_value = "Assets")]
    pub output_dir: PathBuf,

    /// JSON file with icon generation settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Color distance within which the target color is replaced
    #[arg(short, long)]
    pub tolerance: Option<u32>,
}

impl From<Cli> for emoji_app_icon::args::Args {
    fn from(value: Cli) -> Self {
        emoji_app_icon::args::Args {
            emoji: value.emoji,
            resources_dir: value.resources_dir,
            output_dir: value.output_dir,
            config: value.config,
            tolerance: value.tolerance,
        }
    }
}
