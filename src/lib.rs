use anyhow::{Context, Result};

use crate::args::Args;
use crate::config::IconConfig;
use crate::error::Error;
use crate::icon::export::IconPaths;
use crate::resource::emoji::file::FileSystemEmojiLocator;
use crate::resource::emoji::EmojiLocator;

pub mod args;
pub mod config;
pub mod data;
pub mod error;
pub mod icon;
pub mod resource;

pub fn run(args: Args) -> Result<IconPaths> {
    env_logger::init();

    let emoji = args.emoji.ok_or(Error::MissingArgument)?;

    let mut config = match &args.config {
        Some(path) => IconConfig::from_json_file(path)?,
        None => IconConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    config.validate()?;

    let locator = FileSystemEmojiLocator::new(args.resources_dir);
    let input_path = locator.locate(&emoji)?;
    log::info!("Using emoji: {}", input_path.display());

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Unable to create output directory: {}",
            args.output_dir.display()
        )
    })?;

    let paths = icon::process_image(&input_path, &args.output_dir, &config)?;

    println!("Square icon saved to: {}", paths.square.display());
    println!("Rounded icon saved to: {}", paths.rounded.display());

    Ok(paths)
}
