use std::path::PathBuf;

use anyhow::Result;

pub mod file;

/// Turns an emoji name given on the command line into a readable image path.
pub trait EmojiLocator {
    fn locate(&self, name: &str) -> Result<PathBuf>;
}
