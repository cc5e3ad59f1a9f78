use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::Error;
use crate::resource::emoji::EmojiLocator;

pub const DEFAULT_CATEGORIES: [&str; 2] = ["Happy", "Sad"];

/// Looks for `<resources_dir>/<category>/<name>[.png]`, categories in order.
pub struct FileSystemEmojiLocator {
    pub resources_dir: PathBuf,
    pub categories: Vec<String>,
}

impl FileSystemEmojiLocator {
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: resources_dir.into(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn candidates(&self, name: &str) -> impl Iterator<Item = PathBuf> + '_ {
        let name = name.to_string();
        self.categories.iter().flat_map(move |category| {
            let path = self.resources_dir.join(category).join(&name);
            let with_extension = append_png(&path);
            [path, with_extension]
        })
    }
}

impl EmojiLocator for FileSystemEmojiLocator {
    fn locate(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(Error::MissingArgument.into());
        }

        for candidate in self.candidates(name) {
            log::debug!("Checking emoji candidate: {}", candidate.display());
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        Err(Error::InputNotFound {
            name: name.to_string(),
            resources_dir: self.resources_dir.clone(),
        }
        .into())
    }
}

fn append_png(path: &Path) -> PathBuf {
    let mut appended = path.as_os_str().to_owned();
    appended.push(".png");
    PathBuf::from(appended)
}
