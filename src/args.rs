use std::path::PathBuf;

pub struct Args {
    pub emoji: Option<String>,
    pub resources_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: Option<PathBuf>,
    pub tolerance: Option<u32>,
}
