use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No emoji name was given")]
    MissingArgument,

    #[error("Could not find emoji '{name}' in {}", .resources_dir.display())]
    InputNotFound { name: String, resources_dir: PathBuf },

    #[error("Could not determine dominant color: the image has no visible pixels")]
    EmptySampleSet,

    #[error("Could not find valid square region in {width}x{height} image")]
    NoValidSquareRegion { width: u32, height: u32 },

    #[error("Invalid hex color: {value}")]
    InvalidColor { value: String },

    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfig { parameter: String, value: String },
}
