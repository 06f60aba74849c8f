mod rename;
mod types;

pub use rename::{default_mapping, new_file_name, rename_images};
pub use types::{MappingEntry, RenameOutcome, RenameSummary};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
