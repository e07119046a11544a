use std::path::{Path, PathBuf};

/// An error type for file utility functions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file was not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    /// The path was expected to be a file, but it is a directory.
    #[error("Expected {0} to be a file, but it is a directory.")]
    ExpectedFile(PathBuf),
}

/// Check if a file exists at the given path, and is actually a file.
pub fn check_file_exists(file_path: &Path) -> Result<(), Error> {
    if !file_path.exists() {
        return Err(Error::FileNotFound(file_path.to_path_buf()));
    }
    if !file_path.is_file() {
        return Err(Error::ExpectedFile(file_path.to_path_buf()));
    }
    Ok(())
}
