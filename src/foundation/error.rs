use std::path::PathBuf;

/// Convenience result type used across imgheader.
pub type ImgHeaderResult<T> = Result<T, ImgHeaderError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ImgHeaderError {
    /// The file-matching pattern is not a valid regular expression.
    #[error("invalid pattern: \"{pattern}\": {source}")]
    InvalidPattern {
        /// Pattern text as given on the command line.
        pattern: String,
        /// Underlying compile error.
        source: regex::Error,
    },

    /// A walk root that does not exist or is not a directory.
    #[error("not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    /// Filesystem access failed (listing a directory, opening a file).
    #[error("io error: '{}': {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Image bytes could not be decoded.
    #[error("decode error: '{}': {source}", path.display())]
    Decode {
        /// Image being decoded.
        path: PathBuf,
        /// Underlying codec error.
        source: image::ImageError,
    },

    /// The encoder accepted the format but failed to write the image.
    #[error("encode error: '{}': {source}", path.display())]
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Underlying codec error.
        source: image::ImageError,
    },

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImgHeaderError {
    /// Build a [`ImgHeaderError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`ImgHeaderError::Decode`] value.
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Build a [`ImgHeaderError::Encode`] value.
    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
