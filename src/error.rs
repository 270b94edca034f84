use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for icon generation.
#[derive(Debug)]
pub enum IconError {
    /// The source image could not be opened or decoded.
    SourceLoad {
        path: PathBuf,
        source: image::ImageError,
    },
    /// An output directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },
    /// A generated image could not be encoded or written.
    SaveImage {
        path: PathBuf,
        source: image::ImageError,
    },
    /// An already-written icon could not be copied to its variant name.
    CopyImage {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    /// A static resource file could not be written.
    WriteFile { path: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::SourceLoad { path, source } => {
                write!(f, "failed to open source image '{}': {}", path.display(), source)
            }
            IconError::CreateDir { path, source } => {
                write!(f, "failed to create directory '{}': {}", path.display(), source)
            }
            IconError::SaveImage { path, source } => {
                write!(f, "failed to save '{}': {}", path.display(), source)
            }
            IconError::CopyImage { from, to, source } => {
                write!(
                    f,
                    "failed to copy '{}' to '{}': {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            IconError::WriteFile { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::SourceLoad { source, .. } | IconError::SaveImage { source, .. } => {
                Some(source)
            }
            IconError::CreateDir { source, .. }
            | IconError::CopyImage { source, .. }
            | IconError::WriteFile { source, .. } => Some(source),
        }
    }
}
