use std::io;
use std::path::PathBuf;

/// Errors produced while converting a directory.
#[derive(Debug, thiserror::Error)]
pub enum ExtswapError {
    #[error("invalid suffix '{suffix}': {reason}")]
    InvalidSuffix { suffix: String, reason: &'static str },

    #[error("invalid conversion: source and target are both '{0}'")]
    SameSuffix(String),

    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot rename {} to {}: destination already exists (conflict)", from.display(), to.display())]
    DestinationExists { from: PathBuf, to: PathBuf },

    #[error("failed to rename {} to {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl ExtswapError {
    /// True for errors caused by bad user input rather than the filesystem.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidSuffix { .. } | Self::SameSuffix(_) | Self::Config { .. } => true,
            Self::ReadDir { source, .. } => source.kind() == io::ErrorKind::NotFound,
            Self::DestinationExists { .. } | Self::Rename { .. } => false,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DestinationExists { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtswapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_classification() {
        let err = ExtswapError::DestinationExists {
            from: PathBuf::from("x.gs"),
            to: PathBuf::from("x.js"),
        };
        assert!(err.is_conflict());
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_missing_directory_is_invalid_input() {
        let err = ExtswapError::ReadDir {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.is_invalid_input());

        let err = ExtswapError::ReadDir {
            path: PathBuf::from("/locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(!err.is_invalid_input());
    }
}
