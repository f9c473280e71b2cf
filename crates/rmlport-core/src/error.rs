pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input directory does not exist: {path}")]
    MissingInputDir { path: String },

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("output path is not a directory: {path}")]
    NotADirectory { path: String },

    #[error("failed to list directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete file {path}: {source}")]
    RemoveFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Configuration errors abort a run before any document is touched.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingInputDir { .. } | Error::CreateDir { .. } | Error::NotADirectory { .. }
        )
    }
}
