//! Error types.

/// Top-level error type for seqburst.
#[derive(Debug, thiserror::Error)]
pub enum SeqburstError {
    #[error("csv error in {file}: {reason}")]
    Csv { file: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no valid records in {source_name}")]
    EmptyDataset { source_name: String },

    #[error("no node at path '{path}'")]
    UnknownPath { path: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SeqburstError {
    pub fn config_invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        SeqburstError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&SeqburstError> for std::process::ExitCode {
    fn from(err: &SeqburstError) -> Self {
        let code: u8 = match err {
            SeqburstError::Io(_) => 1,
            SeqburstError::ConfigParse { .. } | SeqburstError::ConfigInvalid { .. } => 2,
            SeqburstError::Csv { .. } | SeqburstError::EmptyDataset { .. } => 3,
            SeqburstError::UnknownPath { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
