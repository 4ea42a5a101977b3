//! Domain error types.

use crate::domain::instrument::SourceGroup;

/// Top-level error type for cotbias.
#[derive(Debug, thiserror::Error)]
pub enum CotError {
    #[error("unknown instrument '{id}'")]
    UnknownInstrument { id: String },

    #[error("{instrument} section not found in COT report")]
    SectionNotFound { instrument: String },

    #[error("could not find position data in {instrument} section")]
    PositionDataNotFound { instrument: String },

    #[error("failed to fetch {source_group} report: {reason}")]
    Fetch {
        source_group: SourceGroup,
        reason: String,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to render report: {reason}")]
    Render { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&CotError> for std::process::ExitCode {
    fn from(err: &CotError) -> Self {
        let code: u8 = match err {
            CotError::Io(_) => 1,
            CotError::ConfigParse { .. } | CotError::ConfigInvalid { .. } => 2,
            CotError::Fetch { .. } => 3,
            CotError::UnknownInstrument { .. } => 4,
            CotError::SectionNotFound { .. } | CotError::PositionDataNotFound { .. } => 5,
            CotError::Render { .. } => 6,
        };
        std::process::ExitCode::from(code)
    }
}
