use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordTimeError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("linear interpolation got invalid interval in script {script:?}: {start}=>{end}")]
    InvalidInterval { script: String, start: f64, end: f64 },
    #[error("script {script:?}: missing timecode anchor at word {word_index}")]
    MissingAnchor { script: String, word_index: usize },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl WordTimeError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// True for failures that mean the fill's own preconditions were broken,
    /// as opposed to a rejected request or unreadable input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInterval { .. } | Self::MissingAnchor { .. }
        )
    }
}
