#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The header value was present but does not conform to the
    /// structured-field grammar expected for that field.
    #[error("malformed structured field: {reason}")]
    MalformedField { reason: String },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedField {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
