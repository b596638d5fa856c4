use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The record source is missing, unreadable or malformed.
    #[error("failed to load records from `{source_name}`: {reason}")]
    DataLoad { source_name: String, reason: String },
}

impl ChartError {
    pub(crate) fn data_load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_data_load(&self) -> bool {
        matches!(self, Self::DataLoad { .. })
    }
}
