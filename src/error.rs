use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series {} has no data sequence", series_label(.series_index))]
    MissingData { series_index: Option<usize> },

    #[error("series #{series_index} is malformed: {reason}")]
    InvalidSeries { series_index: usize, reason: String },

    #[error("invalid container dimensions: width={width}, height={height}")]
    InvalidDimension { width: f64, height: f64 },

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    /// Attaches the position of the offending series to a `MissingData` error.
    #[must_use]
    pub fn for_series(self, index: usize) -> Self {
        match self {
            Self::MissingData { .. } => Self::MissingData {
                series_index: Some(index),
            },
            other => other,
        }
    }
}

fn series_label(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!("#{index}"),
        None => "<unindexed>".to_owned(),
    }
}
