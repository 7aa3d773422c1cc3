use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid grid shape: rows={rows}, cols={cols}")]
    InvalidGrid { rows: usize, cols: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown projection `{0}`")]
    UnknownProjection(String),
}
