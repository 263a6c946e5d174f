//! Error types for the chart renderer.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("no lines to draw")] NoLines,
    #[error("line {index} has no data points")] EmptyLine { index: usize },
    #[error("invalid axis: {0}")] InvalidAxis(String),
    #[error("image encode failed: {0}")] Encode(String),
}
