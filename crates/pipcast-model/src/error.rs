//! Error types for the pipcast model.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("tradition series did not converge within {steps} steps")] DidNotConverge { steps: usize },
}
