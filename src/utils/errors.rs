use std::io;
use thiserror::Error;

/// Failures raised while analysing a transfer function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DynamicsError {
    #[error("Degenerate dynamics: {0}")]
    Degenerate(String),

    #[error("Root finding did not converge: {0}")]
    NonConvergence(String),

    #[error("Invalid transfer function: {0}")]
    InvalidTransferFunction(String),
}

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    #[error("Dynamics error: {0}")]
    Dynamics(#[from] DynamicsError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
