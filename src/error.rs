//! Error Types
//!
//! HTTP-layer errors and the user-facing message for each operation.

use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a body that could not be decoded
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The server answered outside the 2xx range
    #[error("HTTP {status}")]
    Status { status: u16 },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// User-triggered operations that can surface an error in the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
    Demo,
}

impl Operation {
    /// Static message shown in the view when this operation fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch items",
            Operation::Create => "Failed to create item",
            Operation::Update => "Failed to update item",
            Operation::Delete => "Failed to delete item",
            Operation::Demo => "Error fetching data",
        }
    }
}
