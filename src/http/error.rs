//! API error body.
//!
//! The display plugin polls unconditionally and renders whatever comes
//! back, so the contract is a well-formed JSON object with an `error`
//! field rather than an HTTP error status.

use serde::{Deserialize, Serialize};

use crate::models::ZmanimError;

/// Error payload returned in place of the requested data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&ZmanimError> for ErrorBody {
    fn from(err: &ZmanimError) -> Self {
        Self::new(err.to_string())
    }
}
