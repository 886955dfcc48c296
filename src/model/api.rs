use serde::{Deserialize, Serialize};

/// Fixed response envelope carrying a success flag and a human-readable message.
///
/// Every non-payload response (and every error response) uses this shape; no
/// internal error detail is ever exposed through it.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

/// Response envelope for reads that carry a payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataDto<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}
