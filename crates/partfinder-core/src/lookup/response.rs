//! Map a completed HTTP exchange (status + body) to a lookup outcome.

use super::{LookupError, VehicleRecord};

/// 2xx decodes the body, 404 is `NotFound`, any other status is `FetchFailed`.
pub(crate) fn classify_response(status: u32, body: &[u8]) -> Result<VehicleRecord, LookupError> {
    match status {
        200..=299 => Ok(serde_json::from_slice(body)?),
        404 => Err(LookupError::NotFound),
        _ => Err(LookupError::FetchFailed { status }),
    }
}
