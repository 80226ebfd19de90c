//! Wire shape returned by the plate information service.

use serde::{Deserialize, Serialize};

/// Vehicle metadata for one plate, exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub vehicle_id: String,
    pub brand: String,
    pub model: String,
    /// Free-text engine description (e.g. "1.5 DOHC").
    pub engine: String,
    pub year: i32,
    /// `null` on the wire becomes `None`.
    pub notes: Option<String>,
    pub vehicle_type: String,
}
