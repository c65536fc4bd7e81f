//! Internal render errors.
//!
//! Nothing here crosses the public API: a failed render is reported on the
//! fallback channel (stderr) and the record is dropped. Logging is best
//! effort and must never fail the caller's control flow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("structured record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
