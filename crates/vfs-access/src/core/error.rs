//! Error types for access evaluation.
//!
//! Only construction can fail. Once an evaluator exists, every query is a
//! total boolean function.

use serde::{Deserialize, Serialize};

use super::identity::{Gid, Uid};

/// Errors raised while validating evaluator inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AccessError {
    /// Mode has bits outside the file type and permission masks.
    #[error("invalid mode: {0:#o}")]
    InvalidMode(u32),

    /// User or group id is the unspecified sentinel.
    #[error("invalid identity: uid {uid}, gid {gid}")]
    InvalidIdentity {
        /// Acting user id
        uid: Uid,
        /// Acting group id
        gid: Gid,
    },
}

impl AccessError {
    /// Check if this is a mode validation error.
    pub fn is_invalid_mode(&self) -> bool {
        matches!(self, AccessError::InvalidMode(_))
    }

    /// Check if this is an identity validation error.
    pub fn is_invalid_identity(&self) -> bool {
        matches!(self, AccessError::InvalidIdentity { .. })
    }
}
