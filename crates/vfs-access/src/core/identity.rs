//! Acting identity.

use serde::{Deserialize, Serialize};

use super::error::AccessError;

/// A user identifier.
pub type Uid = u32;
/// A group identifier.
pub type Gid = u32;

/// The root user ID.
pub const ROOT_UID: Uid = 0;
/// The root group ID.
pub const ROOT_GID: Gid = 0;

/// Id value meaning "unspecified" (`(uid_t)-1`).
pub const UNSPECIFIED_ID: u32 = u32::MAX;

/// The user and group on whose behalf a check is performed.
///
/// Callers resolve this from their environment (effective uid/gid, a
/// session, an IPC peer) and pass it in. It is never re-read afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Effective user ID
    pub uid: Uid,
    /// Effective group ID
    pub gid: Gid,
}

impl Identity {
    /// Create an identity.
    pub const fn new(uid: Uid, gid: Gid) -> Self {
        Self { uid, gid }
    }

    /// The root identity.
    pub const fn root() -> Self {
        Self::new(ROOT_UID, ROOT_GID)
    }

    /// Reject the unspecified sentinel for either id.
    pub fn validate(&self) -> Result<(), AccessError> {
        if self.uid == UNSPECIFIED_ID || self.gid == UNSPECIFIED_ID {
            return Err(AccessError::InvalidIdentity {
                uid: self.uid,
                gid: self.gid,
            });
        }
        Ok(())
    }
}

impl From<(Uid, Gid)> for Identity {
    fn from((uid, gid): (Uid, Gid)) -> Self {
        Self::new(uid, gid)
    }
}
