//! Read-only node view consumed by the evaluator.

use serde::{Deserialize, Serialize};

use super::identity::{Gid, Uid};
use super::mode::Mode;

/// Ownership and mode of a filesystem node.
///
/// Implemented by whatever type stores node attributes. Values are taken
/// as already resolved; the evaluator performs no I/O through this trait.
pub trait Node {
    /// Permission mode.
    fn mode(&self) -> Mode;

    /// Owning user ID.
    fn user(&self) -> Uid;

    /// Owning group ID.
    fn group(&self) -> Gid;
}

/// Plain snapshot of a node's access attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Permission mode
    pub mode: Mode,
    /// Owning user ID
    pub user: Uid,
    /// Owning group ID
    pub group: Gid,
}

impl NodeAttributes {
    /// Create a snapshot. File type and other non-permission bits in
    /// `mode` are dropped.
    pub fn new(mode: u32, user: Uid, group: Gid) -> Self {
        Self {
            mode: Mode::from_bits_truncate(mode),
            user,
            group,
        }
    }

    /// Capture the attributes of any node.
    pub fn snapshot<N: Node + ?Sized>(node: &N) -> Self {
        Self {
            mode: node.mode(),
            user: node.user(),
            group: node.group(),
        }
    }
}

impl Node for NodeAttributes {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn user(&self) -> Uid {
        self.user
    }

    fn group(&self) -> Gid {
        self.group
    }
}
