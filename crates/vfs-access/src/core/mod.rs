//! Core access types: mode bits, identity, node view, errors

mod error;
mod identity;
mod mode;
mod node;

pub use error::AccessError;
pub use identity::{Gid, Identity, Uid, ROOT_GID, ROOT_UID, UNSPECIFIED_ID};
pub use mode::{
    Access, Mode, PermissionClass, S_IALLUGO, S_IFMT, S_IRGRP, S_IROTH, S_IRUSR, S_IWGRP, S_IWOTH,
    S_IWUSR, S_IXGRP, S_IXOTH, S_IXUSR,
};
pub use node::{Node, NodeAttributes};
