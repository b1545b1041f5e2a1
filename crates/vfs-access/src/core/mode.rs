//! Permission mode bits.
//!
//! Uses the conventional POSIX layout. Only the read and write bits of the
//! three permission classes take part in access decisions; execute, setuid,
//! setgid, sticky and file type bits are carried but ignored.

use core::fmt;
use serde::{Deserialize, Serialize};

use super::error::AccessError;

/// Owner: read.
pub const S_IRUSR: u32 = 0o0400;
/// Owner: write.
pub const S_IWUSR: u32 = 0o0200;
/// Owner: execute.
pub const S_IXUSR: u32 = 0o0100;
/// Group: read.
pub const S_IRGRP: u32 = 0o0040;
/// Group: write.
pub const S_IWGRP: u32 = 0o0020;
/// Group: execute.
pub const S_IXGRP: u32 = 0o0010;
/// World: read.
pub const S_IROTH: u32 = 0o0004;
/// World: write.
pub const S_IWOTH: u32 = 0o0002;
/// World: execute.
pub const S_IXOTH: u32 = 0o0001;

/// Mask of all permission bits, including setuid, setgid and sticky.
pub const S_IALLUGO: u32 = 0o7777;
/// Mask of the file type bits.
pub const S_IFMT: u32 = 0o170000;

/// Permission class of the acting identity relative to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionClass {
    /// Identity owns the node
    Owner,
    /// Identity's group owns the node
    Group,
    /// Everyone
    World,
}

impl PermissionClass {
    /// All classes, in evaluation order.
    pub const ALL: [PermissionClass; 3] = [Self::Owner, Self::Group, Self::World];
}

/// Kind of access being checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// Read access
    Read,
    /// Write access
    Write,
}

/// A node's permission mode.
///
/// Always holds permission bits only. Every constructor, deserialization
/// included, either masks or rejects anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Mode(u32);

impl Mode {
    /// Mode with no bits set.
    pub const EMPTY: Mode = Mode(0);

    /// Validate raw mode bits.
    ///
    /// File type bits are accepted and dropped. Anything outside the file
    /// type and permission masks is rejected.
    pub fn from_bits(bits: u32) -> Result<Self, AccessError> {
        if bits & !(S_IFMT | S_IALLUGO) != 0 {
            return Err(AccessError::InvalidMode(bits));
        }
        Ok(Self(bits & S_IALLUGO))
    }

    /// Keep only the permission bits.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & S_IALLUGO)
    }

    /// Raw permission bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check that every bit in `bits` is set.
    pub const fn contains(self, bits: u32) -> bool {
        self.0 & bits == bits
    }

    /// The bit that grants `access` to `class`.
    pub const fn class_bit(class: PermissionClass, access: Access) -> u32 {
        match (class, access) {
            (PermissionClass::Owner, Access::Read) => S_IRUSR,
            (PermissionClass::Owner, Access::Write) => S_IWUSR,
            (PermissionClass::Group, Access::Read) => S_IRGRP,
            (PermissionClass::Group, Access::Write) => S_IWGRP,
            (PermissionClass::World, Access::Read) => S_IROTH,
            (PermissionClass::World, Access::Write) => S_IWOTH,
        }
    }

    /// Check whether the mode grants `access` to `class`.
    pub const fn grants(self, class: PermissionClass, access: Access) -> bool {
        self.contains(Self::class_bit(class, access))
    }
}

impl TryFrom<u32> for Mode {
    type Error = AccessError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<Mode> for u32 {
    fn from(mode: Mode) -> Self {
        mode.0
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}
