//! VFS Node Access Evaluation
//!
//! Decides whether an acting identity may read or write a single VFS node,
//! using POSIX owner/group/world permission bits:
//!
//! - **Core**: `Mode`, `Identity`, the `Node` view and `AccessError`
//! - **Service**: `PermissionEvaluator` and its read/write queries
//!
//! # Design Principles
//!
//! 1. **Injected identity**: the caller resolves uid/gid; nothing here reads
//!    process state
//! 2. **Additive classes**: owner, group and world are OR-ed, not selected
//! 3. **Total queries**: validation happens at construction, queries never fail
//!
//! # Example
//!
//! ```
//! use vfs_access::{Identity, NodeAttributes, PermissionEvaluator};
//!
//! let node = NodeAttributes::new(0o644, 1000, 1000);
//! let ev = PermissionEvaluator::new(&node, Identity::new(999, 1000));
//! assert!(ev.is_readable());
//! assert!(!ev.is_writable());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod core;
pub mod service;

pub use crate::core::{Access, AccessError, Gid, Identity, Mode, Node, NodeAttributes, PermissionClass, Uid};
pub use crate::service::PermissionEvaluator;
