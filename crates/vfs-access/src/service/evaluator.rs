//! Read/write access decisions for a single node and identity.
//!
//! The owner, group and world classes are independent and additive: access
//! is granted when ANY applicable class grants it. An owner whose owner bits
//! deny write can still write through a group or world bit.

use crate::core::{Access, AccessError, Identity, Node, PermissionClass};

/// Permission evaluator bound to one node and one acting identity.
///
/// Holds no state beyond its inputs. Every query recomputes from the node's
/// current view and the identity captured at construction.
#[derive(Debug)]
pub struct PermissionEvaluator<'a, N: Node + ?Sized> {
    node: &'a N,
    identity: Identity,
}

impl<N: Node + ?Sized> Clone for PermissionEvaluator<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: Node + ?Sized> Copy for PermissionEvaluator<'_, N> {}

impl<'a, N: Node + ?Sized> PermissionEvaluator<'a, N> {
    /// Bind an evaluator to a node and identity.
    pub fn new(node: &'a N, identity: Identity) -> Self {
        Self { node, identity }
    }

    /// Bind an evaluator after validating the identity.
    ///
    /// Node modes need no check here: a `Mode` can only be built through
    /// its masking or validating constructors.
    pub fn try_new(node: &'a N, identity: Identity) -> Result<Self, AccessError> {
        if let Err(e) = identity.validate() {
            log::debug!("rejecting evaluator identity: {}", e);
            return Err(e);
        }
        Ok(Self::new(node, identity))
    }

    /// The node being evaluated.
    pub fn node(&self) -> &'a N {
        self.node
    }

    /// The acting identity.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    // ========== Ownership ==========

    /// Check if the acting user owns the node.
    pub fn is_owning_user(&self) -> bool {
        self.identity.uid == self.node.user()
    }

    /// Check if the acting group owns the node.
    pub fn is_owning_group(&self) -> bool {
        self.identity.gid == self.node.group()
    }

    /// Check if a class's bits apply to the acting identity.
    pub fn class_applies(&self, class: PermissionClass) -> bool {
        match class {
            PermissionClass::Owner => self.is_owning_user(),
            PermissionClass::Group => self.is_owning_group(),
            PermissionClass::World => true,
        }
    }

    /// Check if `class` applies and its mode bit grants `access`.
    pub fn class_grants(&self, class: PermissionClass, access: Access) -> bool {
        self.class_applies(class) && self.node.mode().grants(class, access)
    }

    // ========== Class Checks ==========

    /// Owner read: acting user owns the node and `S_IRUSR` is set.
    pub fn user_can_read(&self) -> bool {
        self.class_grants(PermissionClass::Owner, Access::Read)
    }

    /// Owner write: acting user owns the node and `S_IWUSR` is set.
    pub fn user_can_write(&self) -> bool {
        self.class_grants(PermissionClass::Owner, Access::Write)
    }

    /// Group read: acting group owns the node and `S_IRGRP` is set.
    pub fn group_can_read(&self) -> bool {
        self.class_grants(PermissionClass::Group, Access::Read)
    }

    /// Group write: acting group owns the node and `S_IWGRP` is set.
    pub fn group_can_write(&self) -> bool {
        self.class_grants(PermissionClass::Group, Access::Write)
    }

    /// World read: `S_IROTH` is set.
    pub fn world_can_read(&self) -> bool {
        self.class_grants(PermissionClass::World, Access::Read)
    }

    /// World write: `S_IWOTH` is set.
    pub fn world_can_write(&self) -> bool {
        self.class_grants(PermissionClass::World, Access::Write)
    }

    // ========== Decisions ==========

    /// True if any class grants `access`; classes are tried owner, group,
    /// world.
    pub fn permits(&self, access: Access) -> bool {
        let granted = PermissionClass::ALL
            .into_iter()
            .find(|&class| self.class_grants(class, access));

        log::trace!(
            "access {:?} for uid {} gid {} on node {}:{} mode {}: {:?}",
            access,
            self.identity.uid,
            self.identity.gid,
            self.node.user(),
            self.node.group(),
            self.node.mode(),
            granted
        );

        granted.is_some()
    }

    /// Readable by user, group or world.
    pub fn is_readable(&self) -> bool {
        self.permits(Access::Read)
    }

    /// Writable by user, group or world.
    pub fn is_writable(&self) -> bool {
        self.permits(Access::Write)
    }

    /// Classes that grant `access`, in evaluation order.
    pub fn granting_classes(&self, access: Access) -> impl Iterator<Item = PermissionClass> + '_ {
        PermissionClass::ALL
            .into_iter()
            .filter(move |&class| self.class_grants(class, access))
    }
}
