//! Entity trait: identity + continuity across state changes.

use crate::audit::Auditable;

/// Identity of an entity, independent of its audit state.
///
/// Every [`Auditable`] type whose identifier is hashable gets this for free:
/// the identifier is the one stored in its embedded audit base.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

impl<T> Entity for T
where
    T: Auditable,
    T::Id: Clone + Eq + core::hash::Hash + core::fmt::Debug,
{
    type Id = <T as Auditable>::Id;

    fn id(&self) -> &Self::Id {
        &self.audit().id
    }
}
