//! Auditable entity base: identity plus lifecycle-tracking fields.
//!
//! Concrete entities embed an [`AuditedEntity`] and implement [`Auditable`] to
//! pick up the audit accessors and helpers. The fields are plain data: writing
//! one never changes another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identity + audit fields shared by every persisted domain entity.
///
/// `Id` only needs value semantics and equality; use `i32` for the integer
/// flavour (see [`IntAuditedEntity`]) or a newtype such as
/// [`EntityId`](crate::id::EntityId).
///
/// No entity-level equality is provided. Compare identifiers directly
/// (`a.id == b.id`) or use [`AuditedEntity::same_identity`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditedEntity<Id> {
    pub id: Id,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub date_deleted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
}

/// Integer-keyed variant.
pub type IntAuditedEntity = AuditedEntity<i32>;

fn default_active() -> bool {
    true
}

impl<Id> AuditedEntity<Id> {
    /// Create an active entity stamped with the current UTC time.
    pub fn new(id: Id) -> Self {
        Self::with_created_at(id, Utc::now())
    }

    /// Create an active entity with an explicit creation instant.
    ///
    /// Prefer this in tests and when rehydrating rows for determinism.
    pub fn with_created_at(id: Id, date_created: DateTime<Utc>) -> Self {
        tracing::trace!(%date_created, "audited entity constructed");
        Self {
            id,
            is_active: true,
            date_created,
            date_deleted: None,
            date_updated: None,
        }
    }

    /// Whether `other` carries an equal identifier (other fields ignored).
    pub fn same_identity(&self, other: &Self) -> bool
    where
        Id: PartialEq,
    {
        self.id == other.id
    }
}

impl<Id: Default> Default for AuditedEntity<Id> {
    fn default() -> Self {
        Self::new(Id::default())
    }
}

/// Embedding seam for entities that carry an [`AuditedEntity`].
///
/// Implementors only provide `audit`/`audit_mut`; everything else is derived,
/// including [`Entity`](crate::entity::Entity) when the identifier is hashable.
pub trait Auditable {
    type Id;

    fn audit(&self) -> &AuditedEntity<Self::Id>;

    fn audit_mut(&mut self) -> &mut AuditedEntity<Self::Id>;

    fn is_active(&self) -> bool {
        self.audit().is_active
    }

    fn date_created(&self) -> DateTime<Utc> {
        self.audit().date_created
    }

    fn date_deleted(&self) -> Option<DateTime<Utc>> {
        self.audit().date_deleted
    }

    fn date_updated(&self) -> Option<DateTime<Utc>> {
        self.audit().date_updated
    }

    fn is_deleted(&self) -> bool {
        self.audit().date_deleted.is_some()
    }

    /// Latest of the creation, update and deletion timestamps.
    fn last_modified(&self) -> DateTime<Utc> {
        let audit = self.audit();
        [audit.date_updated, audit.date_deleted]
            .into_iter()
            .flatten()
            .fold(audit.date_created, core::cmp::max)
    }

    /// Record a modification at `at`.
    fn touch(&mut self, at: DateTime<Utc>) {
        self.audit_mut().date_updated = Some(at);
    }

    /// Deactivate and stamp the deletion time.
    fn soft_delete(&mut self, at: DateTime<Utc>) {
        let audit = self.audit_mut();
        audit.is_active = false;
        audit.date_deleted = Some(at);
        tracing::debug!(deleted_at = %at, "entity soft-deleted");
    }

    /// Undo [`soft_delete`](Auditable::soft_delete).
    fn restore(&mut self) {
        let audit = self.audit_mut();
        audit.is_active = true;
        audit.date_deleted = None;
        tracing::debug!("entity restored");
    }

    /// Check that update/deletion stamps do not predate creation.
    ///
    /// Never run implicitly; callers decide when the ordering must hold.
    fn check_chronology(&self) -> DomainResult<()> {
        let audit = self.audit();
        if let Some(updated) = audit.date_updated
            && updated < audit.date_created
        {
            return Err(DomainError::invariant(format!(
                "dateUpdated ({updated}) precedes dateCreated ({})",
                audit.date_created
            )));
        }
        if let Some(deleted) = audit.date_deleted
            && deleted < audit.date_created
        {
            return Err(DomainError::invariant(format!(
                "dateDeleted ({deleted}) precedes dateCreated ({})",
                audit.date_created
            )));
        }
        Ok(())
    }
}

impl<Id> Auditable for AuditedEntity<Id> {
    type Id = Id;

    fn audit(&self) -> &AuditedEntity<Id> {
        self
    }

    fn audit_mut(&mut self) -> &mut AuditedEntity<Id> {
        self
    }
}
