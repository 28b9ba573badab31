//! `auditkit-core` — identity and audit fields shared by domain entities.
//!
//! This crate contains **pure domain** primitives (no persistence concerns).
//! Entities embed an [`AuditedEntity`] and implement [`Auditable`].

pub mod audit;
pub mod entity;
pub mod error;
pub mod id;

pub use audit::{Auditable, AuditedEntity, IntAuditedEntity};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
