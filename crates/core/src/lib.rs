//! `mosaic-core`: building blocks shared by the order model and the merge engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod label;
pub mod overlay;

pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, OrderId, OrganizationId, PoLineId, TenantId, UuidV7Generator};
pub use label::CodeTable;
pub use overlay::{OverlayExt, Presence, replace_if_present};
