//! "Keep the base value unless the request supplies one" combinators.
//!
//! The merge engine treats an absent or empty request value as "no override". What
//! counts as empty depends on the type, so that decision lives in [`Presence`].

use uuid::Uuid;

use crate::id::{OrderId, OrganizationId, PoLineId};

/// Whether a value counts as supplied when used as an override.
pub trait Presence {
    fn is_present(&self) -> bool;
}

/// Strings are present when they contain something other than whitespace.
impl Presence for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

/// Lists are present when non-empty.
impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! always_present {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Presence for $t {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )+
    };
}

always_present!(bool, i32, u32, i64, f64, Uuid, OrderId, PoLineId, OrganizationId);

/// Overlay an optional override onto an optional base value.
pub trait OverlayExt<T> {
    /// `incoming` if it is present, otherwise `self`.
    fn overlay(self, incoming: Option<T>) -> Option<T>;
}

impl<T: Presence> OverlayExt<T> for Option<T> {
    fn overlay(self, incoming: Option<T>) -> Option<T> {
        incoming.filter(Presence::is_present).or(self)
    }
}

/// Non-optional counterpart of [`OverlayExt::overlay`] (used for lists).
pub fn replace_if_present<T: Presence>(base: T, incoming: T) -> T {
    if incoming.is_present() { incoming } else { base }
}
