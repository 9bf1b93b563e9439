//! Unique identifiers for elements and tags.
//!
//! The parser treats identifiers as an opaque capability: it asks an
//! [`IdSource`] for a fresh [`Id`] once per produced element and once per
//! produced tag, and otherwise never inspects them. Uniqueness within one
//! parse result is the only requirement, so any collision-resistant scheme
//! works; the default is UUID v4.
//!
//! Injecting [`SequentialIds`] makes parse results fully deterministic,
//! which is what the test fixtures use.

use std::fmt;

use uuid::Uuid;

/// Opaque identifier attached to every element and tag.
///
/// Comparable for equality and hashable; the parser places no ordering or
/// format requirement on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Uuid);

impl Id {
    /// Build an identifier from a raw 128-bit value.
    ///
    /// Intended for deterministic fixtures; see [`SequentialIds`].
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// The raw 128-bit value of this identifier.
    #[inline]
    pub const fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Supplier of fresh identifiers, called once per produced element or tag.
pub trait IdSource {
    /// Produce the next identifier. Must not repeat within one parse.
    fn fresh(&mut self) -> Id;
}

/// Default identifier source: random UUID v4 per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    #[inline]
    fn fresh(&mut self) -> Id {
        Id(Uuid::new_v4())
    }
}

/// Deterministic identifier source counting up from 1.
///
/// The n-th identifier handed out equals `Id::from_u128(n)`, so fixtures
/// can assert exact ids.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Create a source whose first identifier is `Id::from_u128(1)`.
    #[inline]
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    #[inline]
    fn fresh(&mut self) -> Id {
        let id = Id::from_u128(self.next);
        self.next += 1;
        id
    }
}
