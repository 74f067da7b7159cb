//! Deterministic hash-based symbol identity.
//!
//! A [`SymbolId`] is a 64-bit xxh64 hash of a symbol's qualified name. Oracles
//! and registries agree on identity without sharing a symbol table: the macro
//! registry can be populated with `SymbolId::from_name("Array.size")` before
//! the type oracle ever resolves a node.

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every symbol hash.
const SYMBOL_DOMAIN: u64 = 0x6c8e9cf570932bd5;

/// A deterministic 64-bit hash identifying a declared symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SymbolId(pub u64);

impl SymbolId {
    /// Create a symbol id from a qualified name such as `Array.size`.
    ///
    /// ```
    /// use tsluau_core::SymbolId;
    ///
    /// assert_eq!(SymbolId::from_name("Map.get"), SymbolId::from_name("Map.get"));
    /// assert_ne!(SymbolId::from_name("Map.get"), SymbolId::from_name("Map.set"));
    /// ```
    #[inline]
    pub fn from_name(name: &str) -> Self {
        SymbolId(SYMBOL_DOMAIN ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a member symbol id from an owner name and a member name.
    #[inline]
    pub fn from_member(owner: &str, member: &str) -> Self {
        let owner_hash = xxh64(owner.as_bytes(), 0);
        SymbolId(SYMBOL_DOMAIN ^ xxh64(member.as_bytes(), owner_hash))
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_deterministic() {
        assert_eq!(SymbolId::from_name("String.size"), SymbolId::from_name("String.size"));
    }

    #[test]
    fn member_differs_from_flat_name() {
        assert_ne!(
            SymbolId::from_member("String", "size"),
            SymbolId::from_member("Array", "size")
        );
    }

    #[test]
    fn debug_is_hex() {
        let id = SymbolId(0xff);
        assert_eq!(format!("{:?}", id), "SymbolId(0x00000000000000ff)");
    }
}
