//! Static type information handed to the lowering engine by the type oracle.
//!
//! The engine never computes types itself. It only asks questions of the
//! resolved [`Type`]: is it `any`, is it exactly a string, which symbol
//! declared it.

use bitflags::bitflags;

use crate::SymbolId;

bitflags! {
    /// Classification flags of a resolved static type.
    ///
    /// A plain type sets exactly one primitive flag; unions carry `UNION` and
    /// list their constituents in [`Type::members`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        /// The universal `any` type.
        const ANY = 1 << 0;
        /// The `unknown` type.
        const UNKNOWN = 1 << 1;
        /// `string`
        const STRING = 1 << 2;
        /// A string literal type such as `"north"`.
        const STRING_LITERAL = 1 << 3;
        /// `number`
        const NUMBER = 1 << 4;
        /// A numeric literal type such as `3`.
        const NUMBER_LITERAL = 1 << 5;
        /// `boolean` or a boolean literal type.
        const BOOLEAN = 1 << 6;
        /// `undefined` / `void`
        const UNDEFINED = 1 << 7;
        /// Object, class, interface or array types.
        const OBJECT = 1 << 8;
        /// Union of the types in [`Type::members`].
        const UNION = 1 << 9;

        /// Every flag that denotes a string value.
        const STRING_LIKE = Self::STRING.bits() | Self::STRING_LITERAL.bits();
    }
}

/// A resolved static type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Type {
    /// Classification flags.
    pub flags: TypeFlags,
    /// Symbol that declared this type, if any.
    pub symbol: Option<SymbolId>,
    /// Constituents when `flags` contains [`TypeFlags::UNION`].
    pub members: Vec<Type>,
}

impl Type {
    /// Create a type with the given flags and no symbol.
    pub fn new(flags: TypeFlags) -> Self {
        Self {
            flags,
            symbol: None,
            members: Vec::new(),
        }
    }

    /// The `any` type.
    pub fn any() -> Self {
        Self::new(TypeFlags::ANY)
    }

    /// The `string` type.
    pub fn string() -> Self {
        Self::new(TypeFlags::STRING)
    }

    /// The `number` type.
    pub fn number() -> Self {
        Self::new(TypeFlags::NUMBER)
    }

    /// An object type declared by `symbol`.
    pub fn object(symbol: SymbolId) -> Self {
        Self {
            flags: TypeFlags::OBJECT,
            symbol: Some(symbol),
            members: Vec::new(),
        }
    }

    /// A union of `members`.
    pub fn union(members: Vec<Type>) -> Self {
        Self {
            flags: TypeFlags::UNION,
            symbol: None,
            members,
        }
    }

    /// Whether this is the universal `any` type.
    pub fn is_any(&self) -> bool {
        self.flags.contains(TypeFlags::ANY)
    }

    /// Whether every value of this type is a string.
    ///
    /// A union is string-typed only when all of its members are.
    pub fn is_string(&self) -> bool {
        if self.flags.contains(TypeFlags::UNION) {
            return !self.members.is_empty() && self.members.iter().all(Type::is_string);
        }
        !self.flags.is_empty() && TypeFlags::STRING_LIKE.contains(self.flags)
    }

    /// The first declaring symbol of this type or, for unions, of its members.
    pub fn first_defined_symbol(&self) -> Option<SymbolId> {
        self.symbol
            .or_else(|| self.members.iter().find_map(Type::first_defined_symbol))
    }
}

/// A compile-time constant value resolved for an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// A string constant (unescaped).
    String(String),
    /// A numeric constant.
    Number(f64),
}
