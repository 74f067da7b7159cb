//! Binary operator tokens of the source language.
//!
//! The token set is closed: every operator the parser can produce is a variant
//! here, including the ones the lowering engine refuses or cannot lower.

use std::fmt;

/// A binary operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Equality
    /// `==`
    LooseEqual,
    /// `!=`
    LooseNotEqual,
    /// `===`
    StrictEqual,
    /// `!==`
    StrictNotEqual,

    // Relational
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Arithmetic
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `**`
    Pow,

    // Bitwise
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `>>>`
    ShiftRightUnsigned,

    // Logical
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `??`
    NullishCoalesce,

    // Assignment
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `**=`
    PowAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `>>>=`
    UshrAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,

    // Other
    /// `in`
    In,
    /// `instanceof`
    InstanceOf,
    /// `,`
    Comma,
}

impl BinaryOp {
    /// Every operator token, in declaration order.
    pub const ALL: [BinaryOp; 39] = [
        BinaryOp::LooseEqual,
        BinaryOp::LooseNotEqual,
        BinaryOp::StrictEqual,
        BinaryOp::StrictNotEqual,
        BinaryOp::Less,
        BinaryOp::LessEqual,
        BinaryOp::Greater,
        BinaryOp::GreaterEqual,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Pow,
        BinaryOp::BitwiseAnd,
        BinaryOp::BitwiseOr,
        BinaryOp::BitwiseXor,
        BinaryOp::ShiftLeft,
        BinaryOp::ShiftRight,
        BinaryOp::ShiftRightUnsigned,
        BinaryOp::LogicalAnd,
        BinaryOp::LogicalOr,
        BinaryOp::NullishCoalesce,
        BinaryOp::Assign,
        BinaryOp::AddAssign,
        BinaryOp::SubAssign,
        BinaryOp::MulAssign,
        BinaryOp::PowAssign,
        BinaryOp::DivAssign,
        BinaryOp::ModAssign,
        BinaryOp::ShlAssign,
        BinaryOp::ShrAssign,
        BinaryOp::UshrAssign,
        BinaryOp::AndAssign,
        BinaryOp::OrAssign,
        BinaryOp::XorAssign,
        BinaryOp::In,
        BinaryOp::InstanceOf,
        BinaryOp::Comma,
    ];

    /// The source text of this token.
    pub const fn as_str(self) -> &'static str {
        use BinaryOp::*;
        match self {
            LooseEqual => "==",
            LooseNotEqual => "!=",
            StrictEqual => "===",
            StrictNotEqual => "!==",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            ShiftRightUnsigned => ">>>",
            LogicalAnd => "&&",
            LogicalOr => "||",
            NullishCoalesce => "??",
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            PowAssign => "**=",
            DivAssign => "/=",
            ModAssign => "%=",
            ShlAssign => "<<=",
            ShrAssign => ">>=",
            UshrAssign => ">>>=",
            AndAssign => "&=",
            OrAssign => "|=",
            XorAssign => "^=",
            In => "in",
            InstanceOf => "instanceof",
            Comma => ",",
        }
    }

    /// Whether this is `=` or one of the compound assignment tokens.
    pub fn is_assignment(self) -> bool {
        use BinaryOp::*;
        matches!(
            self,
            Assign
                | AddAssign
                | SubAssign
                | MulAssign
                | PowAssign
                | DivAssign
                | ModAssign
                | ShlAssign
                | ShrAssign
                | UshrAssign
                | AndAssign
                | OrAssign
                | XorAssign
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
