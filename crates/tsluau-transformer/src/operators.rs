//! Operator classification.
//!
//! Every binary token is sorted into exactly one lowering category:
//!
//! | Category       | Tokens                                   |
//! |----------------|------------------------------------------|
//! | Banned         | `==`, `!=`                               |
//! | Logical        | `&&`, `\|\|`, `??`                       |
//! | Assignment     | `=` and every compound form              |
//! | Simple binary  | equality, relational, arithmetic, bitwise |
//!
//! Tokens outside every category (`in`, `instanceof`, `,`) are reported as
//! an internal error. The matches below are exhaustive so that a new token
//! cannot be added without deciding where it goes.

use tsluau_core::{LoweringError, LoweringResult, Span};
use tsluau_luau::{AssignmentOperator, BinaryOperator, Expression};
use tsluau_syntax::BinaryOp;

/// Library functions standing in for bitwise operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit32Function {
    Band,
    Bor,
    Bxor,
    Lshift,
    Arshift,
    Rshift,
}

impl Bit32Function {
    /// Name of the function inside the `bit32` library.
    pub const fn name(self) -> &'static str {
        match self {
            Bit32Function::Band => "band",
            Bit32Function::Bor => "bor",
            Bit32Function::Bxor => "bxor",
            Bit32Function::Lshift => "lshift",
            Bit32Function::Arshift => "arshift",
            Bit32Function::Rshift => "rshift",
        }
    }
}

/// How a simple binary operator is spelled in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleBinary {
    /// A native target operator.
    Native(BinaryOperator),
    /// A call to a `bit32` library function.
    Bit32(Bit32Function),
}

impl SimpleBinary {
    /// Combine two already-lowered operands.
    pub fn build(self, left: Expression, right: Expression) -> Expression {
        match self {
            SimpleBinary::Native(operator) => Expression::binary(left, operator, right),
            SimpleBinary::Bit32(function) => Expression::call(
                Expression::property(Expression::id("bit32"), function.name()),
                vec![left, right],
            ),
        }
    }
}

/// The shape of an assignment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentKind {
    /// `=`
    Simple,
    /// `op=`, with the underlying binary token.
    Compound(BinaryOp),
}

/// The lowering category of a binary token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// Rejected outright; `replacement` is the form to suggest.
    Banned { replacement: &'static str },
    /// Short-circuit operators, lowered by the logical collaborator.
    Logical,
    /// Assignments, lowered into prerequisite statements.
    Assignment(AssignmentKind),
    /// Everything with a direct target spelling.
    SimpleBinary(SimpleBinary),
}

/// Classify a binary token.
pub fn classify(op: BinaryOp, span: Span) -> LoweringResult<OperatorClass> {
    let class = match op {
        BinaryOp::LooseEqual => OperatorClass::Banned { replacement: "===" },
        BinaryOp::LooseNotEqual => OperatorClass::Banned { replacement: "!==" },

        BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalesce => {
            OperatorClass::Logical
        }

        BinaryOp::Assign => OperatorClass::Assignment(AssignmentKind::Simple),
        BinaryOp::AddAssign
        | BinaryOp::SubAssign
        | BinaryOp::MulAssign
        | BinaryOp::PowAssign
        | BinaryOp::DivAssign
        | BinaryOp::ModAssign
        | BinaryOp::ShlAssign
        | BinaryOp::ShrAssign
        | BinaryOp::UshrAssign
        | BinaryOp::AndAssign
        | BinaryOp::OrAssign
        | BinaryOp::XorAssign => match compound_operand(op) {
            Some(underlying) => OperatorClass::Assignment(AssignmentKind::Compound(underlying)),
            None => return Err(unrecognized(op, span)),
        },

        BinaryOp::StrictEqual
        | BinaryOp::StrictNotEqual
        | BinaryOp::Less
        | BinaryOp::LessEqual
        | BinaryOp::Greater
        | BinaryOp::GreaterEqual
        | BinaryOp::Add
        | BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::Pow
        | BinaryOp::BitwiseAnd
        | BinaryOp::BitwiseOr
        | BinaryOp::BitwiseXor
        | BinaryOp::ShiftLeft
        | BinaryOp::ShiftRight
        | BinaryOp::ShiftRightUnsigned => OperatorClass::SimpleBinary(simple_binary(op, span)?),

        BinaryOp::In | BinaryOp::InstanceOf | BinaryOp::Comma => {
            return Err(unrecognized(op, span));
        }
    };
    tracing::trace!(operator = %op, ?class, "classified binary operator");
    Ok(class)
}

/// Look up the target spelling of a simple binary token.
///
/// Anything not in the table is an internal error.
pub fn simple_binary(op: BinaryOp, span: Span) -> LoweringResult<SimpleBinary> {
    let simple = match op {
        BinaryOp::StrictEqual => SimpleBinary::Native(BinaryOperator::EqualsEquals),
        BinaryOp::StrictNotEqual => SimpleBinary::Native(BinaryOperator::TildeEquals),
        BinaryOp::Less => SimpleBinary::Native(BinaryOperator::LessThan),
        BinaryOp::LessEqual => SimpleBinary::Native(BinaryOperator::LessThanEquals),
        BinaryOp::Greater => SimpleBinary::Native(BinaryOperator::GreaterThan),
        BinaryOp::GreaterEqual => SimpleBinary::Native(BinaryOperator::GreaterThanEquals),
        BinaryOp::Add => SimpleBinary::Native(BinaryOperator::Plus),
        BinaryOp::Sub => SimpleBinary::Native(BinaryOperator::Minus),
        BinaryOp::Mul => SimpleBinary::Native(BinaryOperator::Asterisk),
        BinaryOp::Div => SimpleBinary::Native(BinaryOperator::Slash),
        BinaryOp::Mod => SimpleBinary::Native(BinaryOperator::Percent),
        BinaryOp::Pow => SimpleBinary::Native(BinaryOperator::Caret),
        BinaryOp::BitwiseAnd => SimpleBinary::Bit32(Bit32Function::Band),
        BinaryOp::BitwiseOr => SimpleBinary::Bit32(Bit32Function::Bor),
        BinaryOp::BitwiseXor => SimpleBinary::Bit32(Bit32Function::Bxor),
        BinaryOp::ShiftLeft => SimpleBinary::Bit32(Bit32Function::Lshift),
        BinaryOp::ShiftRight => SimpleBinary::Bit32(Bit32Function::Arshift),
        BinaryOp::ShiftRightUnsigned => SimpleBinary::Bit32(Bit32Function::Rshift),

        BinaryOp::LooseEqual
        | BinaryOp::LooseNotEqual
        | BinaryOp::LogicalAnd
        | BinaryOp::LogicalOr
        | BinaryOp::NullishCoalesce
        | BinaryOp::Assign
        | BinaryOp::AddAssign
        | BinaryOp::SubAssign
        | BinaryOp::MulAssign
        | BinaryOp::PowAssign
        | BinaryOp::DivAssign
        | BinaryOp::ModAssign
        | BinaryOp::ShlAssign
        | BinaryOp::ShrAssign
        | BinaryOp::UshrAssign
        | BinaryOp::AndAssign
        | BinaryOp::OrAssign
        | BinaryOp::XorAssign
        | BinaryOp::In
        | BinaryOp::InstanceOf
        | BinaryOp::Comma => return Err(unrecognized(op, span)),
    };
    Ok(simple)
}

/// The binary token underlying a compound assignment (`+=` → `+`).
pub fn compound_operand(op: BinaryOp) -> Option<BinaryOp> {
    Some(match op {
        BinaryOp::AddAssign => BinaryOp::Add,
        BinaryOp::SubAssign => BinaryOp::Sub,
        BinaryOp::MulAssign => BinaryOp::Mul,
        BinaryOp::PowAssign => BinaryOp::Pow,
        BinaryOp::DivAssign => BinaryOp::Div,
        BinaryOp::ModAssign => BinaryOp::Mod,
        BinaryOp::ShlAssign => BinaryOp::ShiftLeft,
        BinaryOp::ShrAssign => BinaryOp::ShiftRight,
        BinaryOp::UshrAssign => BinaryOp::ShiftRightUnsigned,
        BinaryOp::AndAssign => BinaryOp::BitwiseAnd,
        BinaryOp::OrAssign => BinaryOp::BitwiseOr,
        BinaryOp::XorAssign => BinaryOp::BitwiseXor,
        _ => return None,
    })
}

/// The target's own compound operator for `op`, if it has one.
///
/// Exponentiation and the bitwise operators have none and are always
/// expanded to `x = x op v`.
pub fn native_compound(op: BinaryOp) -> Option<AssignmentOperator> {
    match op {
        BinaryOp::Add => Some(AssignmentOperator::PlusEquals),
        BinaryOp::Sub => Some(AssignmentOperator::MinusEquals),
        BinaryOp::Mul => Some(AssignmentOperator::AsteriskEquals),
        BinaryOp::Div => Some(AssignmentOperator::SlashEquals),
        BinaryOp::Mod => Some(AssignmentOperator::PercentEquals),
        _ => None,
    }
}

fn unrecognized(op: BinaryOp, span: Span) -> LoweringError {
    tracing::debug!(operator = %op, %span, "operator has no lowering category");
    LoweringError::UnrecognizedOperator {
        operator: op.as_str(),
        span,
    }
}
