//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with precedence, associativity, and
//! fixity metadata. The expression parser is driven by this table, so the precedence climbing
//! order cannot drift from what tooling reports.
//!
//! ## Notes
//! - `precedence` is a relative ordering where higher binds tighter. The absolute scale is an
//!   implementation detail, but must be consistent across the parser.
//! - `-` appears once with infix metadata; the parser special-cases its prefix use.
//!
//! ## Examples
//! ```rust
//! use raven_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Not,

    // Assignment (declaration initializers and default values only)
    Eq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::OrOr, "||", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::AndAnd, "&&", 20, Associativity::Left, Fixity::Infix),
    op(OperatorId::EqEq, "==", 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "!=", 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::Lt, "<", 35, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", 35, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", 35, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", 35, Associativity::Left, Fixity::Infix),
    op(OperatorId::Plus, "+", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, "-", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Star, "*", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, "/", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Percent, "%", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Not, "!", 80, Associativity::Right, Fixity::Prefix),
    op(OperatorId::Eq, "=", 5, Associativity::Right, Fixity::Infix),
];

/// Resolve a spelling to its operator id.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return the canonical spelling for an operator id.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator id.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has an OPERATORS entry")
}

/// Return the infix binding power of an operator, if it may appear between two operands.
///
/// `=` is excluded: it only appears in declaration initializers and parameter defaults, never
/// inside an expression.
pub fn infix_precedence(id: OperatorId) -> Option<u8> {
    let info = info_for(id);
    match (info.fixity, id) {
        (Fixity::Infix, OperatorId::Eq) => None,
        (Fixity::Infix, _) => Some(info.precedence),
        (Fixity::Prefix, _) => None,
    }
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
    }
}
