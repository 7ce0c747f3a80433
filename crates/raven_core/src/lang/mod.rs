//! Canonical language vocabulary for Raven.
//!
//! Each submodule is a **registry**: a stable ID enum plus a const metadata table and
//! `from_str`/`as_str` lookups. The lexer resolves spellings to IDs once; the parser and all later
//! stages dispatch on IDs instead of comparing raw token text.
//!
//! ## See also
//! - [`keywords`] for reserved words (`let`, `function`, `struct`, ...)
//! - [`operators`] for operator spellings plus precedence/associativity/fixity
//! - [`punctuation`] for structural tokens (`(`, `{`, `,`, `;`, ...)

pub mod keywords;
pub mod operators;
pub mod punctuation;
