//! Core data for the Numa compiler front end.
//!
//! - [`Span`] byte ranges and [`Name`] interned identifiers
//! - [`Type`]: a scalar [`BuiltinType`] with [`Modifier`] annotations
//! - [`ast`]: the flat, arena-backed AST the resolver consumes and annotates
//! - [`AstBuilder`] for constructing trees by hand

pub mod ast;
mod builder;
mod ids;
mod interner;
mod name;
mod span;
mod types;

pub use ast::{BinaryOp, LiteralKind, UnaryOp};
pub use builder::AstBuilder;
pub use ids::{ArmRange, ExprId, ExprRange, ParamRange, ScopeId, StmtId, StmtRange, SymbolId};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use types::{BuiltinType, Modifier, Type};
