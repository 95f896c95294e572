//! Expression nodes.

use super::operators::{BinaryOp, LiteralKind, UnaryOp};
use crate::{ExprId, ExprRange, Name, Span, SymbolId, Type};

/// An expression node with its resolution annotation.
///
/// `ty` is `None` until the resolver visits the node; after a pass every
/// reachable expression carries its resolved type (the fallback type when
/// the expression was erroneous).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: Option<Type>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            span,
            ty: None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    /// Identifier reference. `symbol` is filled in by the resolver.
    Ident { name: Name, symbol: Option<SymbolId> },
    Literal(LiteralKind),
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary { op: UnaryOp, operand: ExprId },
    /// Function call. The callee is always an `Ident` expression.
    Call { callee: ExprId, args: ExprRange },
    /// `array[index]`
    Index { array: ExprId, index: ExprId },
}

impl ExprKind {
    /// Check if this expression may appear on the left of `=`.
    pub const fn is_lvalue(&self) -> bool {
        matches!(self, ExprKind::Ident { .. })
    }
}
