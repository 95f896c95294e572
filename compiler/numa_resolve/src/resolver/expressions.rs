//! Expression typing.
//!
//! Every visited expression gets a type written back onto its node. When an
//! expression is erroneous the error is recorded and a fallback type is
//! used so the parent can still be typed.

use numa_ir::ast::{ExprKind, LiteralKind};
use numa_ir::{BinaryOp, ExprId, ExprRange, Name, Span, Type, UnaryOp};
use numa_types::{compose_assignment, compose_binary, compose_index, compose_unary, AssignError};

use super::Resolver;
use crate::error::{CastSite, ResolveError};
use crate::scope::SymbolKind;
use crate::stack::ensure_sufficient_stack;

fn literal_type(kind: LiteralKind) -> Type {
    match kind {
        LiteralKind::True | LiteralKind::False => Type::BOOL,
        LiteralKind::Int => Type::INT,
        LiteralKind::Float => Type::FLOAT,
        LiteralKind::Char => Type::CHAR,
        LiteralKind::Str => Type::STR,
    }
}

impl Resolver<'_> {
    /// Type `id` and record the type on the node.
    pub(super) fn resolve_expr(&mut self, id: ExprId) -> Type {
        let ty = ensure_sufficient_stack(|| self.infer_expr(id));
        self.ast.set_type(id, ty.clone());
        ty
    }

    fn infer_expr(&mut self, id: ExprId) -> Type {
        let expr = self.ast.expr(id);
        let span = expr.span;
        match expr.kind.clone() {
            ExprKind::Literal(kind) => literal_type(kind),
            ExprKind::Ident { name, .. } => self.resolve_value(id, name, span),
            ExprKind::Binary { op, left, right } if op.is_assignment() => {
                self.resolve_assignment(op, left, right, span)
            }
            ExprKind::Binary { op, left, right } => {
                let left_ty = self.resolve_expr(left);
                let right_ty = self.resolve_expr(right);
                match compose_binary(op, &left_ty, &right_ty) {
                    Ok(ty) => ty,
                    Err(mismatch) => {
                        self.report(ResolveError::TypeMismatch { span, mismatch });
                        if op.is_comparison() || matches!(op, BinaryOp::And | BinaryOp::Or) {
                            Type::BOOL
                        } else {
                            left_ty
                        }
                    }
                }
            }
            ExprKind::Unary { op, operand } => self.resolve_unary(op, operand, span),
            ExprKind::Call { callee, args } => self.resolve_call(callee, args, span),
            ExprKind::Index { array, index } => {
                let array_ty = self.resolve_expr(array);
                let index_ty = self.resolve_expr(index);
                compose_index(&array_ty, &index_ty).unwrap_or_else(|mismatch| {
                    self.report(ResolveError::TypeMismatch { span, mismatch });
                    Type::VOID
                })
            }
        }
    }

    /// An identifier read as a value.
    fn resolve_value(&mut self, id: ExprId, name: Name, span: Span) -> Type {
        let Some(symbol) = self.scopes.lookup(self.scope, name) else {
            self.undefined(name, span);
            return Type::VOID;
        };
        self.ast.set_symbol(id, symbol);
        match &self.scopes.symbol(symbol).kind {
            SymbolKind::Variable(ty) => ty.clone(),
            SymbolKind::Function(_) => {
                self.report(ResolveError::SoleFunctionReference { span, name });
                Type::VOID
            }
        }
    }

    /// `=` and the compound assignments. The result is always the target's
    /// type.
    fn resolve_assignment(&mut self, op: BinaryOp, left: ExprId, right: ExprId, span: Span) -> Type {
        if !self.ast.expr(left).kind.is_lvalue() {
            let target_span = self.ast.expr(left).span;
            self.report(ResolveError::AssignmentTarget { span: target_span });
        }
        let target = self.resolve_expr(left);
        let value = self.resolve_expr(right);

        match compose_assignment(op, &target, &value) {
            Ok(ty) => ty,
            Err(AssignError::Mismatch(mismatch)) => {
                self.report(ResolveError::TypeMismatch { span, mismatch });
                target
            }
            Err(AssignError::Cast(error)) => {
                let value_span = self.ast.expr(right).span;
                self.report_cast(error, CastSite::Assignment, &target, &value, value_span);
                target
            }
        }
    }

    fn resolve_unary(&mut self, op: UnaryOp, operand: ExprId, span: Span) -> Type {
        if (op.is_increment() || op.is_decrement()) && !self.ast.expr(operand).kind.is_lvalue() {
            let target_span = self.ast.expr(operand).span;
            self.report(ResolveError::AssignmentTarget { span: target_span });
        }
        let operand_ty = self.resolve_expr(operand);
        match compose_unary(op, &operand_ty) {
            Ok(ty) => ty,
            Err(mismatch) => {
                self.report(ResolveError::TypeMismatch { span, mismatch });
                operand_ty
            }
        }
    }

    /// A call. Arguments are typed even when the callee cannot be resolved
    /// so their own errors are still reported.
    fn resolve_call(&mut self, callee: ExprId, args: ExprRange, span: Span) -> Type {
        let args = self.ast.expr_list(args).to_vec();
        let arg_types: Vec<Type> = args.iter().map(|&arg| self.resolve_expr(arg)).collect();

        let callee_expr = self.ast.expr(callee);
        let callee_span = callee_expr.span;
        let ExprKind::Ident { name, .. } = callee_expr.kind else {
            self.resolve_expr(callee);
            self.report(ResolveError::NotCallable {
                span: callee_span,
                name: None,
            });
            return Type::VOID;
        };

        let Some(symbol) = self.scopes.lookup(self.scope, name) else {
            self.undefined(name, callee_span);
            self.ast.set_type(callee, Type::VOID);
            return Type::VOID;
        };
        self.ast.set_symbol(callee, symbol);

        let sig = match &self.scopes.symbol(symbol).kind {
            SymbolKind::Function(sig) => sig.clone(),
            SymbolKind::Variable(ty) => {
                self.ast.set_type(callee, ty.clone());
                self.report(ResolveError::NotCallable {
                    span: callee_span,
                    name: Some(name),
                });
                return Type::VOID;
            }
        };
        self.ast.set_type(callee, sig.return_type.clone());

        if sig.params.len() != args.len() {
            self.report(ResolveError::Arity {
                span,
                name,
                expected: sig.params.len(),
                found: args.len(),
            });
        }
        for (index, ((_, param_ty), (&arg, arg_ty))) in
            sig.params.iter().zip(args.iter().zip(&arg_types)).enumerate()
        {
            let arg_span = self.ast.expr(arg).span;
            self.check_cast(CastSite::Argument(index), param_ty, arg_ty, arg_span);
        }

        sig.return_type
    }
}
