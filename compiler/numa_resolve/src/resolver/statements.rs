//! Statement resolution: scopes, declarations and control flow.

use numa_ir::ast::{Arm, StmtKind};
use numa_ir::{ArmRange, BinaryOp, BuiltinType, ExprId, Modifier, ParamRange, Span, StmtId, Type};
use numa_types::compose_binary;
use tracing::{debug, debug_span, trace};

use super::Resolver;
use crate::error::{AutoSite, CastSite, InternalError, ResolveError, Transfer};
use crate::interrupt::{BindError, FrameKind};
use crate::scope::{FunctionSig, Symbol};
use crate::stack::ensure_sufficient_stack;

impl Resolver<'_> {
    pub(super) fn resolve_stmt(&mut self, id: StmtId) -> Result<(), InternalError> {
        ensure_sufficient_stack(|| self.resolve_stmt_inner(id))
    }

    fn resolve_stmt_inner(&mut self, id: StmtId) -> Result<(), InternalError> {
        let stmt = self.ast.stmt(id).clone();
        match stmt.kind {
            StmtKind::Expr(expr) => {
                self.resolve_expr(expr);
                Ok(())
            }
            StmtKind::Decl { ty, name, init } => self.resolve_decl(&ty, name, init),
            StmtKind::If {
                cond,
                then,
                elifs,
                else_,
            } => {
                self.resolve_condition(cond);
                self.resolve_stmt(then)?;
                for arm in self.arm_list(elifs) {
                    self.resolve_condition(arm.test);
                    self.resolve_stmt(arm.body)?;
                }
                match else_ {
                    Some(else_) => self.resolve_stmt(else_),
                    None => Ok(()),
                }
            }
            StmtKind::Switch {
                scrutinee,
                arms,
                default,
            } => self.resolve_switch(id, scrutinee, arms, default, false),
            StmtKind::Sweep {
                scrutinee,
                arms,
                default,
            } => self.resolve_switch(id, scrutinee, arms, default, true),
            StmtKind::While { cond, enter, body } => {
                self.resolve_condition(cond);
                if let Some(enter) = enter {
                    self.resolve_condition(enter);
                }
                self.with_frame(FrameKind::Loop, id, |this| this.resolve_stmt(body))
            }
            StmtKind::For {
                init,
                cond,
                update,
                body,
                ..
            } => self.resolve_for(id, init, cond, update, body),
            StmtKind::Function {
                name,
                params,
                ret,
                body,
                ..
            } => self.resolve_function(id, name, params, &ret, body),
            StmtKind::Block { stmts, .. } => {
                let scope = self.open_scope(id);
                let stmts = self.ast.stmt_list(stmts).to_vec();
                self.with_scope(scope, |this| this.resolve_block_items(&stmts))
            }
            StmtKind::Next { .. } => {
                let bound = self.interrupts.bind_next();
                self.bind_transfer(id, stmt.span, Transfer::Next, bound);
                Ok(())
            }
            StmtKind::Stop { .. } => {
                let bound = self.interrupts.bind_stop();
                self.bind_transfer(id, stmt.span, Transfer::Stop, bound);
                Ok(())
            }
            StmtKind::Return { value, .. } => {
                self.resolve_return(id, stmt.span, value);
                Ok(())
            }
        }
    }

    /// Resolve a block's statements in the current scope, stopping after
    /// the first one that ends the block.
    fn resolve_block_items(&mut self, stmts: &[StmtId]) -> Result<(), InternalError> {
        for (i, &stmt) in stmts.iter().enumerate() {
            self.resolve_stmt(stmt)?;
            if self.ast.stmt(stmt).kind.ends_block() {
                let skipped = stmts.len() - i - 1;
                if skipped > 0 {
                    debug!(?stmt, skipped, "skipping statements after control transfer");
                }
                break;
            }
        }
        Ok(())
    }

    fn arm_list(&self, arms: ArmRange) -> Vec<Arm> {
        self.ast.arms(arms).to_vec()
    }

    fn resolve_condition(&mut self, cond: ExprId) {
        let found = self.resolve_expr(cond);
        let span = self.ast.expr(cond).span;
        self.check_cast(CastSite::Condition, &Type::BOOL, &found, span);
    }

    fn resolve_decl(
        &mut self,
        ty: &Type,
        name: ExprId,
        init: Option<ExprId>,
    ) -> Result<(), InternalError> {
        let name_id = self.ident_name(name)?;
        let span = self.ast.expr(name).span;
        self.validate_declared(ty, span);

        // The initializer is resolved before the name is bound, so
        // `int x = x;` reads an outer `x`.
        let init = init.map(|init| (self.ast.expr(init).span, self.resolve_expr(init)));

        let bound = if ty.has_modifier(Modifier::Auto) {
            match init {
                Some((_, found)) => found,
                None => {
                    self.report(ResolveError::AutoNotInferable {
                        span,
                        site: AutoSite::Declaration,
                    });
                    Type::plain(ty.builtin)
                }
            }
        } else {
            if let Some((init_span, found)) = &init {
                self.check_cast(CastSite::Initializer, ty, found, *init_span);
            }
            ty.clone()
        };

        if bound.is_void() {
            self.report(ResolveError::VoidVariable {
                span,
                name: name_id,
            });
        }
        self.bind_variable(name, name_id, bound);
        Ok(())
    }

    /// Validate a parameter or return type. `auto` has nothing to infer
    /// from there, so it is reported and replaced by the bare builtin.
    fn signature_type(&mut self, ty: &Type, span: Span, site: AutoSite) -> Type {
        self.validate_declared(ty, span);
        if ty.has_modifier(Modifier::Auto) {
            self.report(ResolveError::AutoNotInferable { span, site });
            Type::plain(ty.builtin)
        } else {
            ty.clone()
        }
    }

    fn resolve_function(
        &mut self,
        id: StmtId,
        name: ExprId,
        params: ParamRange,
        ret: &Type,
        body: StmtId,
    ) -> Result<(), InternalError> {
        let fn_name = self.ident_name(name)?;
        let _span = debug_span!("function", name = self.interner.lookup(fn_name)).entered();
        let name_span = self.ast.expr(name).span;
        let return_type = self.signature_type(ret, name_span, AutoSite::ReturnType);

        let params = self.ast.params(params).to_vec();
        let mut bindings = Vec::with_capacity(params.len());
        for param in &params {
            let param_name = self.ident_name(param.name)?;
            let span = self.ast.expr(param.name).span;
            let ty = self.signature_type(&param.ty, span, AutoSite::Parameter);
            if ty.is_void() {
                self.report(ResolveError::VoidVariable {
                    span,
                    name: param_name,
                });
            }
            bindings.push((param.name, param_name, ty));
        }

        // Bound before the body so the function can call itself.
        let sig = FunctionSig {
            return_type: return_type.clone(),
            params: bindings.iter().map(|(_, name, ty)| (*name, ty.clone())).collect(),
        };
        self.ast.set_type(name, return_type);
        if let Some(symbol) = self.define(Symbol::function(fn_name, sig, name_span)) {
            self.ast.set_symbol(name, symbol);
        }

        let body_stmt = self.ast.stmt(body);
        let StmtKind::Block { stmts, .. } = body_stmt.kind else {
            return Err(InternalError::FunctionBodyNotBlock {
                span: body_stmt.span,
            });
        };
        let stmts = self.ast.stmt_list(stmts).to_vec();

        // Parameters and the top-level body statements share one scope.
        let scope = self.open_scope(id);
        self.ast.set_scope(body, scope);
        self.with_scope(scope, |this| {
            for (expr, name, ty) in bindings {
                this.bind_variable(expr, name, ty);
            }
            this.with_frame(FrameKind::Function, id, |this| this.resolve_block_items(&stmts))
        })
    }

    fn resolve_for(
        &mut self,
        id: StmtId,
        init: Option<StmtId>,
        cond: Option<ExprId>,
        update: Option<ExprId>,
        body: StmtId,
    ) -> Result<(), InternalError> {
        let scope = self.open_scope(id);
        self.with_scope(scope, |this| {
            if let Some(init) = init {
                let init_stmt = this.ast.stmt(init);
                if !matches!(init_stmt.kind, StmtKind::Decl { .. } | StmtKind::Expr(_)) {
                    return Err(InternalError::BadForInit {
                        span: init_stmt.span,
                    });
                }
                this.resolve_stmt(init)?;
            }
            if let Some(cond) = cond {
                this.resolve_condition(cond);
            }
            if let Some(update) = update {
                this.resolve_expr(update);
            }
            this.with_frame(FrameKind::Loop, id, |this| this.resolve_stmt(body))
        })
    }

    /// `switch` and `sweep`. Switch cases must compare with the scrutinee
    /// under `==`; sweep boundaries must be numeric and unit-compatible
    /// with it.
    fn resolve_switch(
        &mut self,
        id: StmtId,
        scrutinee: ExprId,
        arms: ArmRange,
        default: Option<StmtId>,
        sweep: bool,
    ) -> Result<(), InternalError> {
        let scrutinee_ty = self.resolve_expr(scrutinee);
        let scrutinee_ok = !sweep || self.require_sweep_numeric(scrutinee, &scrutinee_ty);
        let arms = self.arm_list(arms);

        self.with_frame(FrameKind::Switch, id, |this| {
            for arm in arms {
                let test_ty = this.resolve_expr(arm.test);
                let span = this.ast.expr(arm.test).span;
                let checked = if sweep {
                    this.require_sweep_numeric(arm.test, &test_ty) && scrutinee_ok
                } else {
                    true
                };
                if checked {
                    let op = if sweep { BinaryOp::GtEq } else { BinaryOp::Eq };
                    if let Err(mismatch) = compose_binary(op, &scrutinee_ty, &test_ty) {
                        this.report(ResolveError::TypeMismatch { span, mismatch });
                    }
                }
                this.resolve_stmt(arm.body)?;
            }
            match default {
                Some(default) => this.resolve_stmt(default),
                None => Ok(()),
            }
        })
    }

    fn require_sweep_numeric(&mut self, expr: ExprId, ty: &Type) -> bool {
        let numeric = matches!(ty.builtin, BuiltinType::Int | BuiltinType::Float);
        if !numeric {
            let span = self.ast.expr(expr).span;
            self.report(ResolveError::SweepNotNumeric {
                span,
                found: ty.clone(),
            });
        }
        numeric
    }

    fn bind_transfer(
        &mut self,
        id: StmtId,
        span: Span,
        transfer: Transfer,
        bound: Result<StmtId, BindError>,
    ) {
        match bound {
            Ok(target) => {
                trace!(stmt = ?id, ?target, keyword = transfer.keyword(), "bind");
                self.ast.set_target(id, target);
            }
            Err(error) => self.report(ResolveError::ControlFlowBinding {
                span,
                transfer,
                crosses_function: error == BindError::CrossesFunction,
            }),
        }
    }

    fn resolve_return(&mut self, id: StmtId, span: Span, value: Option<ExprId>) {
        let value = value.map(|value| (self.ast.expr(value).span, self.resolve_expr(value)));

        let Some(target) = self.interrupts.bind_return() else {
            self.report(ResolveError::ControlFlowBinding {
                span,
                transfer: Transfer::Return,
                crosses_function: false,
            });
            return;
        };
        trace!(stmt = ?id, ?target, "bind return");
        self.ast.set_target(id, target);

        let expected = self.return_type_of(target);
        match value {
            Some((value_span, found)) if expected.is_void() => {
                self.report(ResolveError::UnexpectedReturnValue {
                    span: value_span,
                    found,
                });
            }
            Some((value_span, found)) => {
                self.check_cast(CastSite::Return, &expected, &found, value_span);
            }
            None if !expected.is_void() => {
                self.report(ResolveError::MissingReturnValue { span, expected });
            }
            None => {}
        }
    }

    /// Checked return type of a function statement, as recorded on its
    /// name when the signature was resolved.
    fn return_type_of(&self, function: StmtId) -> Type {
        match self.ast.stmt(function).kind {
            StmtKind::Function { name, .. } => {
                self.ast.type_of(name).cloned().unwrap_or(Type::VOID)
            }
            _ => Type::VOID,
        }
    }
}
