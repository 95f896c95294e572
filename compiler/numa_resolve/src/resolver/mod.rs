//! The resolution walk.
//!
//! One pre-order pass over the AST: statements open scopes and bind
//! symbols, expressions are typed bottom-up. Every error is recorded and
//! the walk continues with a fallback type, so one pass reports everything
//! it can. Only a malformed AST stops it.

mod expressions;
mod statements;

use numa_ir::ast::{Ast, ExprKind};
use numa_ir::{ExprId, Name, ScopeId, Span, StmtId, StringInterner, SymbolId, Type};
use numa_types::{check_cast, validate_type, CastError};
use tracing::trace;

use crate::error::{CastSite, InternalError, ResolveError};
use crate::interrupt::{FrameKind, InterruptStack};
use crate::scope::{AlreadyDefined, ScopeTree, Symbol};
use crate::suggest::suggest_similar;

pub(crate) struct Resolver<'a> {
    ast: &'a mut Ast,
    interner: &'a StringInterner,
    scopes: ScopeTree,
    interrupts: InterruptStack,
    /// Scope new bindings go into.
    scope: ScopeId,
    errors: Vec<ResolveError>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(ast: &'a mut Ast, interner: &'a StringInterner) -> Self {
        let scopes = ScopeTree::new();
        let scope = scopes.root();
        Resolver {
            ast,
            interner,
            scopes,
            interrupts: InterruptStack::new(),
            scope,
            errors: Vec::new(),
        }
    }

    /// Resolve every top-level item in the root scope.
    pub(crate) fn resolve_items(&mut self) -> Result<(), InternalError> {
        let items = self.ast.items().to_vec();
        for item in items {
            self.resolve_stmt(item)?;
        }
        if !self.interrupts.is_empty() {
            return Err(InternalError::UnbalancedFrames {
                depth: self.interrupts.depth(),
            });
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> (ScopeTree, Vec<ResolveError>) {
        (self.scopes, self.errors)
    }

    fn report(&mut self, error: ResolveError) {
        trace!(code = %error.code(), span = ?error.span(), "resolve error");
        self.errors.push(error);
    }

    // Scope and frame guards

    /// Run `f` with `scope` as the current scope, restoring the previous
    /// one afterwards.
    fn with_scope<T>(&mut self, scope: ScopeId, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = saved;
        result
    }

    /// Run `f` with an interrupt frame for `target` pushed.
    fn with_frame<T>(
        &mut self,
        kind: FrameKind,
        target: StmtId,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.interrupts.push(kind, target);
        let result = f(self);
        self.interrupts.pop();
        result
    }

    /// Open a child of the current scope and attach it to `stmt`.
    fn open_scope(&mut self, stmt: StmtId) -> ScopeId {
        let scope = self.scopes.push_child(self.scope);
        self.ast.set_scope(stmt, scope);
        trace!(?scope, parent = ?self.scope, ?stmt, "open scope");
        scope
    }

    // Symbols

    /// Bind `symbol` in the current scope, reporting a redefinition.
    fn define(&mut self, symbol: Symbol) -> Option<SymbolId> {
        let (name, span) = (symbol.name, symbol.span);
        match self.scopes.define(self.scope, symbol) {
            Ok(id) => Some(id),
            Err(AlreadyDefined { existing }) => {
                let previous = self.scopes.symbol(existing).span;
                self.report(ResolveError::Redefinition {
                    span,
                    name,
                    previous,
                });
                None
            }
        }
    }

    /// Bind a variable and annotate its defining identifier.
    fn bind_variable(&mut self, expr: ExprId, name: Name, ty: Type) {
        let span = self.ast.expr(expr).span;
        self.ast.set_type(expr, ty.clone());
        if let Some(symbol) = self.define(Symbol::variable(name, ty, span)) {
            self.ast.set_symbol(expr, symbol);
        }
    }

    fn ident_name(&self, expr: ExprId) -> Result<Name, InternalError> {
        let expr = self.ast.expr(expr);
        match expr.kind {
            ExprKind::Ident { name, .. } => Ok(name),
            _ => Err(InternalError::ExpectedIdent { span: expr.span }),
        }
    }

    fn undefined(&mut self, name: Name, span: Span) {
        let target = self.interner.lookup(name);
        let candidates = self
            .scopes
            .visible_names(self.scope)
            .map(|candidate| self.interner.lookup(candidate));
        let suggestion = suggest_similar(target, candidates).map(|s| self.interner.intern(s));
        self.report(ResolveError::UndefinedSymbol {
            span,
            name,
            suggestion,
        });
    }

    // Types

    /// Report every modifier error on a declared type.
    fn validate_declared(&mut self, ty: &Type, span: Span) {
        for error in validate_type(ty) {
            self.report(ResolveError::ModifierComposition {
                span,
                ty: ty.clone(),
                error,
            });
        }
    }

    fn check_cast(&mut self, site: CastSite, expected: &Type, found: &Type, span: Span) {
        if let Err(error) = check_cast(expected, found) {
            self.report_cast(error, site, expected, found, span);
        }
    }

    fn report_cast(
        &mut self,
        error: CastError,
        site: CastSite,
        expected: &Type,
        found: &Type,
        span: Span,
    ) {
        let error = match error {
            CastError::AutoUnresolved => ResolveError::AutoUnresolved { span, site },
            CastError::NotCastable => ResolveError::NotCastable {
                span,
                site,
                expected: expected.clone(),
                found: found.clone(),
            },
        };
        self.report(error);
    }
}
