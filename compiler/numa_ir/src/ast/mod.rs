//! Flat AST consumed and annotated by the resolver.
//!
//! Nodes live in arenas owned by [`Ast`] and reference one another through
//! [`ExprId`]/[`StmtId`]. Variable-length children (call arguments, block
//! statements, arms, parameters) are stored contiguously in side lists and
//! addressed by `Copy` ranges, so a node never owns a `Vec`.
//!
//! The resolver writes four kinds of annotation in place: expression types,
//! identifier symbols, block scopes and control-transfer targets. Everything
//! else is fixed once lowering finishes.

mod expr;
mod operators;
mod stmt;


pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, LiteralKind, UnaryOp};
pub use stmt::{Arm, Param, Stmt, StmtKind};

use crate::{ArmRange, ExprId, ExprRange, ParamRange, ScopeId, StmtId, StmtRange, SymbolId, Type};

/// Arena for one source file.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct Ast {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    arms: Vec<Arm>,
    params: Vec<Param>,
    /// Top-level declarations and functions, in source order.
    items: Vec<StmtId>,
}

/// Length of a freshly pushed list as a range `len`.
fn list_len(start: usize, end: usize) -> u32 {
    match u32::try_from(end - start) {
        Ok(len) => len,
        Err(_) => panic!("AST list exceeds u32 entries"),
    }
}

fn list_start(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(start) => start,
        Err(_) => panic!("AST side list exceeds u32 entries"),
    }
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    // Allocation

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::from_len(self.exprs.len());
        self.exprs.push(expr);
        id
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::from_len(self.stmts.len());
        self.stmts.push(stmt);
        id
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(exprs);
        ExprRange::new(list_start(start), list_len(start, self.expr_lists.len()))
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len();
        self.stmt_lists.extend(stmts);
        StmtRange::new(list_start(start), list_len(start, self.stmt_lists.len()))
    }

    pub fn alloc_arms(&mut self, arms: impl IntoIterator<Item = Arm>) -> ArmRange {
        let start = self.arms.len();
        self.arms.extend(arms);
        ArmRange::new(list_start(start), list_len(start, self.arms.len()))
    }

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let start = self.params.len();
        self.params.extend(params);
        ParamRange::new(list_start(start), list_len(start, self.params.len()))
    }

    /// Append a top-level item.
    pub fn push_item(&mut self, stmt: StmtId) {
        self.items.push(stmt);
    }

    // Access

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.as_bounds()]
    }

    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.as_bounds()]
    }

    pub fn arms(&self, range: ArmRange) -> &[Arm] {
        &self.arms[range.as_bounds()]
    }

    pub fn params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.as_bounds()]
    }

    pub fn items(&self) -> &[StmtId] {
        &self.items
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    // Annotation

    /// Record the resolved type of an expression, replacing any earlier one.
    pub fn set_type(&mut self, id: ExprId, ty: Type) {
        self.exprs[id.index()].ty = Some(ty);
    }

    /// Resolved type of an expression, if it has been visited.
    pub fn type_of(&self, id: ExprId) -> Option<&Type> {
        self.exprs[id.index()].ty.as_ref()
    }

    /// Bind an identifier expression to its symbol. Non-identifiers are left
    /// untouched.
    pub fn set_symbol(&mut self, id: ExprId, symbol: SymbolId) {
        if let ExprKind::Ident { symbol: slot, .. } = &mut self.exprs[id.index()].kind {
            *slot = Some(symbol);
        }
    }

    /// Bound symbol of an identifier expression.
    pub fn symbol_of(&self, id: ExprId) -> Option<SymbolId> {
        match self.exprs[id.index()].kind {
            ExprKind::Ident { symbol, .. } => symbol,
            _ => None,
        }
    }

    /// Attach a scope to a block, `for` or function statement.
    pub fn set_scope(&mut self, id: StmtId, scope: ScopeId) {
        match &mut self.stmts[id.index()].kind {
            StmtKind::Block { scope: slot, .. }
            | StmtKind::For { scope: slot, .. }
            | StmtKind::Function { scope: slot, .. } => *slot = Some(scope),
            _ => {}
        }
    }

    pub fn scope_of(&self, id: StmtId) -> Option<ScopeId> {
        match self.stmts[id.index()].kind {
            StmtKind::Block { scope, .. }
            | StmtKind::For { scope, .. }
            | StmtKind::Function { scope, .. } => scope,
            _ => None,
        }
    }

    /// Bind a `next`/`stop`/`return` to the construct it transfers to.
    pub fn set_target(&mut self, id: StmtId, target: StmtId) {
        match &mut self.stmts[id.index()].kind {
            StmtKind::Next { target: slot }
            | StmtKind::Stop { target: slot }
            | StmtKind::Return { target: slot, .. } => *slot = Some(target),
            _ => {}
        }
    }

    pub fn target_of(&self, id: StmtId) -> Option<StmtId> {
        match self.stmts[id.index()].kind {
            StmtKind::Next { target }
            | StmtKind::Stop { target }
            | StmtKind::Return { target, .. } => target,
            _ => None,
        }
    }
}
