//! Statement nodes.

use crate::{ArmRange, ExprId, ParamRange, ScopeId, Span, StmtId, StmtRange, Type};

/// A statement node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement kinds.
///
/// `scope` and `target` fields are annotation slots written by the
/// resolver; the lowering pass leaves them `None`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its effect.
    Expr(ExprId),
    /// `ty name [= init];` where `name` is an `Ident` expression.
    Decl {
        ty: Type,
        name: ExprId,
        init: Option<ExprId>,
    },
    If {
        cond: ExprId,
        then: StmtId,
        elifs: ArmRange,
        else_: Option<StmtId>,
    },
    Switch {
        scrutinee: ExprId,
        arms: ArmRange,
        default: Option<StmtId>,
    },
    /// Like `switch`, but each arm tests a numeric range boundary.
    Sweep {
        scrutinee: ExprId,
        arms: ArmRange,
        default: Option<StmtId>,
    },
    /// `while (cond[, enter]) body`. When present, `enter` is tested once
    /// before the first `cond` check; if true the body runs without
    /// testing `cond` first.
    While {
        cond: ExprId,
        enter: Option<ExprId>,
        body: StmtId,
    },
    /// `for (init; cond; update) body`. `init` is a `Decl` or `Expr` statement.
    For {
        init: Option<StmtId>,
        cond: Option<ExprId>,
        update: Option<ExprId>,
        body: StmtId,
        scope: Option<ScopeId>,
    },
    /// `func name(params | ret) body` where `body` is a `Block`.
    Function {
        name: ExprId,
        params: ParamRange,
        ret: Type,
        body: StmtId,
        scope: Option<ScopeId>,
    },
    Block {
        stmts: StmtRange,
        scope: Option<ScopeId>,
    },
    Next {
        target: Option<StmtId>,
    },
    Stop {
        target: Option<StmtId>,
    },
    Return {
        value: Option<ExprId>,
        target: Option<StmtId>,
    },
}

impl StmtKind {
    /// Check if control never falls through past this statement.
    pub const fn ends_block(&self) -> bool {
        matches!(
            self,
            StmtKind::Next { .. } | StmtKind::Stop { .. } | StmtKind::Return { .. }
        )
    }
}

/// A conditional arm: `elif (test) body`, `case test: body`, or a sweep
/// range boundary with its body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Arm {
    pub test: ExprId,
    pub body: StmtId,
}

/// A function parameter. `name` is an `Ident` expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Param {
    pub ty: Type,
    pub name: ExprId,
}
