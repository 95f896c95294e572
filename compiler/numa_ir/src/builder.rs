//! Convenience constructor for ASTs.
//!
//! Every node gets a distinct one-byte span in allocation order, so
//! diagnostics produced from a built tree can be matched back to the node
//! that caused them. Lowering code with real token spans should allocate
//! through [`Ast`] directly.

use crate::ast::{
    Arm, Ast, BinaryOp, Expr, ExprKind, LiteralKind, Param, Stmt, StmtKind, UnaryOp,
};
use crate::{ArmRange, ExprId, Span, StmtId, StringInterner, Type};

pub struct AstBuilder<'a> {
    ast: Ast,
    interner: &'a StringInterner,
    offset: u32,
}

impl<'a> AstBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        AstBuilder {
            ast: Ast::new(),
            interner,
            offset: 0,
        }
    }

    pub fn finish(self) -> Ast {
        self.ast
    }

    /// The tree built so far.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    fn next_span(&mut self) -> Span {
        let span = Span::new(self.offset, self.offset + 1);
        self.offset += 1;
        span
    }

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        let span = self.next_span();
        self.ast.alloc_expr(Expr::new(kind, span))
    }

    fn stmt(&mut self, kind: StmtKind) -> StmtId {
        let span = self.next_span();
        self.ast.alloc_stmt(Stmt::new(kind, span))
    }

    // Expressions

    pub fn ident(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.expr(ExprKind::Ident { name, symbol: None })
    }

    pub fn literal(&mut self, kind: LiteralKind) -> ExprId {
        self.expr(ExprKind::Literal(kind))
    }

    pub fn int(&mut self) -> ExprId {
        self.literal(LiteralKind::Int)
    }

    pub fn float(&mut self) -> ExprId {
        self.literal(LiteralKind::Float)
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.literal(if value {
            LiteralKind::True
        } else {
            LiteralKind::False
        })
    }

    pub fn char(&mut self) -> ExprId {
        self.literal(LiteralKind::Char)
    }

    pub fn string(&mut self) -> ExprId {
        self.literal(LiteralKind::Str)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.expr(ExprKind::Binary { op, left, right })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Unary { op, operand })
    }

    pub fn call(&mut self, callee: &str, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let callee = self.ident(callee);
        let args = self.ast.alloc_expr_list(args);
        self.expr(ExprKind::Call { callee, args })
    }

    /// Call whose callee is an arbitrary expression.
    pub fn call_expr(&mut self, callee: ExprId, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let args = self.ast.alloc_expr_list(args);
        self.expr(ExprKind::Call { callee, args })
    }

    pub fn index(&mut self, array: ExprId, index: ExprId) -> ExprId {
        self.expr(ExprKind::Index { array, index })
    }

    // Statements

    pub fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.stmt(StmtKind::Expr(expr))
    }

    pub fn decl(&mut self, ty: Type, name: &str, init: Option<ExprId>) -> StmtId {
        let name = self.ident(name);
        self.stmt(StmtKind::Decl { ty, name, init })
    }

    pub fn block(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtId {
        let stmts = self.ast.alloc_stmt_list(stmts);
        self.stmt(StmtKind::Block { stmts, scope: None })
    }

    pub fn if_(
        &mut self,
        cond: ExprId,
        then: StmtId,
        elifs: impl IntoIterator<Item = (ExprId, StmtId)>,
        else_: Option<StmtId>,
    ) -> StmtId {
        let elifs = self.arms(elifs);
        self.stmt(StmtKind::If {
            cond,
            then,
            elifs,
            else_,
        })
    }

    pub fn switch(
        &mut self,
        scrutinee: ExprId,
        arms: impl IntoIterator<Item = (ExprId, StmtId)>,
        default: Option<StmtId>,
    ) -> StmtId {
        let arms = self.arms(arms);
        self.stmt(StmtKind::Switch {
            scrutinee,
            arms,
            default,
        })
    }

    pub fn sweep(
        &mut self,
        scrutinee: ExprId,
        arms: impl IntoIterator<Item = (ExprId, StmtId)>,
        default: Option<StmtId>,
    ) -> StmtId {
        let arms = self.arms(arms);
        self.stmt(StmtKind::Sweep {
            scrutinee,
            arms,
            default,
        })
    }

    fn arms(&mut self, arms: impl IntoIterator<Item = (ExprId, StmtId)>) -> ArmRange {
        self.ast
            .alloc_arms(arms.into_iter().map(|(test, body)| Arm { test, body }))
    }

    pub fn while_(&mut self, cond: ExprId, enter: Option<ExprId>, body: StmtId) -> StmtId {
        self.stmt(StmtKind::While { cond, enter, body })
    }

    pub fn for_(
        &mut self,
        init: Option<StmtId>,
        cond: Option<ExprId>,
        update: Option<ExprId>,
        body: StmtId,
    ) -> StmtId {
        self.stmt(StmtKind::For {
            init,
            cond,
            update,
            body,
            scope: None,
        })
    }

    pub fn function<'p>(
        &mut self,
        name: &str,
        params: impl IntoIterator<Item = (Type, &'p str)>,
        ret: Type,
        body: StmtId,
    ) -> StmtId {
        let name = self.ident(name);
        let params: Vec<Param> = params
            .into_iter()
            .map(|(ty, param)| Param {
                ty,
                name: self.ident(param),
            })
            .collect();
        let params = self.ast.alloc_params(params);
        self.stmt(StmtKind::Function {
            name,
            params,
            ret,
            body,
            scope: None,
        })
    }

    pub fn next(&mut self) -> StmtId {
        self.stmt(StmtKind::Next { target: None })
    }

    pub fn stop(&mut self) -> StmtId {
        self.stmt(StmtKind::Stop { target: None })
    }

    pub fn ret(&mut self, value: Option<ExprId>) -> StmtId {
        self.stmt(StmtKind::Return {
            value,
            target: None,
        })
    }

    /// Append a top-level item.
    pub fn item(&mut self, stmt: StmtId) -> StmtId {
        self.ast.push_item(stmt);
        stmt
    }
}
