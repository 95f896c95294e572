//! Shared fixture for the resolver integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use numa_diagnostic::ErrorCode;
use numa_ir::ast::Ast;
use numa_ir::{AstBuilder, BuiltinType, ExprId, Modifier, StringInterner, Type};
use numa_resolve::{resolve_file, FileResolution, SymbolKind};

/// A built tree and the interner its names live in.
pub struct Fixture {
    pub interner: StringInterner,
    pub ast: Ast,
}

/// Build a tree; `f` returns whatever node ids the test wants to inspect.
pub fn build<T>(f: impl FnOnce(&mut AstBuilder<'_>) -> T) -> (Fixture, T) {
    let interner = StringInterner::new();
    let (ast, ids) = {
        let mut builder = AstBuilder::new(&interner);
        let ids = f(&mut builder);
        (builder.finish(), ids)
    };
    (Fixture { interner, ast }, ids)
}

impl Fixture {
    pub fn resolve(&mut self) -> FileResolution {
        resolve_file(&mut self.ast, &self.interner).expect("well-formed tree")
    }

    pub fn type_of(&self, expr: ExprId) -> Option<Type> {
        self.ast.type_of(expr).cloned()
    }

    /// Type bound to `name` in the root scope.
    pub fn root_type(&self, resolution: &FileResolution, name: &str) -> Option<Type> {
        let scopes = &resolution.scopes;
        let symbol = scopes.lookup(scopes.root(), self.interner.intern(name))?;
        match &scopes.symbol(symbol).kind {
            SymbolKind::Variable(ty) => Some(ty.clone()),
            SymbolKind::Function(sig) => Some(sig.return_type.clone()),
        }
    }
}

pub fn codes(resolution: &FileResolution) -> Vec<ErrorCode> {
    resolution.errors.iter().map(|e| e.code()).collect()
}

pub fn int(modifiers: &[Modifier]) -> Type {
    Type::with_modifiers(BuiltinType::Int, modifiers)
}

pub fn float(modifiers: &[Modifier]) -> Type {
    Type::with_modifiers(BuiltinType::Float, modifiers)
}
