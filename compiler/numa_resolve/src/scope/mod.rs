//! Lexical scopes and the symbols bound in them.
//!
//! Scopes live in an arena addressed by [`ScopeId`]; each records its
//! parent and children as ids, so ownership flows strictly from the root
//! down and two trees compare with `==`. Symbols live in a second arena
//! addressed by [`SymbolId`], which is what the resolver writes onto
//! identifier nodes.

use std::fmt::Write as _;

use numa_ir::{Name, ScopeId, Span, StringInterner, SymbolId, Type};
use rustc_hash::FxHashMap;

/// A function signature as seen by callers.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionSig {
    pub return_type: Type,
    /// Parameters in declaration order.
    pub params: Vec<(Name, Type)>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SymbolKind {
    Variable(Type),
    Function(FunctionSig),
}

/// A name bound in exactly one scope.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Symbol {
    pub name: Name,
    pub kind: SymbolKind,
    /// Scope the symbol was defined in.
    pub scope: ScopeId,
    /// Span of the defining identifier.
    pub span: Span,
}

impl Symbol {
    pub fn variable(name: Name, ty: Type, span: Span) -> Self {
        Symbol {
            name,
            kind: SymbolKind::Variable(ty),
            scope: ScopeId::ROOT,
            span,
        }
    }

    pub fn function(name: Name, sig: FunctionSig, span: Span) -> Self {
        Symbol {
            name,
            kind: SymbolKind::Function(sig),
            scope: ScopeId::ROOT,
            span,
        }
    }

    /// Type of the symbol when read as a value. Functions yield their
    /// return type.
    pub fn value_type(&self) -> &Type {
        match &self.kind {
            SymbolKind::Variable(ty) => ty,
            SymbolKind::Function(sig) => &sig.return_type,
        }
    }
}

/// One lexical scope.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Scope {
    parent: Option<ScopeId>,
    children: Vec<ScopeId>,
    bindings: FxHashMap<Name, SymbolId>,
    /// Bindings in definition order, for stable printing.
    order: Vec<SymbolId>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    /// Symbols defined directly in this scope, in definition order.
    pub fn symbols(&self) -> &[SymbolId] {
        &self.order
    }

    pub fn is_bound_locally(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }
}

/// A name defined twice in one scope.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct AlreadyDefined {
    /// The binding that stays in effect.
    pub existing: SymbolId,
}

/// The scope tree of one file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
}

impl ScopeTree {
    /// A tree holding only the empty root scope.
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope::default()],
            symbols: Vec::new(),
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId::ROOT
    }

    /// Open a new scope nested in `parent`.
    pub fn push_child(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId::from_len(self.scopes.len());
        self.scopes.push(Scope {
            parent: Some(parent),
            ..Scope::default()
        });
        self.scopes[parent.index()].children.push(id);
        id
    }

    /// Bind `symbol` in `scope`.
    ///
    /// Fails if the name is already bound in that exact scope; the earlier
    /// binding is kept. Shadowing a binding of an ancestor is allowed.
    pub fn define(&mut self, scope: ScopeId, mut symbol: Symbol) -> Result<SymbolId, AlreadyDefined> {
        if let Some(&existing) = self.scopes[scope.index()].bindings.get(&symbol.name) {
            return Err(AlreadyDefined { existing });
        }
        let id = SymbolId::from_len(self.symbols.len());
        symbol.scope = scope;
        let entry = &mut self.scopes[scope.index()];
        entry.bindings.insert(symbol.name, id);
        entry.order.push(id);
        self.symbols.push(symbol);
        Ok(id)
    }

    /// Find `name` in `scope` or the nearest ancestor binding it.
    pub fn lookup(&self, scope: ScopeId, name: Name) -> Option<SymbolId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let entry = &self.scopes[id.index()];
            if let Some(&symbol) = entry.bindings.get(&name) {
                return Some(symbol);
            }
            current = entry.parent;
        }
        None
    }

    /// Names visible from `scope`, innermost first. Shadowed names repeat.
    pub fn visible_names(&self, scope: ScopeId) -> impl Iterator<Item = Name> + '_ {
        std::iter::successors(Some(scope), |id| self.scopes[id.index()].parent)
            .flat_map(|id| self.scopes[id.index()].order.iter())
            .map(|&symbol| self.symbols[symbol.index()].name)
    }

    #[inline]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    #[inline]
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Indented dump of the tree:
    ///
    /// ```text
    /// Scope
    ///     add: func(a: int, b: int | int)
    ///     Scope
    ///         a: int
    ///         b: int
    /// ```
    pub fn render(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.render_scope(ScopeId::ROOT, 0, interner, &mut out);
        out
    }

    fn render_scope(&self, id: ScopeId, depth: usize, interner: &StringInterner, out: &mut String) {
        const INDENT: usize = 4;
        let pad = depth * INDENT;
        let scope = self.scope(id);

        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "{:pad$}Scope", "");
        for &symbol in &scope.order {
            let symbol = self.symbol(symbol);
            let name = interner.lookup(symbol.name);
            let _ = write!(out, "\n{:width$}{name}: ", "", width = pad + INDENT);
            match &symbol.kind {
                SymbolKind::Variable(ty) => {
                    let _ = write!(out, "{ty}");
                }
                SymbolKind::Function(sig) => {
                    let params = sig
                        .params
                        .iter()
                        .map(|(param, ty)| format!("{}: {ty}", interner.lookup(*param)))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let _ = write!(out, "func({params} | {})", sig.return_type);
                }
            }
        }
        for &child in &scope.children {
            self.render_scope(child, depth + 1, interner, out);
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
