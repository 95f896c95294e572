//! Semantic resolution for Numa.
//!
//! Takes a lowered [`Ast`] and, in one pass:
//!
//! - builds the [`ScopeTree`] and binds every identifier to its symbol
//! - types every expression under the modifier algebra of `numa_types`
//! - binds `next`/`stop`/`return` to their enclosing loop, switch or
//!   function
//!
//! # Main Entry Points
//!
//! - [`resolve_file`]: resolve one file, returning a [`FileResolution`]
//! - [`init_tracing`]: opt-in tracing output controlled by `RUST_LOG`
//!
//! Errors in the program are collected, not returned: a resolution with
//! [`FileResolution::had_error`] set must not be handed to code generation.

mod error;
mod interrupt;
mod resolver;
pub mod scope;
mod stack;
pub mod suggest;

use std::sync::Once;

use numa_diagnostic::queue::{too_many_errors, DiagnosticConfig, DiagnosticQueue};
use numa_diagnostic::span_utils::LineOffsetTable;
use numa_diagnostic::Diagnostic;
use numa_ir::ast::Ast;
use numa_ir::{Span, StringInterner};

pub use error::{AutoSite, CastSite, InternalError, ResolveError, Transfer};
pub use interrupt::{BindError, Frame, FrameKind, InterruptStack};
pub use scope::{FunctionSig, Scope, ScopeTree, Symbol, SymbolKind};
pub use stack::ensure_sufficient_stack;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=numa_resolve=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tree)
                .init();
        }
    });
}

/// The result of resolving one file.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FileResolution {
    pub scopes: ScopeTree,
    /// Errors in source order of discovery.
    pub errors: Vec<ResolveError>,
}

impl FileResolution {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Every error as a diagnostic, in discovery order.
    pub fn diagnostics(&self, interner: &StringInterner) -> Vec<Diagnostic> {
        self.errors
            .iter()
            .map(|error| error.to_diagnostic(interner))
            .collect()
    }

    /// Diagnostics filtered through a [`DiagnosticQueue`]: positioned
    /// against `source`, deduplicated, sorted and capped as `config` asks.
    pub fn report(
        &self,
        interner: &StringInterner,
        source: &str,
        config: DiagnosticConfig,
    ) -> Vec<Diagnostic> {
        let table = LineOffsetTable::build(source);
        let mut queue = DiagnosticQueue::with_config(config);
        for error in &self.errors {
            queue.add_with_source(error.to_diagnostic(interner), source, &table);
        }

        let suppressed = queue.suppressed_count();
        let limit = queue.config().error_limit;
        let mut diagnostics = queue.flush();
        if suppressed > 0 {
            let span = self.errors.last().map_or(Span::DUMMY, ResolveError::span);
            diagnostics.push(too_many_errors(limit, suppressed, span));
        }
        diagnostics
    }
}

/// Resolve one file.
///
/// Annotates `ast` in place with expression types, identifier symbols,
/// scopes and control-transfer targets. Re-resolving an annotated tree
/// overwrites the annotations and yields an equal [`FileResolution`].
///
/// # Errors
///
/// Returns [`InternalError`] only for a malformed tree, such as a function
/// whose body is not a block.
#[tracing::instrument(level = "debug", skip_all, fields(items = ast.items().len()))]
pub fn resolve_file(
    ast: &mut Ast,
    interner: &StringInterner,
) -> Result<FileResolution, InternalError> {
    let mut resolver = resolver::Resolver::new(ast, interner);
    resolver.resolve_items()?;
    let (scopes, errors) = resolver.finish();
    tracing::debug!(
        scopes = scopes.scope_count(),
        symbols = scopes.symbol_count(),
        errors = errors.len(),
        "resolved file"
    );
    Ok(FileResolution { scopes, errors })
}
