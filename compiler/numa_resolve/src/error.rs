//! Resolution errors.
//!
//! [`ResolveError`] covers everything wrong with the program being
//! resolved. Each is recorded and resolution continues with a fallback
//! type. [`InternalError`] means the AST itself is malformed; it aborts
//! the walk.

use std::fmt;

use numa_diagnostic::{Diagnostic, ErrorCode};
use numa_ir::{Name, Span, StringInterner, Type};
use numa_types::{ModifierError, TypeMismatch};

/// Where a value was checked for castability.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CastSite {
    Initializer,
    Assignment,
    /// Zero-based argument position.
    Argument(usize),
    Return,
    Condition,
}

impl fmt::Display for CastSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastSite::Initializer => f.write_str("initializer"),
            CastSite::Assignment => f.write_str("assigned value"),
            CastSite::Argument(index) => write!(f, "argument {}", index + 1),
            CastSite::Return => f.write_str("return value"),
            CastSite::Condition => f.write_str("condition"),
        }
    }
}

/// A declared type that may not carry `auto`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AutoSite {
    /// A declaration without an initializer.
    Declaration,
    Parameter,
    ReturnType,
}

/// A control-transfer statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Transfer {
    Next,
    Stop,
    Return,
}

impl Transfer {
    pub const fn keyword(self) -> &'static str {
        match self {
            Transfer::Next => "next",
            Transfer::Stop => "stop",
            Transfer::Return => "return",
        }
    }

    /// Constructs the statement may target.
    pub const fn targets(self) -> &'static str {
        match self {
            Transfer::Next => "loop",
            Transfer::Stop => "loop or switch",
            Transfer::Return => "function",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResolveError {
    // Names
    /// A name bound twice in one scope.
    Redefinition {
        span: Span,
        name: Name,
        previous: Span,
    },
    UndefinedSymbol {
        span: Span,
        name: Name,
        suggestion: Option<Name>,
    },

    // Types
    /// An operator rejected its operands.
    TypeMismatch { span: Span, mismatch: TypeMismatch },
    /// A `sweep` scrutinee or range boundary that is not `int` or `float`.
    SweepNotNumeric { span: Span, found: Type },
    /// A variable or parameter of type `void`.
    VoidVariable { span: Span, name: Name },
    /// An illegal modifier list on a declared type.
    ModifierComposition {
        span: Span,
        ty: Type,
        error: ModifierError,
    },
    /// `auto` with nothing to infer it from.
    AutoNotInferable { span: Span, site: AutoSite },
    NotCastable {
        span: Span,
        site: CastSite,
        expected: Type,
        found: Type,
    },
    /// An `auto` type reached a cast check.
    AutoUnresolved { span: Span, site: CastSite },

    // Functions
    /// `return;` in a function with a non-`void` return type.
    MissingReturnValue { span: Span, expected: Type },
    /// `return value;` in a `void` function.
    UnexpectedReturnValue { span: Span, found: Type },
    Arity {
        span: Span,
        name: Name,
        expected: usize,
        found: usize,
    },
    /// A call whose callee is not a function. `name` is `None` when the
    /// callee is not an identifier.
    NotCallable { span: Span, name: Option<Name> },
    /// A function name used as a value.
    SoleFunctionReference { span: Span, name: Name },

    // Statements
    /// Assignment or `++`/`--` applied to something other than an
    /// identifier.
    AssignmentTarget { span: Span },
    /// `next`/`stop`/`return` with no enclosing construct to bind to.
    ControlFlowBinding {
        span: Span,
        transfer: Transfer,
        crosses_function: bool,
    },
}

impl ResolveError {
    pub fn span(&self) -> Span {
        match self {
            ResolveError::Redefinition { span, .. }
            | ResolveError::UndefinedSymbol { span, .. }
            | ResolveError::TypeMismatch { span, .. }
            | ResolveError::SweepNotNumeric { span, .. }
            | ResolveError::VoidVariable { span, .. }
            | ResolveError::ModifierComposition { span, .. }
            | ResolveError::AutoNotInferable { span, .. }
            | ResolveError::NotCastable { span, .. }
            | ResolveError::AutoUnresolved { span, .. }
            | ResolveError::MissingReturnValue { span, .. }
            | ResolveError::UnexpectedReturnValue { span, .. }
            | ResolveError::Arity { span, .. }
            | ResolveError::NotCallable { span, .. }
            | ResolveError::SoleFunctionReference { span, .. }
            | ResolveError::AssignmentTarget { span }
            | ResolveError::ControlFlowBinding { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::TypeMismatch { .. }
            | ResolveError::SweepNotNumeric { .. }
            | ResolveError::VoidVariable { .. } => ErrorCode::E2001,
            ResolveError::ModifierComposition { .. } | ResolveError::AutoNotInferable { .. } => {
                ErrorCode::E2002
            }
            ResolveError::UndefinedSymbol { .. } => ErrorCode::E2003,
            ResolveError::Arity { .. } => ErrorCode::E2004,
            ResolveError::NotCastable { .. }
            | ResolveError::MissingReturnValue { .. }
            | ResolveError::UnexpectedReturnValue { .. } => ErrorCode::E2005,
            ResolveError::Redefinition { .. } => ErrorCode::E2006,
            ResolveError::NotCallable { .. } => ErrorCode::E2007,
            ResolveError::SoleFunctionReference { .. } => ErrorCode::E2008,
            ResolveError::AssignmentTarget { .. } => ErrorCode::E2009,
            ResolveError::AutoUnresolved { .. } => ErrorCode::E2010,
            ResolveError::ControlFlowBinding { .. } => ErrorCode::E2011,
        }
    }

    /// Convert this error to a diagnostic, resolving names through
    /// `interner`.
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            ResolveError::Redefinition {
                span,
                name,
                previous,
            } => {
                let name = interner.lookup(*name);
                diag.with_message(format!("`{name}` is already defined in this scope"))
                    .with_label(*span, "redefined here")
                    .with_secondary_label(*previous, format!("first definition of `{name}`"))
            }

            ResolveError::UndefinedSymbol {
                span,
                name,
                suggestion,
            } => {
                let name = interner.lookup(*name);
                let diag = diag
                    .with_message(format!("cannot find `{name}` in this scope"))
                    .with_label(*span, "not found");
                match suggestion {
                    Some(similar) => {
                        diag.with_suggestion(format!("did you mean `{}`?", interner.lookup(*similar)))
                    }
                    None => diag,
                }
            }

            ResolveError::TypeMismatch { span, mismatch } => diag
                .with_message(mismatch.reason.message())
                .with_label(*span, mismatch.operands()),

            ResolveError::SweepNotNumeric { span, found } => diag
                .with_message("sweep requires `int` or `float` values")
                .with_label(*span, format!("found `{found}`")),

            ResolveError::VoidVariable { span, name } => diag
                .with_message(format!("`{}` cannot have type `void`", interner.lookup(*name)))
                .with_label(*span, "declared here"),

            ResolveError::ModifierComposition { span, ty, error } => diag
                .with_message(format!("invalid modifiers on `{ty}`"))
                .with_label(*span, error.to_string()),

            ResolveError::AutoNotInferable { span, site } => {
                let (message, label) = match site {
                    AutoSite::Declaration => (
                        "`auto` declaration requires an initializer",
                        "nothing to infer the type from",
                    ),
                    AutoSite::Parameter => ("parameters cannot be `auto`", "declared `auto` here"),
                    AutoSite::ReturnType => {
                        ("return types cannot be `auto`", "declared `auto` here")
                    }
                };
                diag.with_message(message).with_label(*span, label)
            }

            ResolveError::NotCastable {
                span,
                site,
                expected,
                found,
            } => diag
                .with_message(format!("{site} of type `{found}` is not castable to `{expected}`"))
                .with_label(*span, format!("expected `{expected}`")),

            ResolveError::AutoUnresolved { span, site } => diag
                .with_message(format!("unresolved `auto` type in {site}"))
                .with_label(*span, "type must be known here"),

            ResolveError::MissingReturnValue { span, expected } => diag
                .with_message("missing return value")
                .with_label(*span, format!("function returns `{expected}`")),

            ResolveError::UnexpectedReturnValue { span, found } => diag
                .with_message("return value in a function returning `void`")
                .with_label(*span, format!("returns `{found}`")),

            ResolveError::Arity {
                span,
                name,
                expected,
                found,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                diag.with_message(format!(
                    "`{}` takes {expected} argument{plural} but {found} were supplied",
                    interner.lookup(*name)
                ))
                .with_label(*span, format!("expected {expected}"))
            }

            ResolveError::NotCallable { span, name } => {
                let message = match name {
                    Some(name) => format!("`{}` is not a function", interner.lookup(*name)),
                    None => "expression is not callable".to_string(),
                };
                diag.with_message(message).with_label(*span, "called here")
            }

            ResolveError::SoleFunctionReference { span, name } => diag
                .with_message(format!(
                    "function `{}` used as a value",
                    interner.lookup(*name)
                ))
                .with_label(*span, "functions can only be called")
                .with_suggestion("add an argument list to call it"),

            ResolveError::AssignmentTarget { span } => diag
                .with_message("invalid assignment target")
                .with_label(*span, "not a variable"),

            ResolveError::ControlFlowBinding {
                span,
                transfer,
                crosses_function,
            } => {
                let diag = diag
                    .with_message(format!(
                        "`{}` used outside {}",
                        transfer.keyword(),
                        transfer.targets()
                    ))
                    .with_label(*span, format!("no enclosing {}", transfer.targets()));
                if *crosses_function {
                    diag.with_note("control cannot leave a function body through `next` or `stop`")
                } else {
                    diag
                }
            }
        }
    }
}

/// A malformed AST. Only an upstream producer bug leads here.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum InternalError {
    #[error("function body at {span:?} is not a block")]
    FunctionBodyNotBlock { span: Span },
    #[error("expected an identifier at {span:?}")]
    ExpectedIdent { span: Span },
    #[error("`for` initializer at {span:?} is neither a declaration nor an expression")]
    BadForInit { span: Span },
    #[error("{depth} interrupt frames still open after the walk")]
    UnbalancedFrames { depth: usize },
}

impl InternalError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(ErrorCode::E9001).with_message(self.to_string());
        match self {
            InternalError::FunctionBodyNotBlock { span }
            | InternalError::ExpectedIdent { span }
            | InternalError::BadForInit { span } => diag.with_label(*span, "malformed node"),
            InternalError::UnbalancedFrames { .. } => diag,
        }
    }
}
