//! Index newtypes and list ranges for the flat AST and the scope arena.
//!
//! Nodes reference each other by `u32` index into the arenas owned by
//! [`Ast`](crate::ast::Ast) instead of boxing. Scopes and symbols live in the
//! resolver's arena but are named here so the AST can carry them as
//! annotations.

use std::fmt;

macro_rules! define_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Position in the owning arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Id for the next slot of an arena currently holding `len` entries.
            ///
            /// # Panics
            /// Panics if the arena outgrows `u32` indexing.
            #[inline]
            pub fn from_len(len: usize) -> Self {
                match u32::try_from(len) {
                    Ok(index) => $name(index),
                    Err(_) => panic!(concat!(stringify!($name), " arena overflow")),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_index!(
    /// Index into the expression arena.
    ExprId
);
define_index!(
    /// Index into the statement arena.
    StmtId
);
define_index!(
    /// Index into the scope arena produced by resolution.
    ScopeId
);
define_index!(
    /// Index into the symbol arena produced by resolution.
    SymbolId
);

impl ScopeId {
    /// The file scope is always the first scope allocated.
    pub const ROOT: ScopeId = ScopeId(0);
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Slice bounds into the side list this range addresses.
            #[inline]
            pub const fn as_bounds(&self) -> std::ops::Range<usize> {
                self.start as usize..(self.start as usize + self.len as usize)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start + self.len
                )
            }
        }
    };
}

define_range!(
    /// Range of expressions in the expression list (call arguments).
    ExprRange
);
define_range!(
    /// Range of statements in the statement list (block bodies).
    StmtRange
);
define_range!(
    /// Range of `(expression, statement)` arms: elif, case and sweep arms.
    ArmRange
);
define_range!(
    /// Range of function parameters.
    ParamRange
);
