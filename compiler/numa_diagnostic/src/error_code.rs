//! Error codes for all resolver diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2001`) with the first digit
//! indicating the compiler phase.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E2xxx: Resolution and type errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum ErrorCode {
    // Resolution Errors (E2xxx)
    /// Operator applied to incompatible types or units
    E2001,
    /// Invalid modifier combination on a declared type
    E2002,
    /// Undefined symbol
    E2003,
    /// Argument count mismatch
    E2004,
    /// Value not castable to the expected type
    E2005,
    /// Duplicate definition in one scope
    E2006,
    /// Call of something that is not a function
    E2007,
    /// Function name used as a value
    E2008,
    /// Left side of assignment is not assignable
    E2009,
    /// `auto` type left unresolved
    E2010,
    /// `next`/`stop`/`return` with no enclosing target
    E2011,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E2011,
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Short description, used as a fallback message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "type mismatch",
            ErrorCode::E2002 => "invalid modifier combination",
            ErrorCode::E2003 => "undefined symbol",
            ErrorCode::E2004 => "wrong number of arguments",
            ErrorCode::E2005 => "value is not castable",
            ErrorCode::E2006 => "duplicate definition",
            ErrorCode::E2007 => "not callable",
            ErrorCode::E2008 => "function used as a value",
            ErrorCode::E2009 => "invalid assignment target",
            ErrorCode::E2010 => "unresolved `auto` type",
            ErrorCode::E2011 => "misplaced control transfer",
            ErrorCode::E9001 => "internal compiler error",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Check if this is a resolution error (E2xxx range).
    pub fn is_resolve_error(&self) -> bool {
        !self.is_internal_error()
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
