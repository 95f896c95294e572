//! Type and modifier algebra.
//!
//! Pure functions over [`numa_ir::Type`]:
//!
//! - [`category`]: which category each modifier belongs to
//! - [`validate_type`]: which modifier lists are legal on a declared type
//! - [`compose`]: the result type of each operator, unit by unit
//! - [`check_cast`]: the one-directional castability relation used for
//!   initializers, assignment, arguments and return values
//!
//! All tables are static; nothing here allocates state or reports
//! diagnostics. Callers map the returned errors onto their own reporting.

mod cast;
pub mod category;
pub mod compose;
mod error;
mod validate;

pub use cast::{check_cast, is_castable, CastError};
pub use category::{
    category_of, classify, exclusive_category_of, exclusive_modifier, CategorySet, ModifierCategory,
};
pub use compose::{compose_assignment, compose_binary, compose_index, compose_unary, AssignError};
pub use error::{MismatchReason, ModifierError, TypeMismatch};
pub use validate::validate_type;

use numa_ir::BuiltinType;

/// Promotion rank along `bool < char < int < float`; `None` for builtins
/// that take no part in arithmetic.
pub fn numeric_rank(builtin: BuiltinType) -> Option<u8> {
    match builtin {
        BuiltinType::Bool => Some(0),
        BuiltinType::Char => Some(1),
        BuiltinType::Int => Some(2),
        BuiltinType::Float => Some(3),
        BuiltinType::Void | BuiltinType::Str => None,
    }
}

/// Check if a builtin takes part in numeric promotion.
pub fn is_numeric(builtin: BuiltinType) -> bool {
    numeric_rank(builtin).is_some()
}

/// Check if a builtin is numeric and not `float`.
pub fn is_integral(builtin: BuiltinType) -> bool {
    matches!(
        builtin,
        BuiltinType::Bool | BuiltinType::Char | BuiltinType::Int
    )
}

/// Check if a builtin may carry modifiers.
pub fn accepts_modifiers(builtin: BuiltinType) -> bool {
    matches!(builtin, BuiltinType::Int | BuiltinType::Float)
}
