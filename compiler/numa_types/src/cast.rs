//! Castability: may a value of type `src` be stored where `dest` is expected?
//!
//! Used for initializers, assignment, arguments and return values. The
//! relation is one-directional and weaker than type equality:
//!
//! 1. `auto` on either side is never castable (it should have been
//!    resolved by then).
//! 2. The builtins must be equal or one of the widening pairs
//!    `float <- int`, `int <- char`, `bool <- any value`.
//! 3. A source without modifiers is accepted as is; otherwise both sides
//!    must carry the same concrete exclusive unit. Inclusive modifiers are
//!    not checked.

use std::fmt;

use numa_ir::{BuiltinType, Modifier, Type};

use crate::category::exclusive_modifier;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CastError {
    /// An `auto` type reached a cast check unresolved.
    AutoUnresolved,
    NotCastable,
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastError::AutoUnresolved => f.write_str("unresolved `auto` type is not castable"),
            CastError::NotCastable => f.write_str("type is not castable"),
        }
    }
}

fn builtin_castable(dest: BuiltinType, src: BuiltinType) -> bool {
    dest == src
        || matches!(
            (dest, src),
            (BuiltinType::Float, BuiltinType::Int)
                | (BuiltinType::Int, BuiltinType::Char)
                | (
                    BuiltinType::Bool,
                    BuiltinType::Int | BuiltinType::Float | BuiltinType::Char | BuiltinType::Str
                )
        )
}

/// Check whether `src` may be stored into `dest`.
pub fn check_cast(dest: &Type, src: &Type) -> Result<(), CastError> {
    if dest.has_modifier(Modifier::Auto) || src.has_modifier(Modifier::Auto) {
        return Err(CastError::AutoUnresolved);
    }
    if dest.same_as(src) {
        return Ok(());
    }
    if !builtin_castable(dest.builtin, src.builtin) {
        return Err(CastError::NotCastable);
    }
    if src.modifiers.is_empty() || exclusive_modifier(dest) == exclusive_modifier(src) {
        Ok(())
    } else {
        Err(CastError::NotCastable)
    }
}

pub fn is_castable(dest: &Type, src: &Type) -> bool {
    check_cast(dest, src).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ty(builtin: BuiltinType, modifiers: &[Modifier]) -> Type {
        Type::with_modifiers(builtin, modifiers)
    }

    #[test]
    fn test_identical_types() {
        let meters = ty(BuiltinType::Int, &[Modifier::Meter, Modifier::Even]);
        let reordered = ty(BuiltinType::Int, &[Modifier::Even, Modifier::Meter]);
        assert_eq!(check_cast(&meters, &reordered), Ok(()));
        assert!(is_castable(&Type::VOID, &Type::VOID));
    }

    #[test]
    fn test_widening_pairs() {
        assert!(is_castable(&Type::FLOAT, &Type::INT));
        assert!(is_castable(&Type::INT, &Type::CHAR));
        for src in [Type::INT, Type::FLOAT, Type::BOOL, Type::CHAR, Type::STR] {
            assert!(is_castable(&Type::BOOL, &src), "bool <- {src}");
        }
        assert!(!is_castable(&Type::INT, &Type::FLOAT));
        assert!(!is_castable(&Type::CHAR, &Type::INT));
        assert!(!is_castable(&Type::STR, &Type::CHAR));
        assert!(!is_castable(&Type::BOOL, &Type::VOID));
    }

    #[test]
    fn test_bare_source_is_accepted() {
        let meters = ty(BuiltinType::Float, &[Modifier::Meter]);
        assert!(is_castable(&meters, &Type::INT));
        assert!(is_castable(&meters, &Type::FLOAT));
    }

    #[test]
    fn test_units_must_match() {
        let meters = ty(BuiltinType::Int, &[Modifier::Meter]);
        let km = ty(BuiltinType::Int, &[Modifier::Kilometer]);
        let float_meters = ty(BuiltinType::Float, &[Modifier::Meter]);
        assert_eq!(check_cast(&meters, &km), Err(CastError::NotCastable));
        assert_eq!(check_cast(&Type::INT, &meters), Err(CastError::NotCastable));
        assert!(is_castable(&float_meters, &meters));
    }

    #[test]
    fn test_inclusive_modifiers_ignored() {
        let positive = ty(BuiltinType::Int, &[Modifier::Positive]);
        let negative_even = ty(BuiltinType::Int, &[Modifier::Negative, Modifier::Even]);
        assert!(is_castable(&positive, &negative_even));
        assert!(is_castable(&Type::INT, &negative_even));
    }

    #[test]
    fn test_auto_is_never_castable() {
        let auto = ty(BuiltinType::Int, &[Modifier::Auto]);
        assert_eq!(check_cast(&auto, &Type::INT), Err(CastError::AutoUnresolved));
        assert_eq!(check_cast(&Type::INT, &auto), Err(CastError::AutoUnresolved));
        assert_eq!(check_cast(&auto, &auto), Err(CastError::AutoUnresolved));
    }
}
