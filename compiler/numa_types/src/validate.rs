//! Declared-type validation.

use numa_ir::{BuiltinType, Modifier, Type};

use crate::accepts_modifiers;
use crate::category::{category_of, ModifierCategory};
use crate::error::ModifierError;

/// Every modifier-list violation on a declared type.
///
/// Empty means the type is legal. A non-numeric builtin with modifiers
/// reports only that, since nothing else about the list is meaningful.
pub fn validate_type(ty: &Type) -> Vec<ModifierError> {
    if ty.modifiers.is_empty() {
        return Vec::new();
    }
    if !accepts_modifiers(ty.builtin) {
        return vec![ModifierError::NonNumeric {
            builtin: ty.builtin,
        }];
    }

    let mut errors = Vec::new();
    let mut seen: Vec<Modifier> = Vec::with_capacity(ty.modifiers.len());
    let mut by_category: Vec<(ModifierCategory, Modifier)> = Vec::new();

    for &modifier in &ty.modifiers {
        if seen.contains(&modifier) {
            errors.push(ModifierError::Duplicate { modifier });
            continue;
        }
        seen.push(modifier);

        let category = category_of(modifier);
        match by_category.iter().find(|(c, _)| *c == category) {
            Some(&(_, first)) => errors.push(ModifierError::SameCategory {
                category,
                first,
                second: modifier,
            }),
            None => by_category.push((category, modifier)),
        }
    }

    if seen.contains(&Modifier::Auto) && seen.len() > 1 {
        errors.push(ModifierError::AutoCombined);
    }

    let mut exclusive = by_category
        .iter()
        .map(|&(category, _)| category)
        .filter(|category| category.is_exclusive());
    if let (Some(first), Some(second)) = (exclusive.next(), exclusive.next()) {
        errors.push(ModifierError::ExclusiveConflict { first, second });
    }

    if ty.builtin == BuiltinType::Float
        && by_category
            .iter()
            .any(|&(category, _)| category == ModifierCategory::Parity)
    {
        errors.push(ModifierError::ParityOnFloat);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn int(modifiers: &[Modifier]) -> Type {
        Type::with_modifiers(BuiltinType::Int, modifiers)
    }

    #[test]
    fn test_legal_types() {
        assert!(validate_type(&Type::STR).is_empty());
        assert!(validate_type(&int(&[Modifier::Meter, Modifier::Even, Modifier::Positive, Modifier::NonZero])).is_empty());
        assert!(validate_type(&int(&[Modifier::Auto])).is_empty());
        assert!(validate_type(&Type::with_modifiers(BuiltinType::Float, [Modifier::Percent])).is_empty());
    }

    #[test]
    fn test_modifiers_on_non_numeric() {
        let ty = Type::with_modifiers(BuiltinType::Str, [Modifier::Meter, Modifier::Meter]);
        assert_eq!(
            validate_type(&ty),
            vec![ModifierError::NonNumeric {
                builtin: BuiltinType::Str
            }]
        );
    }

    #[test]
    fn test_duplicate_modifier() {
        assert_eq!(
            validate_type(&int(&[Modifier::NonZero, Modifier::NonZero])),
            vec![ModifierError::Duplicate {
                modifier: Modifier::NonZero
            }]
        );
    }

    #[test]
    fn test_same_category() {
        assert_eq!(
            validate_type(&int(&[Modifier::Even, Modifier::Odd])),
            vec![ModifierError::SameCategory {
                category: ModifierCategory::Parity,
                first: Modifier::Even,
                second: Modifier::Odd,
            }]
        );
        assert_eq!(
            validate_type(&int(&[Modifier::Meter, Modifier::Kilometer])),
            vec![ModifierError::SameCategory {
                category: ModifierCategory::Distance,
                first: Modifier::Meter,
                second: Modifier::Kilometer,
            }]
        );
    }

    #[test]
    fn test_exclusive_conflict() {
        assert_eq!(
            validate_type(&int(&[Modifier::Meter, Modifier::Second])),
            vec![ModifierError::ExclusiveConflict {
                first: ModifierCategory::Distance,
                second: ModifierCategory::Time,
            }]
        );
    }

    #[test]
    fn test_auto_with_others() {
        assert_eq!(
            validate_type(&int(&[Modifier::Auto, Modifier::Positive])),
            vec![ModifierError::AutoCombined]
        );
    }

    #[test]
    fn test_parity_on_float() {
        let ty = Type::with_modifiers(BuiltinType::Float, [Modifier::Odd]);
        assert_eq!(validate_type(&ty), vec![ModifierError::ParityOnFloat]);
    }
}
