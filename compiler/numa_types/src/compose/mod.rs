//! Result types of operators.
//!
//! Binary arithmetic runs in three steps: promote the builtins, combine the
//! exclusive units (see [`units`]), then fold in the inclusive modifiers
//! (see `inclusive`). Comparisons and logical operators always yield a bare
//! `bool` once their operands are accepted.

mod inclusive;
pub mod units;

#[cfg(test)]
mod tests;

use numa_ir::{BinaryOp, BuiltinType, Modifier, Type, UnaryOp};

use crate::cast::{check_cast, CastError};
use crate::category::{category_of, exclusive_modifier, ModifierCategory};
use crate::error::{MismatchReason, TypeMismatch};
use crate::{is_integral, numeric_rank};

/// Widest of two numeric builtins.
pub fn promote(left: BuiltinType, right: BuiltinType) -> Option<BuiltinType> {
    let (l, r) = (numeric_rank(left)?, numeric_rank(right)?);
    Some(if l >= r { left } else { right })
}

/// Result type of `left op right`.
///
/// Assignment operators yield the left type; the stored value's
/// castability is checked by [`compose_assignment`].
pub fn compose_binary(op: BinaryOp, left: &Type, right: &Type) -> Result<Type, TypeMismatch> {
    let mismatch = |reason| TypeMismatch::binary(op.as_symbol(), left, right, reason);

    match op {
        BinaryOp::Add
        | BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::Exp => arithmetic(op, left, right).map_err(mismatch),

        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            if promote(left.builtin, right.builtin).is_none() {
                return Err(mismatch(MismatchReason::NotNumeric));
            }
            units::matching(exclusive_modifier(left), exclusive_modifier(right))
                .map_err(mismatch)?;
            Ok(Type::BOOL)
        }

        BinaryOp::Eq | BinaryOp::NotEq => {
            units::matching(exclusive_modifier(left), exclusive_modifier(right))
                .map_err(mismatch)?;
            Ok(Type::BOOL)
        }

        BinaryOp::And | BinaryOp::Or => Ok(Type::BOOL),

        BinaryOp::PercentScale | BinaryOp::Markup | BinaryOp::Markdown => {
            if promote(left.builtin, right.builtin).is_none() {
                return Err(mismatch(MismatchReason::NotNumeric));
            }
            match exclusive_modifier(right).map(category_of) {
                None | Some(ModifierCategory::Percent) => Ok(left.clone()),
                Some(_) => Err(mismatch(MismatchReason::NumanticOperand)),
            }
        }

        BinaryOp::Assign => Ok(left.clone()),
        BinaryOp::AddAssign
        | BinaryOp::SubAssign
        | BinaryOp::MulAssign
        | BinaryOp::DivAssign
        | BinaryOp::ModAssign => {
            if let Some(base) = op.compound_base() {
                compose_binary(base, left, right)?;
            }
            Ok(left.clone())
        }
    }
}

fn arithmetic(op: BinaryOp, left: &Type, right: &Type) -> Result<Type, MismatchReason> {
    let (l_str, r_str) = (left.builtin == BuiltinType::Str, right.builtin == BuiltinType::Str);
    if op == BinaryOp::Add && (l_str || r_str) {
        return if l_str && r_str {
            Ok(Type::STR)
        } else {
            Err(MismatchReason::StringConcat)
        };
    }

    let builtin = promote(left.builtin, right.builtin).ok_or(MismatchReason::NotNumeric)?;
    let (l_unit, r_unit) = (exclusive_modifier(left), exclusive_modifier(right));

    let unit = match op {
        BinaryOp::Mul => units::multiply(l_unit, r_unit)?,
        BinaryOp::Div => units::divide(l_unit, r_unit)?,
        // Both sides integral, or both float; a float never mixes into an
        // integral `%` or `^`.
        BinaryOp::Mod | BinaryOp::Exp => {
            if l_unit.is_some() || r_unit.is_some() {
                return Err(MismatchReason::CategorizedOperand);
            }
            if is_integral(left.builtin) != is_integral(right.builtin) {
                return Err(MismatchReason::IntegralMismatch);
            }
            None
        }
        _ => units::matching(l_unit, r_unit)?,
    };

    let mut modifiers: Vec<Modifier> = unit.into_iter().collect();
    if op != BinaryOp::Exp {
        inclusive::compose(op, left, right, builtin, &mut modifiers);
    }
    Ok(Type::with_modifiers(builtin, modifiers))
}

/// Why an assignment was rejected.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignError {
    /// The arithmetic of a compound assignment failed.
    Mismatch(TypeMismatch),
    /// The stored value does not cast to the target.
    Cast(CastError),
}

/// Type of `left = right` or a compound `left op= right`.
///
/// A compound assignment resolves as `left = left op right`. The result is
/// always the left type.
pub fn compose_assignment(op: BinaryOp, left: &Type, right: &Type) -> Result<Type, AssignError> {
    let value = match op.compound_base() {
        Some(base) => compose_binary(base, left, right).map_err(AssignError::Mismatch)?,
        None => right.clone(),
    };
    check_cast(left, &value).map_err(AssignError::Cast)?;
    Ok(left.clone())
}

/// Result type of a unary operator.
pub fn compose_unary(op: UnaryOp, operand: &Type) -> Result<Type, TypeMismatch> {
    let mismatch = |reason| TypeMismatch::unary(op.as_symbol(), operand, reason);

    match op {
        UnaryOp::Not => Ok(Type::BOOL),
        UnaryOp::Plus => {
            numeric_rank(operand.builtin).ok_or_else(|| mismatch(MismatchReason::NotNumeric))?;
            Ok(operand.clone())
        }
        UnaryOp::Neg => {
            numeric_rank(operand.builtin).ok_or_else(|| mismatch(MismatchReason::NotNumeric))?;
            let modifiers = operand
                .modifiers
                .iter()
                .map(|&m| match m {
                    Modifier::Positive => Modifier::Negative,
                    Modifier::Negative => Modifier::Positive,
                    other => other,
                })
                .collect::<Vec<_>>();
            Ok(Type::with_modifiers(operand.builtin, modifiers))
        }
        UnaryOp::PreIncrement
        | UnaryOp::PostIncrement
        | UnaryOp::PreDecrement
        | UnaryOp::PostDecrement => {
            if !is_integral(operand.builtin) {
                return Err(mismatch(MismatchReason::NotIntegral));
            }
            let kept_sign = if op.is_increment() {
                Modifier::Positive
            } else {
                Modifier::Negative
            };
            let modifiers = operand
                .modifiers
                .iter()
                .filter_map(|&m| match m {
                    Modifier::NonZero => None,
                    Modifier::Positive | Modifier::Negative => (m == kept_sign).then_some(m),
                    Modifier::Even => Some(Modifier::Odd),
                    Modifier::Odd => Some(Modifier::Even),
                    other => Some(other),
                })
                .collect::<Vec<_>>();
            Ok(Type::with_modifiers(operand.builtin, modifiers))
        }
    }
}

/// Result type of `array[index]`: only `string[integral]`, yielding `char`.
pub fn compose_index(array: &Type, index: &Type) -> Result<Type, TypeMismatch> {
    let mismatch = |reason| TypeMismatch::binary("[]", array, index, reason);
    if array.builtin != BuiltinType::Str {
        return Err(mismatch(MismatchReason::NotIndexable));
    }
    if !is_integral(index.builtin) {
        return Err(mismatch(MismatchReason::BadIndex));
    }
    Ok(Type::CHAR)
}
