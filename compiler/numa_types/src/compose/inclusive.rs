//! Truth tables for the inclusive categories.
//!
//! Applied after the exclusive result is known, for `+ - * / %` only.
//! Each category either resolves to one modifier or drops out of the
//! result; it never makes an operation fail.

use numa_ir::{BinaryOp, BuiltinType, Modifier, Type};

use crate::category::{inclusive_modifier, ModifierCategory};

fn sign(op: BinaryOp, left: Option<Modifier>, right: Option<Modifier>) -> Option<Modifier> {
    let (a, b) = (left?, right?);
    match op {
        BinaryOp::Mul | BinaryOp::Div => Some(if a == b {
            Modifier::Positive
        } else {
            Modifier::Negative
        }),
        BinaryOp::Add | BinaryOp::Sub => (a == b).then_some(a),
        _ => None,
    }
}

fn nonzero(op: BinaryOp, left: bool, right: bool) -> Option<Modifier> {
    (matches!(op, BinaryOp::Mul | BinaryOp::Div) && left && right).then_some(Modifier::NonZero)
}

fn parity(op: BinaryOp, left: Option<Modifier>, right: Option<Modifier>) -> Option<Modifier> {
    use Modifier::{Even, Odd};
    match (op, left, right) {
        (BinaryOp::Mul, Some(Even), _) | (BinaryOp::Mul, _, Some(Even)) => Some(Even),
        (BinaryOp::Mul, Some(Odd), Some(Odd)) => Some(Odd),
        (BinaryOp::Mod, Some(Odd), Some(Even)) => Some(Odd),
        (BinaryOp::Mod, Some(Even), Some(Even)) => Some(Even),
        (BinaryOp::Add | BinaryOp::Sub, Some(a), Some(b)) => {
            Some(if a == b { Even } else { Odd })
        }
        _ => None,
    }
}

/// Append the inclusive modifiers of `left op right` in canonical order:
/// sign, nonzero, parity.
pub(crate) fn compose(
    op: BinaryOp,
    left: &Type,
    right: &Type,
    result: BuiltinType,
    out: &mut Vec<Modifier>,
) {
    if !crate::accepts_modifiers(result) {
        return;
    }
    let sign = sign(
        op,
        inclusive_modifier(left, ModifierCategory::Sign),
        inclusive_modifier(right, ModifierCategory::Sign),
    );
    let nonzero = nonzero(
        op,
        left.has_modifier(Modifier::NonZero),
        right.has_modifier(Modifier::NonZero),
    );
    let parity = if result == BuiltinType::Int {
        parity(
            op,
            inclusive_modifier(left, ModifierCategory::Parity),
            inclusive_modifier(right, ModifierCategory::Parity),
        )
    } else {
        None
    };
    out.extend(sign);
    out.extend(nonzero);
    out.extend(parity);
}
