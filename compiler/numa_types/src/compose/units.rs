//! Exclusive-category composition under `* /` and the unit rows behind it.
//!
//! A category pairing must appear in [`PRODUCTS`] or [`QUOTIENTS`] to be
//! legal at all. The concrete result unit then comes from [`UNIT_PRODUCTS`];
//! division rows are read off the same table backwards (`a / b = c` exactly
//! when `c * b = a`). A legal pairing with no matching unit row is rejected
//! rather than converted.

use numa_ir::Modifier;

use crate::category::{category_of, ModifierCategory};
use crate::error::MismatchReason;

use ModifierCategory as C;

/// `(left, right, result)` category rules for multiplication.
pub const PRODUCTS: &[(ModifierCategory, ModifierCategory, ModifierCategory)] = &[
    (C::Distance, C::Distance, C::Area),
    (C::Distance, C::Area, C::Volume),
    (C::Area, C::Distance, C::Volume),
    (C::Velocity, C::Time, C::Distance),
    (C::Time, C::Velocity, C::Distance),
    (C::Acceleration, C::Time, C::Velocity),
    (C::Time, C::Acceleration, C::Velocity),
    (C::Mass, C::Acceleration, C::Force),
    (C::Acceleration, C::Mass, C::Force),
    (C::Percent, C::Percent, C::Percent),
];

/// `(left, right, result)` category rules for division.
pub const QUOTIENTS: &[(ModifierCategory, ModifierCategory, ModifierCategory)] = &[
    (C::Distance, C::Time, C::Velocity),
    (C::Velocity, C::Time, C::Acceleration),
    (C::Force, C::Mass, C::Acceleration),
    (C::Force, C::Acceleration, C::Mass),
    (C::Volume, C::Area, C::Distance),
    (C::Volume, C::Distance, C::Area),
    (C::Area, C::Distance, C::Distance),
    (C::Percent, C::Percent, C::Percent),
];

/// `(a, b, a * b)`. Multiplication is commutative, so each pair is listed
/// once.
pub const UNIT_PRODUCTS: &[(Modifier, Modifier, Modifier)] = &[
    (Modifier::Meter, Modifier::Meter, Modifier::SquareMeter),
    (Modifier::Millimeter, Modifier::Millimeter, Modifier::SquareMillimeter),
    (Modifier::Centimeter, Modifier::Centimeter, Modifier::SquareCentimeter),
    (Modifier::Kilometer, Modifier::Kilometer, Modifier::SquareKilometer),
    (Modifier::Foot, Modifier::Foot, Modifier::SquareFoot),
    (Modifier::Inch, Modifier::Inch, Modifier::SquareInch),
    (Modifier::Centimeter, Modifier::SquareCentimeter, Modifier::Milliliter),
    (Modifier::Meter, Modifier::SquareMeter, Modifier::Kiloliter),
    (Modifier::MetersPerSecond, Modifier::Second, Modifier::Meter),
    (Modifier::FeetPerSecond, Modifier::Second, Modifier::Foot),
    (Modifier::MetersPerSecondSquared, Modifier::Second, Modifier::MetersPerSecond),
    (Modifier::Kilogram, Modifier::MetersPerSecondSquared, Modifier::Newton),
    (Modifier::Percent, Modifier::Percent, Modifier::Percent),
    (Modifier::XPercent, Modifier::XPercent, Modifier::XPercent),
];

fn has_rule(
    table: &[(ModifierCategory, ModifierCategory, ModifierCategory)],
    left: ModifierCategory,
    right: ModifierCategory,
) -> bool {
    table.iter().any(|&(l, r, _)| l == left && r == right)
}

/// Concrete unit of `a * b`.
pub fn unit_product(a: Modifier, b: Modifier) -> Option<Modifier> {
    UNIT_PRODUCTS.iter().find_map(|&(x, y, product)| {
        ((x == a && y == b) || (x == b && y == a)).then_some(product)
    })
}

/// Concrete unit of `a / b`.
pub fn unit_quotient(a: Modifier, b: Modifier) -> Option<Modifier> {
    UNIT_PRODUCTS.iter().find_map(|&(x, y, product)| {
        if product != a {
            None
        } else if y == b {
            Some(x)
        } else if x == b {
            Some(y)
        } else {
            None
        }
    })
}

/// Exclusive modifier of `left * right`.
pub(crate) fn multiply(
    left: Option<Modifier>,
    right: Option<Modifier>,
) -> Result<Option<Modifier>, MismatchReason> {
    match (left, right) {
        (None, None) => Ok(None),
        (Some(unit), None) | (None, Some(unit)) => Ok(Some(unit)),
        (Some(a), Some(b)) => {
            if !has_rule(PRODUCTS, category_of(a), category_of(b)) {
                return Err(MismatchReason::NoCategoryRule);
            }
            unit_product(a, b)
                .map(Some)
                .ok_or(MismatchReason::IncompatibleUnits)
        }
    }
}

/// Exclusive modifier of `left / right`.
pub(crate) fn divide(
    left: Option<Modifier>,
    right: Option<Modifier>,
) -> Result<Option<Modifier>, MismatchReason> {
    match (left, right) {
        (None, None) => Ok(None),
        (Some(unit), None) => Ok(Some(unit)),
        (None, Some(_)) => Err(MismatchReason::ScalarDividend),
        (Some(a), Some(b)) => {
            if !has_rule(QUOTIENTS, category_of(a), category_of(b)) {
                return Err(MismatchReason::NoCategoryRule);
            }
            unit_quotient(a, b)
                .map(Some)
                .ok_or(MismatchReason::IncompatibleUnits)
        }
    }
}

/// Exclusive modifier shared by both sides of `+ -` and comparisons.
pub(crate) fn matching(
    left: Option<Modifier>,
    right: Option<Modifier>,
) -> Result<Option<Modifier>, MismatchReason> {
    match (left, right) {
        (None, None) => Ok(None),
        (Some(a), Some(b)) if a == b => Ok(Some(a)),
        (Some(a), Some(b)) if category_of(a) == category_of(b) => {
            Err(MismatchReason::UnitMismatch)
        }
        _ => Err(MismatchReason::CategoryMismatch),
    }
}
