use pretty_assertions::assert_eq;

use super::*;
use crate::category::category_of;

fn int(modifiers: &[Modifier]) -> Type {
    Type::with_modifiers(BuiltinType::Int, modifiers)
}

fn float(modifiers: &[Modifier]) -> Type {
    Type::with_modifiers(BuiltinType::Float, modifiers)
}

fn reason(result: Result<Type, TypeMismatch>) -> Option<MismatchReason> {
    result.err().map(|e| e.reason)
}

// Promotion

#[test]
fn test_promotion_picks_widest() {
    assert_eq!(promote(BuiltinType::Int, BuiltinType::Float), Some(BuiltinType::Float));
    assert_eq!(promote(BuiltinType::Char, BuiltinType::Bool), Some(BuiltinType::Char));
    assert_eq!(promote(BuiltinType::Int, BuiltinType::Char), Some(BuiltinType::Int));
    assert_eq!(promote(BuiltinType::Str, BuiltinType::Int), None);
    assert_eq!(promote(BuiltinType::Void, BuiltinType::Void), None);
}

#[test]
fn test_plain_arithmetic() {
    assert_eq!(compose_binary(BinaryOp::Add, &Type::INT, &Type::INT), Ok(Type::INT));
    assert_eq!(compose_binary(BinaryOp::Mul, &Type::INT, &Type::FLOAT), Ok(Type::FLOAT));
    assert_eq!(compose_binary(BinaryOp::Sub, &Type::CHAR, &Type::INT), Ok(Type::INT));
    assert_eq!(
        reason(compose_binary(BinaryOp::Add, &Type::VOID, &Type::INT)),
        Some(MismatchReason::NotNumeric)
    );
}

#[test]
fn test_string_concatenation() {
    assert_eq!(compose_binary(BinaryOp::Add, &Type::STR, &Type::STR), Ok(Type::STR));
    assert_eq!(
        reason(compose_binary(BinaryOp::Add, &Type::STR, &Type::INT)),
        Some(MismatchReason::StringConcat)
    );
    assert_eq!(
        reason(compose_binary(BinaryOp::Sub, &Type::STR, &Type::STR)),
        Some(MismatchReason::NotNumeric)
    );
}

// Add / sub

#[test]
fn test_additive_keeps_matching_unit() {
    let seconds = int(&[Modifier::Second]);
    assert_eq!(compose_binary(BinaryOp::Add, &seconds, &seconds), Ok(seconds.clone()));
    assert_eq!(
        compose_binary(BinaryOp::Sub, &float(&[Modifier::Percent]), &int(&[Modifier::Percent])),
        Ok(float(&[Modifier::Percent]))
    );
}

#[test]
fn test_additive_rejects_mismatched_units() {
    let meters = int(&[Modifier::Meter]);
    assert_eq!(
        reason(compose_binary(BinaryOp::Add, &meters, &int(&[Modifier::Kilometer]))),
        Some(MismatchReason::UnitMismatch)
    );
    assert_eq!(
        reason(compose_binary(BinaryOp::Add, &meters, &int(&[Modifier::Second]))),
        Some(MismatchReason::CategoryMismatch)
    );
    assert_eq!(
        reason(compose_binary(BinaryOp::Sub, &meters, &Type::INT)),
        Some(MismatchReason::CategoryMismatch)
    );
}

// Multiplication

#[test]
fn test_distance_times_distance_is_area() {
    let meters = int(&[Modifier::Meter]);
    assert_eq!(
        compose_binary(BinaryOp::Mul, &meters, &meters),
        Ok(int(&[Modifier::SquareMeter]))
    );
    let feet = float(&[Modifier::Foot]);
    assert_eq!(
        compose_binary(BinaryOp::Mul, &feet, &feet),
        Ok(float(&[Modifier::SquareFoot]))
    );
}

#[test]
fn test_distance_times_area_is_volume() {
    let cm = int(&[Modifier::Centimeter]);
    let cm2 = int(&[Modifier::SquareCentimeter]);
    assert_eq!(compose_binary(BinaryOp::Mul, &cm, &cm2), Ok(int(&[Modifier::Milliliter])));
    assert_eq!(compose_binary(BinaryOp::Mul, &cm2, &cm), Ok(int(&[Modifier::Milliliter])));
    assert_eq!(
        compose_binary(
            BinaryOp::Mul,
            &int(&[Modifier::Meter]),
            &int(&[Modifier::SquareMeter])
        ),
        Ok(int(&[Modifier::Kiloliter]))
    );
}

#[test]
fn test_velocity_times_time_is_distance() {
    let mps = float(&[Modifier::MetersPerSecond]);
    let seconds = float(&[Modifier::Second]);
    assert_eq!(
        compose_binary(BinaryOp::Mul, &mps, &seconds),
        Ok(float(&[Modifier::Meter]))
    );
    assert_eq!(
        compose_binary(BinaryOp::Mul, &seconds, &mps),
        Ok(float(&[Modifier::Meter]))
    );
    assert_eq!(
        compose_binary(BinaryOp::Mul, &float(&[Modifier::FeetPerSecond]), &seconds),
        Ok(float(&[Modifier::Foot]))
    );
}

#[test]
fn test_acceleration_and_force_products() {
    let mps2 = float(&[Modifier::MetersPerSecondSquared]);
    assert_eq!(
        compose_binary(BinaryOp::Mul, &mps2, &float(&[Modifier::Second])),
        Ok(float(&[Modifier::MetersPerSecond]))
    );
    assert_eq!(
        compose_binary(BinaryOp::Mul, &float(&[Modifier::Kilogram]), &mps2),
        Ok(float(&[Modifier::Newton]))
    );
    assert_eq!(
        compose_binary(BinaryOp::Mul, &mps2, &float(&[Modifier::Kilogram])),
        Ok(float(&[Modifier::Newton]))
    );
}

#[test]
fn test_unit_times_scalar_keeps_unit() {
    let hours = int(&[Modifier::Hour]);
    assert_eq!(compose_binary(BinaryOp::Mul, &hours, &Type::INT), Ok(hours.clone()));
    assert_eq!(
        compose_binary(BinaryOp::Mul, &Type::FLOAT, &hours),
        Ok(float(&[Modifier::Hour]))
    );
    let pct = int(&[Modifier::Percent]);
    assert_eq!(compose_binary(BinaryOp::Mul, &pct, &pct), Ok(pct.clone()));
}

#[test]
fn test_multiplication_rejections() {
    assert_eq!(
        reason(compose_binary(
            BinaryOp::Mul,
            &int(&[Modifier::Kilometer]),
            &int(&[Modifier::Meter])
        )),
        Some(MismatchReason::IncompatibleUnits)
    );
    assert_eq!(
        reason(compose_binary(
            BinaryOp::Mul,
            &int(&[Modifier::Gram]),
            &int(&[Modifier::Gram])
        )),
        Some(MismatchReason::NoCategoryRule)
    );
    assert_eq!(
        reason(compose_binary(
            BinaryOp::Mul,
            &int(&[Modifier::Percent]),
            &int(&[Modifier::XPercent])
        )),
        Some(MismatchReason::IncompatibleUnits)
    );
}

// Division

#[test]
fn test_inverse_quotients() {
    let cases = [
        (Modifier::SquareMeter, Modifier::Meter, Modifier::Meter),
        (Modifier::SquareInch, Modifier::Inch, Modifier::Inch),
        (Modifier::Meter, Modifier::Second, Modifier::MetersPerSecond),
        (Modifier::Foot, Modifier::Second, Modifier::FeetPerSecond),
        (Modifier::MetersPerSecond, Modifier::Second, Modifier::MetersPerSecondSquared),
        (Modifier::Newton, Modifier::Kilogram, Modifier::MetersPerSecondSquared),
        (Modifier::Newton, Modifier::MetersPerSecondSquared, Modifier::Kilogram),
        (Modifier::Milliliter, Modifier::SquareCentimeter, Modifier::Centimeter),
        (Modifier::Milliliter, Modifier::Centimeter, Modifier::SquareCentimeter),
        (Modifier::Kiloliter, Modifier::Meter, Modifier::SquareMeter),
        (Modifier::Percent, Modifier::Percent, Modifier::Percent),
    ];
    for (a, b, expected) in cases {
        assert_eq!(
            compose_binary(BinaryOp::Div, &float(&[a]), &float(&[b])),
            Ok(float(&[expected])),
            "{a} / {b}"
        );
    }
}

#[test]
fn test_scalar_dividend_rejected() {
    let err = compose_binary(BinaryOp::Div, &Type::INT, &int(&[Modifier::Meter]));
    let Err(err) = err else {
        panic!("expected rejection");
    };
    assert_eq!(err.reason, MismatchReason::ScalarDividend);
    assert_eq!(err.reason.message(), "left side cannot be scalar in division");
    assert_eq!(err.operands(), "`int` / `int<meter>`");
}

#[test]
fn test_division_rejections() {
    assert_eq!(
        reason(compose_binary(
            BinaryOp::Div,
            &int(&[Modifier::Meter]),
            &int(&[Modifier::Meter])
        )),
        Some(MismatchReason::NoCategoryRule)
    );
    assert_eq!(
        reason(compose_binary(
            BinaryOp::Div,
            &int(&[Modifier::Kilometer]),
            &int(&[Modifier::Second])
        )),
        Some(MismatchReason::IncompatibleUnits)
    );
    assert_eq!(
        compose_binary(BinaryOp::Div, &int(&[Modifier::Day]), &Type::INT),
        Ok(int(&[Modifier::Day]))
    );
}

// Mod / exp

#[test]
fn test_mod_and_exp() {
    assert_eq!(compose_binary(BinaryOp::Mod, &Type::INT, &Type::CHAR), Ok(Type::INT));
    assert_eq!(compose_binary(BinaryOp::Exp, &Type::FLOAT, &Type::FLOAT), Ok(Type::FLOAT));
    assert_eq!(
        reason(compose_binary(BinaryOp::Exp, &Type::INT, &Type::FLOAT)),
        Some(MismatchReason::IntegralMismatch)
    );
    assert_eq!(
        reason(compose_binary(BinaryOp::Mod, &int(&[Modifier::Second]), &Type::INT)),
        Some(MismatchReason::CategorizedOperand)
    );
    assert_eq!(
        reason(compose_binary(BinaryOp::Exp, &Type::INT, &int(&[Modifier::Percent]))),
        Some(MismatchReason::CategorizedOperand)
    );
}

#[test]
fn test_float_mod_and_exp_stay_float() {
    assert_eq!(compose_binary(BinaryOp::Mod, &Type::FLOAT, &Type::FLOAT), Ok(Type::FLOAT));
    assert_eq!(compose_binary(BinaryOp::Exp, &Type::FLOAT, &Type::FLOAT), Ok(Type::FLOAT));
    for (left, right) in [(Type::INT, Type::FLOAT), (Type::FLOAT, Type::INT), (Type::FLOAT, Type::CHAR)] {
        assert_eq!(
            reason(compose_binary(BinaryOp::Mod, &left, &right)),
            Some(MismatchReason::IntegralMismatch),
            "{left} % {right}"
        );
    }
}

// Inclusive composition

#[test]
fn test_sign_composition() {
    let pos = int(&[Modifier::Positive]);
    let neg = int(&[Modifier::Negative]);
    assert_eq!(compose_binary(BinaryOp::Mul, &pos, &neg), Ok(neg.clone()));
    assert_eq!(compose_binary(BinaryOp::Div, &neg, &neg), Ok(pos.clone()));
    assert_eq!(compose_binary(BinaryOp::Add, &pos, &pos), Ok(pos.clone()));
    assert_eq!(compose_binary(BinaryOp::Sub, &neg, &neg), Ok(neg.clone()));
    assert_eq!(compose_binary(BinaryOp::Add, &pos, &neg), Ok(Type::INT));
    assert_eq!(compose_binary(BinaryOp::Mul, &pos, &Type::INT), Ok(Type::INT));
}

#[test]
fn test_parity_composition() {
    let even = int(&[Modifier::Even]);
    let odd = int(&[Modifier::Odd]);
    assert_eq!(compose_binary(BinaryOp::Mul, &even, &odd), Ok(even.clone()));
    assert_eq!(compose_binary(BinaryOp::Mul, &Type::INT, &even), Ok(even.clone()));
    assert_eq!(compose_binary(BinaryOp::Mul, &odd, &odd), Ok(odd.clone()));
    assert_eq!(compose_binary(BinaryOp::Add, &odd, &odd), Ok(even.clone()));
    assert_eq!(compose_binary(BinaryOp::Sub, &even, &odd), Ok(odd.clone()));
    assert_eq!(compose_binary(BinaryOp::Mod, &odd, &even), Ok(odd.clone()));
    assert_eq!(compose_binary(BinaryOp::Mod, &even, &even), Ok(even.clone()));
    assert_eq!(compose_binary(BinaryOp::Mod, &even, &odd), Ok(Type::INT));
    assert_eq!(compose_binary(BinaryOp::Div, &even, &even), Ok(Type::INT));
}

#[test]
fn test_parity_dropped_on_float_result() {
    let even = int(&[Modifier::Even]);
    assert_eq!(compose_binary(BinaryOp::Mul, &even, &Type::FLOAT), Ok(Type::FLOAT));
}

#[test]
fn test_nonzero_composition() {
    let nz = int(&[Modifier::NonZero]);
    assert_eq!(compose_binary(BinaryOp::Mul, &nz, &nz), Ok(nz.clone()));
    assert_eq!(compose_binary(BinaryOp::Div, &nz, &nz), Ok(nz.clone()));
    assert_eq!(compose_binary(BinaryOp::Add, &nz, &nz), Ok(Type::INT));
    assert_eq!(compose_binary(BinaryOp::Mul, &nz, &Type::INT), Ok(Type::INT));
}

#[test]
fn test_canonical_modifier_order() {
    let left = int(&[Modifier::Odd, Modifier::NonZero, Modifier::Positive, Modifier::Second]);
    let right = int(&[Modifier::Odd, Modifier::Positive, Modifier::NonZero]);
    assert_eq!(
        compose_binary(BinaryOp::Mul, &left, &right),
        Ok(int(&[Modifier::Second, Modifier::Positive, Modifier::NonZero, Modifier::Odd]))
    );
}

// Comparison, logic, numantics

#[test]
fn test_comparisons() {
    let meters = int(&[Modifier::Meter]);
    assert_eq!(compose_binary(BinaryOp::Lt, &meters, &meters), Ok(Type::BOOL));
    assert_eq!(compose_binary(BinaryOp::GtEq, &Type::INT, &Type::FLOAT), Ok(Type::BOOL));
    assert_eq!(
        reason(compose_binary(BinaryOp::Lt, &Type::STR, &Type::STR)),
        Some(MismatchReason::NotNumeric)
    );
    assert_eq!(
        reason(compose_binary(BinaryOp::Gt, &meters, &Type::INT)),
        Some(MismatchReason::CategoryMismatch)
    );
    assert_eq!(compose_binary(BinaryOp::Eq, &Type::STR, &Type::STR), Ok(Type::BOOL));
    assert_eq!(
        reason(compose_binary(BinaryOp::NotEq, &meters, &int(&[Modifier::Foot]))),
        Some(MismatchReason::UnitMismatch)
    );
}

#[test]
fn test_logical_operators_always_bool() {
    assert_eq!(compose_binary(BinaryOp::And, &Type::STR, &Type::VOID), Ok(Type::BOOL));
    assert_eq!(compose_binary(BinaryOp::Or, &Type::INT, &Type::BOOL), Ok(Type::BOOL));
}

#[test]
fn test_numantics() {
    let price = float(&[Modifier::Positive]);
    let pct = int(&[Modifier::Percent]);
    assert_eq!(compose_binary(BinaryOp::Markup, &price, &pct), Ok(price.clone()));
    assert_eq!(compose_binary(BinaryOp::PercentScale, &price, &Type::INT), Ok(price.clone()));
    assert_eq!(
        reason(compose_binary(BinaryOp::Markdown, &price, &int(&[Modifier::Meter]))),
        Some(MismatchReason::NumanticOperand)
    );
}

// Assignment

#[test]
fn test_assignment() {
    let meters = int(&[Modifier::Meter]);
    assert_eq!(compose_assignment(BinaryOp::Assign, &meters, &Type::INT), Ok(meters.clone()));
    assert_eq!(
        compose_assignment(BinaryOp::Assign, &Type::INT, &Type::FLOAT),
        Err(AssignError::Cast(CastError::NotCastable))
    );
    assert_eq!(compose_assignment(BinaryOp::AddAssign, &meters, &meters), Ok(meters.clone()));
    assert!(matches!(
        compose_assignment(BinaryOp::AddAssign, &meters, &int(&[Modifier::Second])),
        Err(AssignError::Mismatch(_))
    ));
    // x *= x stores meter2 into a meter slot.
    assert_eq!(
        compose_assignment(BinaryOp::MulAssign, &meters, &meters),
        Err(AssignError::Cast(CastError::NotCastable))
    );
}

// Unary and indexing

#[test]
fn test_unary_sign() {
    let pos = int(&[Modifier::Meter, Modifier::Positive]);
    assert_eq!(
        compose_unary(UnaryOp::Neg, &pos),
        Ok(int(&[Modifier::Meter, Modifier::Negative]))
    );
    assert_eq!(compose_unary(UnaryOp::Plus, &pos), Ok(pos.clone()));
    assert!(compose_unary(UnaryOp::Neg, &Type::STR).is_err());
    assert_eq!(compose_unary(UnaryOp::Not, &Type::STR), Ok(Type::BOOL));
}

#[test]
fn test_increment_and_decrement() {
    let ty = int(&[Modifier::Positive, Modifier::NonZero, Modifier::Even]);
    assert_eq!(
        compose_unary(UnaryOp::PreIncrement, &ty),
        Ok(int(&[Modifier::Positive, Modifier::Odd]))
    );
    assert_eq!(
        compose_unary(UnaryOp::PostDecrement, &ty),
        Ok(int(&[Modifier::Odd]))
    );
    let neg = int(&[Modifier::Negative, Modifier::Odd]);
    assert_eq!(
        compose_unary(UnaryOp::PreDecrement, &neg),
        Ok(int(&[Modifier::Negative, Modifier::Even]))
    );
    assert_eq!(
        compose_unary(UnaryOp::PostIncrement, &Type::FLOAT).map_err(|e| e.reason),
        Err(MismatchReason::NotIntegral)
    );
}

#[test]
fn test_indexing() {
    assert_eq!(compose_index(&Type::STR, &Type::INT), Ok(Type::CHAR));
    assert_eq!(
        compose_index(&Type::INT, &Type::INT).map_err(|e| e.reason),
        Err(MismatchReason::NotIndexable)
    );
    assert_eq!(
        compose_index(&Type::STR, &Type::FLOAT).map_err(|e| e.reason),
        Err(MismatchReason::BadIndex)
    );
}

// Tables

#[test]
fn test_unit_rows_agree_with_category_rules() {
    for &(a, b, product) in units::UNIT_PRODUCTS {
        let (ca, cb, cp) = (category_of(a), category_of(b), category_of(product));
        assert!(
            units::PRODUCTS.contains(&(ca, cb, cp)) || units::PRODUCTS.contains(&(cb, ca, cp)),
            "{a} * {b} = {product}"
        );
    }
}
