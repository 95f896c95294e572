//! Errors produced by the algebra.
//!
//! These carry the types involved but no spans; the resolver attaches the
//! location when it turns them into diagnostics.

use std::fmt;

use numa_ir::{BuiltinType, Modifier, Type};

use crate::category::ModifierCategory;

/// An illegal modifier list on a declared type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModifierError {
    /// Modifiers on something other than `int` or `float`.
    NonNumeric { builtin: BuiltinType },
    /// The same modifier written twice.
    Duplicate { modifier: Modifier },
    /// Two modifiers from one category, e.g. `<even, odd>` or `<meter, km>`.
    SameCategory {
        category: ModifierCategory,
        first: Modifier,
        second: Modifier,
    },
    /// Two different exclusive categories, e.g. `<meter, second>`.
    ExclusiveConflict {
        first: ModifierCategory,
        second: ModifierCategory,
    },
    /// `auto` next to any other modifier.
    AutoCombined,
    /// `even`/`odd` on a non-integral builtin.
    ParityOnFloat,
}

impl fmt::Display for ModifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierError::NonNumeric { builtin } => {
                write!(f, "type `{builtin}` cannot have modifiers")
            }
            ModifierError::Duplicate { modifier } => {
                write!(f, "duplicate modifier `{modifier}`")
            }
            ModifierError::SameCategory {
                category,
                first,
                second,
            } => write!(
                f,
                "`{first}` and `{second}` are both {category} modifiers"
            ),
            ModifierError::ExclusiveConflict { first, second } => {
                write!(f, "{first} and {second} modifiers are exclusive")
            }
            ModifierError::AutoCombined => {
                f.write_str("`auto` cannot be combined with other modifiers")
            }
            ModifierError::ParityOnFloat => {
                f.write_str("parity modifiers require an integral type")
            }
        }
    }
}

/// Why an operator rejected its operands.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MismatchReason {
    /// An operand is `void` or `string` where arithmetic is required.
    NotNumeric,
    /// `+` with a `string` on one side only.
    StringConcat,
    /// Operands carry different exclusive categories (or one has none).
    CategoryMismatch,
    /// Same category, different concrete units: `meter + km`.
    UnitMismatch,
    /// The category pairing has no entry in the mult/div table.
    NoCategoryRule,
    /// The category pairing is legal but no unit row matches: `km * meter`.
    IncompatibleUnits,
    /// A bare scalar divided by a categorized value.
    ScalarDividend,
    /// An exclusive category on an operand of `%` or `^`.
    CategorizedOperand,
    /// `%` or `^` mixing integral and floating operands.
    IntegralMismatch,
    /// The right side of `*% +% -%` is neither percent nor bare.
    NumanticOperand,
    /// `++`/`--` on a non-integral operand.
    NotIntegral,
    /// Indexing something other than `string`.
    NotIndexable,
    /// A non-integral index.
    BadIndex,
}

impl MismatchReason {
    pub const fn message(self) -> &'static str {
        match self {
            MismatchReason::NotNumeric => "operator requires numeric operands",
            MismatchReason::StringConcat => "string concatenation requires two strings",
            MismatchReason::CategoryMismatch => "operands have different modifier categories",
            MismatchReason::UnitMismatch => "operands have different units",
            MismatchReason::NoCategoryRule => "no rule combines these modifier categories",
            MismatchReason::IncompatibleUnits => "incompatible units",
            MismatchReason::ScalarDividend => "left side cannot be scalar in division",
            MismatchReason::CategorizedOperand => "operator requires operands without units",
            MismatchReason::IntegralMismatch => {
                "operands must both be integral or both be floating"
            }
            MismatchReason::NumanticOperand => "right side must be a percent or a bare scalar",
            MismatchReason::NotIntegral => "operator requires an integral operand",
            MismatchReason::NotIndexable => "only strings can be indexed",
            MismatchReason::BadIndex => "index must be integral",
        }
    }
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An operator applied to operands it does not accept.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeMismatch {
    /// Operator symbol as written, `[]` for indexing.
    pub op: &'static str,
    pub left: Type,
    /// `None` for unary operators.
    pub right: Option<Type>,
    pub reason: MismatchReason,
}

impl TypeMismatch {
    pub fn binary(op: &'static str, left: &Type, right: &Type, reason: MismatchReason) -> Self {
        TypeMismatch {
            op,
            left: left.clone(),
            right: Some(right.clone()),
            reason,
        }
    }

    pub fn unary(op: &'static str, operand: &Type, reason: MismatchReason) -> Self {
        TypeMismatch {
            op,
            left: operand.clone(),
            right: None,
            reason,
        }
    }

    /// The operand types as written: `` `int` / `int<meter>` ``.
    pub fn operands(&self) -> String {
        match &self.right {
            Some(right) if self.op == "[]" => format!("`{}[{}]`", self.left, right),
            Some(right) => format!("`{}` {} `{}`", self.left, self.op, right),
            None => format!("{}`{}`", self.op, self.left),
        }
    }
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reason, self.operands())
    }
}
