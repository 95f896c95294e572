//! Declared and resolved types.
//!
//! A type is a scalar builtin plus an ordered list of modifiers written in
//! angle brackets in the source: `int<meter, even>`. The meaning of each
//! modifier (its category, how it composes under operators) lives in
//! `numa_types`; this module only names them.

use std::fmt;

/// Scalar builtin types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum BuiltinType {
    Void,
    Int,
    Float,
    Bool,
    Char,
    Str,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 6] = [
        BuiltinType::Void,
        BuiltinType::Int,
        BuiltinType::Float,
        BuiltinType::Bool,
        BuiltinType::Char,
        BuiltinType::Str,
    ];

    /// Source keyword for this builtin.
    pub const fn keyword(self) -> &'static str {
        match self {
            BuiltinType::Void => "void",
            BuiltinType::Int => "int",
            BuiltinType::Float => "float",
            BuiltinType::Bool => "bool",
            BuiltinType::Char => "char",
            BuiltinType::Str => "string",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.keyword() == keyword)
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Concrete modifier keywords.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Modifier {
    // Percent
    Percent,
    XPercent,
    // Sign
    Positive,
    Negative,
    // Non-zero
    NonZero,
    // Parity
    Even,
    Odd,
    // Inference marker
    Auto,
    // Time
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    // Distance
    Meter,
    Millimeter,
    Centimeter,
    Kilometer,
    Foot,
    Inch,
    // Area
    SquareMeter,
    SquareMillimeter,
    SquareCentimeter,
    SquareKilometer,
    SquareFoot,
    SquareInch,
    // Volume
    Liter,
    Milliliter,
    Centiliter,
    Kiloliter,
    // Mass
    Gram,
    Milligram,
    Centigram,
    Kilogram,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // Force
    Newton,
    KilogramForce,
    PoundForce,
    // Velocity
    MetersPerSecond,
    FeetPerSecond,
    // Acceleration
    MetersPerSecondSquared,
}

impl Modifier {
    pub const ALL: [Modifier; 44] = [
        Modifier::Percent,
        Modifier::XPercent,
        Modifier::Positive,
        Modifier::Negative,
        Modifier::NonZero,
        Modifier::Even,
        Modifier::Odd,
        Modifier::Auto,
        Modifier::Second,
        Modifier::Minute,
        Modifier::Hour,
        Modifier::Day,
        Modifier::Week,
        Modifier::Month,
        Modifier::Year,
        Modifier::Meter,
        Modifier::Millimeter,
        Modifier::Centimeter,
        Modifier::Kilometer,
        Modifier::Foot,
        Modifier::Inch,
        Modifier::SquareMeter,
        Modifier::SquareMillimeter,
        Modifier::SquareCentimeter,
        Modifier::SquareKilometer,
        Modifier::SquareFoot,
        Modifier::SquareInch,
        Modifier::Liter,
        Modifier::Milliliter,
        Modifier::Centiliter,
        Modifier::Kiloliter,
        Modifier::Gram,
        Modifier::Milligram,
        Modifier::Centigram,
        Modifier::Kilogram,
        Modifier::Celsius,
        Modifier::Fahrenheit,
        Modifier::Kelvin,
        Modifier::Newton,
        Modifier::KilogramForce,
        Modifier::PoundForce,
        Modifier::MetersPerSecond,
        Modifier::FeetPerSecond,
        Modifier::MetersPerSecondSquared,
    ];

    /// Keyword as written between the angle brackets.
    pub const fn keyword(self) -> &'static str {
        match self {
            Modifier::Percent => "percent",
            Modifier::XPercent => "xpercent",
            Modifier::Positive => "positive",
            Modifier::Negative => "negative",
            Modifier::NonZero => "nonzero",
            Modifier::Even => "even",
            Modifier::Odd => "odd",
            Modifier::Auto => "auto",
            Modifier::Second => "second",
            Modifier::Minute => "minute",
            Modifier::Hour => "hour",
            Modifier::Day => "day",
            Modifier::Week => "week",
            Modifier::Month => "month",
            Modifier::Year => "year",
            Modifier::Meter => "meter",
            Modifier::Millimeter => "mm",
            Modifier::Centimeter => "cm",
            Modifier::Kilometer => "km",
            Modifier::Foot => "ft",
            Modifier::Inch => "inch",
            Modifier::SquareMeter => "meter2",
            Modifier::SquareMillimeter => "mm2",
            Modifier::SquareCentimeter => "cm2",
            Modifier::SquareKilometer => "km2",
            Modifier::SquareFoot => "ft2",
            Modifier::SquareInch => "inch2",
            Modifier::Liter => "liter",
            Modifier::Milliliter => "ml",
            Modifier::Centiliter => "cl",
            Modifier::Kiloliter => "kl",
            Modifier::Gram => "gram",
            Modifier::Milligram => "mg",
            Modifier::Centigram => "cg",
            Modifier::Kilogram => "kg",
            Modifier::Celsius => "celc",
            Modifier::Fahrenheit => "fahr",
            Modifier::Kelvin => "kelv",
            Modifier::Newton => "newt",
            Modifier::KilogramForce => "kgf",
            Modifier::PoundForce => "lbf",
            Modifier::MetersPerSecond => "mps",
            Modifier::FeetPerSecond => "fps",
            Modifier::MetersPerSecondSquared => "mps2",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.keyword() == keyword)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A builtin with its modifier annotations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Type {
    pub builtin: BuiltinType,
    pub modifiers: Vec<Modifier>,
}

impl Type {
    pub const VOID: Type = Type::plain(BuiltinType::Void);
    pub const INT: Type = Type::plain(BuiltinType::Int);
    pub const FLOAT: Type = Type::plain(BuiltinType::Float);
    pub const BOOL: Type = Type::plain(BuiltinType::Bool);
    pub const CHAR: Type = Type::plain(BuiltinType::Char);
    pub const STR: Type = Type::plain(BuiltinType::Str);

    /// A builtin without modifiers.
    pub const fn plain(builtin: BuiltinType) -> Self {
        Type {
            builtin,
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifiers(builtin: BuiltinType, modifiers: impl Into<Vec<Modifier>>) -> Self {
        Type {
            builtin,
            modifiers: modifiers.into(),
        }
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    pub fn is_void(&self) -> bool {
        self.builtin == BuiltinType::Void
    }

    /// Same builtin and the same modifier multiset, ignoring written order.
    pub fn same_as(&self, other: &Type) -> bool {
        if self.builtin != other.builtin || self.modifiers.len() != other.modifiers.len() {
            return false;
        }
        let mut lhs = self.modifiers.clone();
        let mut rhs = other.modifiers.clone();
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.builtin)?;
        if let Some((first, rest)) = self.modifiers.split_first() {
            write!(f, "<{first}")?;
            for modifier in rest {
                write!(f, ", {modifier}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
