//! Modifier categories and their static membership tables.
//!
//! Every [`Modifier`] belongs to exactly one [`ModifierCategory`].
//! *Exclusive* categories (the physical units and percent) must agree
//! between operands of most binary operators; *inclusive* categories
//! (sign, nonzero, parity) compose through truth tables instead.

use std::fmt;

use bitflags::bitflags;
use numa_ir::{Modifier, Type};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ModifierCategory {
    Percent,
    Sign,
    NonZero,
    Parity,
    Auto,
    Time,
    Distance,
    Area,
    Volume,
    Mass,
    Temperature,
    Force,
    Velocity,
    Acceleration,
}

bitflags! {
    /// A set of modifier categories.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct CategorySet: u16 {
        const PERCENT = 1 << 0;
        const SIGN = 1 << 1;
        const NONZERO = 1 << 2;
        const PARITY = 1 << 3;
        const AUTO = 1 << 4;
        const TIME = 1 << 5;
        const DISTANCE = 1 << 6;
        const AREA = 1 << 7;
        const VOLUME = 1 << 8;
        const MASS = 1 << 9;
        const TEMPERATURE = 1 << 10;
        const FORCE = 1 << 11;
        const VELOCITY = 1 << 12;
        const ACCELERATION = 1 << 13;

        /// Categories operands must agree on.
        const EXCLUSIVE = Self::PERCENT.bits()
            | Self::TIME.bits()
            | Self::DISTANCE.bits()
            | Self::AREA.bits()
            | Self::VOLUME.bits()
            | Self::MASS.bits()
            | Self::TEMPERATURE.bits()
            | Self::FORCE.bits()
            | Self::VELOCITY.bits()
            | Self::ACCELERATION.bits();

        /// Categories composed by truth table.
        const INCLUSIVE = Self::SIGN.bits() | Self::NONZERO.bits() | Self::PARITY.bits();
    }
}

impl ModifierCategory {
    pub const ALL: [ModifierCategory; 14] = [
        ModifierCategory::Percent,
        ModifierCategory::Sign,
        ModifierCategory::NonZero,
        ModifierCategory::Parity,
        ModifierCategory::Auto,
        ModifierCategory::Time,
        ModifierCategory::Distance,
        ModifierCategory::Area,
        ModifierCategory::Volume,
        ModifierCategory::Mass,
        ModifierCategory::Temperature,
        ModifierCategory::Force,
        ModifierCategory::Velocity,
        ModifierCategory::Acceleration,
    ];

    /// The single-bit set for this category.
    pub const fn flag(self) -> CategorySet {
        match self {
            ModifierCategory::Percent => CategorySet::PERCENT,
            ModifierCategory::Sign => CategorySet::SIGN,
            ModifierCategory::NonZero => CategorySet::NONZERO,
            ModifierCategory::Parity => CategorySet::PARITY,
            ModifierCategory::Auto => CategorySet::AUTO,
            ModifierCategory::Time => CategorySet::TIME,
            ModifierCategory::Distance => CategorySet::DISTANCE,
            ModifierCategory::Area => CategorySet::AREA,
            ModifierCategory::Volume => CategorySet::VOLUME,
            ModifierCategory::Mass => CategorySet::MASS,
            ModifierCategory::Temperature => CategorySet::TEMPERATURE,
            ModifierCategory::Force => CategorySet::FORCE,
            ModifierCategory::Velocity => CategorySet::VELOCITY,
            ModifierCategory::Acceleration => CategorySet::ACCELERATION,
        }
    }

    pub const fn is_exclusive(self) -> bool {
        CategorySet::EXCLUSIVE.contains(self.flag())
    }

    pub const fn is_inclusive(self) -> bool {
        CategorySet::INCLUSIVE.contains(self.flag())
    }

    /// Concrete modifiers in this category, in declaration order.
    pub const fn members(self) -> &'static [Modifier] {
        match self {
            ModifierCategory::Percent => &[Modifier::Percent, Modifier::XPercent],
            ModifierCategory::Sign => &[Modifier::Positive, Modifier::Negative],
            ModifierCategory::NonZero => &[Modifier::NonZero],
            ModifierCategory::Parity => &[Modifier::Even, Modifier::Odd],
            ModifierCategory::Auto => &[Modifier::Auto],
            ModifierCategory::Time => &[
                Modifier::Second,
                Modifier::Minute,
                Modifier::Hour,
                Modifier::Day,
                Modifier::Week,
                Modifier::Month,
                Modifier::Year,
            ],
            ModifierCategory::Distance => &[
                Modifier::Meter,
                Modifier::Millimeter,
                Modifier::Centimeter,
                Modifier::Kilometer,
                Modifier::Foot,
                Modifier::Inch,
            ],
            ModifierCategory::Area => &[
                Modifier::SquareMeter,
                Modifier::SquareMillimeter,
                Modifier::SquareCentimeter,
                Modifier::SquareKilometer,
                Modifier::SquareFoot,
                Modifier::SquareInch,
            ],
            ModifierCategory::Volume => &[
                Modifier::Liter,
                Modifier::Milliliter,
                Modifier::Centiliter,
                Modifier::Kiloliter,
            ],
            ModifierCategory::Mass => &[
                Modifier::Gram,
                Modifier::Milligram,
                Modifier::Centigram,
                Modifier::Kilogram,
            ],
            ModifierCategory::Temperature => {
                &[Modifier::Celsius, Modifier::Fahrenheit, Modifier::Kelvin]
            }
            ModifierCategory::Force => &[
                Modifier::Newton,
                Modifier::KilogramForce,
                Modifier::PoundForce,
            ],
            ModifierCategory::Velocity => &[Modifier::MetersPerSecond, Modifier::FeetPerSecond],
            ModifierCategory::Acceleration => &[Modifier::MetersPerSecondSquared],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ModifierCategory::Percent => "percent",
            ModifierCategory::Sign => "sign",
            ModifierCategory::NonZero => "nonzero",
            ModifierCategory::Parity => "parity",
            ModifierCategory::Auto => "auto",
            ModifierCategory::Time => "time",
            ModifierCategory::Distance => "distance",
            ModifierCategory::Area => "area",
            ModifierCategory::Volume => "volume",
            ModifierCategory::Mass => "mass",
            ModifierCategory::Temperature => "temperature",
            ModifierCategory::Force => "force",
            ModifierCategory::Velocity => "velocity",
            ModifierCategory::Acceleration => "acceleration",
        }
    }
}

impl fmt::Display for ModifierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a single modifier.
pub const fn category_of(modifier: Modifier) -> ModifierCategory {
    match modifier {
        Modifier::Percent | Modifier::XPercent => ModifierCategory::Percent,
        Modifier::Positive | Modifier::Negative => ModifierCategory::Sign,
        Modifier::NonZero => ModifierCategory::NonZero,
        Modifier::Even | Modifier::Odd => ModifierCategory::Parity,
        Modifier::Auto => ModifierCategory::Auto,
        Modifier::Second
        | Modifier::Minute
        | Modifier::Hour
        | Modifier::Day
        | Modifier::Week
        | Modifier::Month
        | Modifier::Year => ModifierCategory::Time,
        Modifier::Meter
        | Modifier::Millimeter
        | Modifier::Centimeter
        | Modifier::Kilometer
        | Modifier::Foot
        | Modifier::Inch => ModifierCategory::Distance,
        Modifier::SquareMeter
        | Modifier::SquareMillimeter
        | Modifier::SquareCentimeter
        | Modifier::SquareKilometer
        | Modifier::SquareFoot
        | Modifier::SquareInch => ModifierCategory::Area,
        Modifier::Liter | Modifier::Milliliter | Modifier::Centiliter | Modifier::Kiloliter => {
            ModifierCategory::Volume
        }
        Modifier::Gram | Modifier::Milligram | Modifier::Centigram | Modifier::Kilogram => {
            ModifierCategory::Mass
        }
        Modifier::Celsius | Modifier::Fahrenheit | Modifier::Kelvin => {
            ModifierCategory::Temperature
        }
        Modifier::Newton | Modifier::KilogramForce | Modifier::PoundForce => {
            ModifierCategory::Force
        }
        Modifier::MetersPerSecond | Modifier::FeetPerSecond => ModifierCategory::Velocity,
        Modifier::MetersPerSecondSquared => ModifierCategory::Acceleration,
    }
}

/// Categories present in a modifier list.
///
/// `auto` swallows everything else: a list containing it classifies as
/// `{auto}` alone.
pub fn classify(modifiers: &[Modifier]) -> CategorySet {
    let mut set = CategorySet::empty();
    for &modifier in modifiers {
        if modifier == Modifier::Auto {
            return CategorySet::AUTO;
        }
        set |= category_of(modifier).flag();
    }
    set
}

/// The exclusive category in a set, if any.
///
/// A validated type has at most one; with several the first in
/// [`ModifierCategory::ALL`] order wins.
pub fn exclusive_category_of(categories: CategorySet) -> Option<ModifierCategory> {
    let exclusive = categories & CategorySet::EXCLUSIVE;
    ModifierCategory::ALL
        .into_iter()
        .find(|category| exclusive.contains(category.flag()))
}

/// The concrete exclusive modifier a type carries, if any.
pub fn exclusive_modifier(ty: &Type) -> Option<Modifier> {
    ty.modifiers
        .iter()
        .copied()
        .find(|&m| category_of(m).is_exclusive())
}

/// The modifier a type carries in an inclusive category, if any.
pub fn inclusive_modifier(ty: &Type, category: ModifierCategory) -> Option<Modifier> {
    ty.modifiers
        .iter()
        .copied()
        .find(|&m| category_of(m) == category)
}
