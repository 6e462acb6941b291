use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

static TYPE_NAMES: phf::Map<&'static str, Type> = phf::phf_map! {
    "normal" => Type::Normal,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "electric" => Type::Electric,
    "grass" => Type::Grass,
    "ice" => Type::Ice,
    "fighting" => Type::Fighting,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "flying" => Type::Flying,
    "psychic" => Type::Psychic,
    "bug" => Type::Bug,
    "rock" => Type::Rock,
    "ghost" => Type::Ghost,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "steel" => Type::Steel,
    "fairy" => Type::Fairy,
};

impl Type {
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn from_name(name: &str) -> Option<Type> {
        TYPE_NAMES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    pub fn matchup(self) -> &'static TypeMatchup {
        &MATCHUPS[self as usize]
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single attacking type fares against a single defending type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectClass {
    Strong,
    Weak,
    Immune,
    Neutral,
}

impl EffectClass {
    pub fn factor(self) -> f64 {
        match self {
            EffectClass::Strong => 2.0,
            EffectClass::Weak => 0.5,
            EffectClass::Immune => 0.0,
            EffectClass::Neutral => 1.0,
        }
    }
}

/// Offensive row of the chart for one attacking type.
#[derive(Debug)]
pub struct TypeMatchup {
    pub strong_against: &'static [Type],
    pub weak_against: &'static [Type],
    pub no_effect_against: &'static [Type],
}

use Type::*;

// Indexed by `Type as usize`; rows follow the declaration order of `Type`.
#[rustfmt::skip]
static MATCHUPS: [TypeMatchup; 18] = [
    // normal
    TypeMatchup { strong_against: &[], weak_against: &[Rock, Steel], no_effect_against: &[Ghost] },
    // fire
    TypeMatchup { strong_against: &[Grass, Ice, Bug, Steel], weak_against: &[Fire, Water, Rock, Dragon], no_effect_against: &[] },
    // water
    TypeMatchup { strong_against: &[Fire, Ground, Rock], weak_against: &[Water, Grass, Dragon], no_effect_against: &[] },
    // electric
    TypeMatchup { strong_against: &[Water, Flying], weak_against: &[Electric, Grass, Dragon], no_effect_against: &[Ground] },
    // grass
    TypeMatchup { strong_against: &[Water, Ground, Rock], weak_against: &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel], no_effect_against: &[] },
    // ice
    TypeMatchup { strong_against: &[Grass, Ground, Flying, Dragon], weak_against: &[Fire, Water, Ice, Steel], no_effect_against: &[] },
    // fighting
    TypeMatchup { strong_against: &[Normal, Ice, Rock, Dark, Steel], weak_against: &[Poison, Flying, Psychic, Bug, Fairy], no_effect_against: &[Ghost] },
    // poison
    TypeMatchup { strong_against: &[Grass, Fairy], weak_against: &[Poison, Ground, Rock, Ghost], no_effect_against: &[Steel] },
    // ground
    TypeMatchup { strong_against: &[Fire, Electric, Poison, Rock, Steel], weak_against: &[Grass, Bug], no_effect_against: &[Flying] },
    // flying
    TypeMatchup { strong_against: &[Grass, Fighting, Bug], weak_against: &[Electric, Rock, Steel], no_effect_against: &[] },
    // psychic
    TypeMatchup { strong_against: &[Fighting, Poison], weak_against: &[Psychic, Steel], no_effect_against: &[Dark] },
    // bug
    TypeMatchup { strong_against: &[Grass, Psychic, Dark], weak_against: &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy], no_effect_against: &[] },
    // rock
    TypeMatchup { strong_against: &[Fire, Ice, Flying, Bug], weak_against: &[Fighting, Ground, Steel], no_effect_against: &[] },
    // ghost
    TypeMatchup { strong_against: &[Ghost, Psychic], weak_against: &[Dark], no_effect_against: &[Normal] },
    // dragon
    TypeMatchup { strong_against: &[Dragon], weak_against: &[Steel], no_effect_against: &[Fairy] },
    // dark
    TypeMatchup { strong_against: &[Psychic, Ghost], weak_against: &[Fighting, Dark, Fairy], no_effect_against: &[] },
    // steel
    TypeMatchup { strong_against: &[Ice, Rock, Fairy], weak_against: &[Fire, Water, Electric, Steel], no_effect_against: &[Poison] },
    // fairy
    TypeMatchup { strong_against: &[Fighting, Dragon, Dark], weak_against: &[Fire, Poison, Steel], no_effect_against: &[] },
];

pub fn effect_class(attacker: Type, defender: Type) -> EffectClass {
    let row = attacker.matchup();
    if row.strong_against.contains(&defender) {
        EffectClass::Strong
    } else if row.weak_against.contains(&defender) {
        EffectClass::Weak
    } else if row.no_effect_against.contains(&defender) {
        EffectClass::Immune
    } else {
        EffectClass::Neutral
    }
}
