//! Rarity — composite trait score plus one luck draw, thresholded into a tier.
//!
//! Score = sum of trait contributions + luck bonus.
//! The luck bonus maps the single rarity draw onto the same point scale:
//!   draw > 0.997 ⇒ +60, > 0.99 ⇒ +35, > 0.94 ⇒ +18, else 0.
//! A pet with no scoring traits therefore lands in each tier with exactly
//! the probabilities of a plain bucket roll, and every scoring trait can
//! only push it upward.
//!
//! RULE: compute_rarity is pure and monotonic. Raising any contribution
//! (or the luck draw) never lowers the tier.

use crate::traits::{
    Accessory, Eyes, Mouth, PaletteKey, Pattern, SpecialEffect, Species, TraitPool,
};
use crate::types::Stat;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LEGENDARY_THRESHOLD: u32 = 60;
pub const EPIC_THRESHOLD: u32 = 35;
pub const RARE_THRESHOLD: u32 = 18;

/// Luck draw cut points, highest first, paired with their bonus.
const LUCK_BANDS: [(f64, u32); 3] = [
    (0.997, LEGENDARY_THRESHOLD),
    (0.99, EPIC_THRESHOLD),
    (0.94, RARE_THRESHOLD),
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RarityTier {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl RarityTier {
    pub const ALL: [RarityTier; 4] = [Self::Common, Self::Rare, Self::Epic, Self::Legendary];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    /// Flat stat bonus granted by this tier.
    pub fn stat_bonus(&self) -> StatBonus {
        match self {
            Self::Common => StatBonus { hp: 0, attack: 0, defense: 0, speed: 0 },
            Self::Rare => StatBonus { hp: 10, attack: 2, defense: 2, speed: 2 },
            Self::Epic => StatBonus { hp: 30, attack: 5, defense: 5, speed: 5 },
            Self::Legendary => StatBonus { hp: 50, attack: 8, defense: 8, speed: 8 },
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBonus {
    pub hp: Stat,
    pub attack: Stat,
    pub defense: Stat,
    pub speed: Stat,
}

/// Everything rarity depends on. Built once the cosmetic traits are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityContext {
    pub species: Species,
    pub palette: PaletteKey,
    pub pattern: Pattern,
    pub eyes: Eyes,
    pub mouth: Mouth,
    pub accessory: Accessory,
    pub effect: SpecialEffect,
    /// The rarity draw, in [0, 1).
    pub luck: f64,
}

impl RarityContext {
    /// Points from traits alone.
    pub fn trait_points(&self) -> u32 {
        self.species.rarity_points()
            + self.palette.rarity_points()
            + self.pattern.rarity_points()
            + self.eyes.rarity_points()
            + self.mouth.rarity_points()
            + self.accessory.rarity_points()
            + self.effect.rarity_points()
    }

    /// Full composite score: trait points plus luck bonus.
    pub fn score(&self) -> u32 {
        self.trait_points() + luck_bonus(self.luck)
    }
}

pub fn luck_bonus(luck: f64) -> u32 {
    LUCK_BANDS
        .iter()
        .find(|(cut, _)| luck > *cut)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

pub fn tier_for_score(score: u32) -> RarityTier {
    if score >= LEGENDARY_THRESHOLD {
        RarityTier::Legendary
    } else if score >= EPIC_THRESHOLD {
        RarityTier::Epic
    } else if score >= RARE_THRESHOLD {
        RarityTier::Rare
    } else {
        RarityTier::Common
    }
}

pub fn compute_rarity(ctx: &RarityContext) -> RarityTier {
    tier_for_score(ctx.score())
}
