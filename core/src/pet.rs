//! Pet generation — one seed in, one fully specified pet out.
//!
//! DRAW ORDER (fixed, documented, never reordered):
//!   1. species
//!   2. palette family
//!   3. body shape
//!   4. pattern
//!   5. eyes
//!   6. mouth
//!   7. accessory
//!   8. special effect
//!   9. rarity luck draw
//!  10. personality: friendly, sarcastic, adventurous, lazy, curious
//!  11. stats: hp, attack, defense, speed
//!  12. name: prefix, suffix
//!
//! Reordering any step changes what every seed produces.
//! New draws may only be appended after the last step.

use crate::{
    name_generator::NameGenerator,
    rarity::{compute_rarity, RarityContext, RarityTier},
    rng::{SeedRng, StreamSlot, UnitSource},
    traits::{
        Accessory, BodyShape, Eyes, Mouth, PaletteKey, Pattern, SpecialEffect, Species,
        TraitPool,
    },
    types::Stat,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive base stat ranges, before the rarity bonus.
pub const HP_RANGE: (Stat, Stat) = (50, 100);
pub const ATTACK_RANGE: (Stat, Stat) = (10, 30);
pub const DEFENSE_RANGE: (Stat, Stat) = (10, 30);
pub const SPEED_RANGE: (Stat, Stat) = (10, 30);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDescriptor {
    pub seed: String,
    pub name: String,
    pub species: Species,
    pub body_shape: BodyShape,
    pub palette_key: PaletteKey,
    pub palette: Vec<String>,
    pub pattern: Pattern,
    pub eyes: Eyes,
    pub mouth: Mouth,
    pub accessory: Accessory,
    pub special_effect: SpecialEffect,
    pub rarity_tier: RarityTier,
    pub rarity_score: u32,
    pub personality: Personality,
    pub stats: Stats,
    /// Stamped by the caller, never by generation. `None` keeps
    /// descriptors for the same seed deep-equal.
    pub created_at: Option<DateTime<Utc>>,
}

impl PetDescriptor {
    /// One-line description, e.g. "Pippy, a rare striped glow-eyed fox".
    pub fn describe(&self) -> String {
        let mut parts: Vec<&str> = vec![self.rarity_tier.label()];
        if self.pattern != Pattern::None {
            parts.push(self.pattern.label());
        }
        parts.push(self.eyes.label());
        parts.push(self.species.label());
        let mut line = format!("{}, a {}", self.name, parts.join(" "));
        if self.accessory != Accessory::None {
            line.push_str(&format!(" wearing a {}", self.accessory));
        }
        if self.special_effect != SpecialEffect::None {
            line.push_str(&format!(" trailing {}", self.special_effect));
        }
        line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Friendly,
    Sarcastic,
    Brave,
    Grumpy,
    Neutral,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Sarcastic => "sarcastic",
            Self::Brave => "brave",
            Self::Grumpy => "grumpy",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub friendly: f64,
    pub sarcastic: f64,
    pub adventurous: f64,
    pub lazy: f64,
    pub curious: f64,
    pub dominant_tone: Tone,
}

impl Personality {
    /// Five draws, in field order. Sarcasm is damped by friendliness
    /// and laziness by adventurousness.
    pub fn sample(rng: &mut impl UnitSource) -> Self {
        let friendly = rng.next_f64();
        let sarcastic = rng.next_f64() * (1.0 - friendly);
        let adventurous = rng.next_f64();
        let lazy = rng.next_f64() * (1.0 - adventurous);
        let curious = rng.next_f64();
        let dominant_tone = dominant_tone(friendly, sarcastic, adventurous, lazy);
        Self { friendly, sarcastic, adventurous, lazy, curious, dominant_tone }
    }
}

/// First matching threshold wins, tested in this order.
pub fn dominant_tone(friendly: f64, sarcastic: f64, adventurous: f64, lazy: f64) -> Tone {
    if friendly > 0.7 {
        Tone::Friendly
    } else if sarcastic > 0.6 {
        Tone::Sarcastic
    } else if adventurous > 0.65 {
        Tone::Brave
    } else if lazy > 0.6 {
        Tone::Grumpy
    } else {
        Tone::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: Stat,
    pub attack: Stat,
    pub defense: Stat,
    pub speed: Stat,
}

impl Stats {
    /// Four draws (hp, attack, defense, speed), then the flat tier bonus.
    pub fn sample(rng: &mut impl UnitSource, tier: RarityTier) -> Self {
        let bonus = tier.stat_bonus();
        let hp = rng.next_in_range(HP_RANGE.0, HP_RANGE.1);
        let attack = rng.next_in_range(ATTACK_RANGE.0, ATTACK_RANGE.1);
        let defense = rng.next_in_range(DEFENSE_RANGE.0, DEFENSE_RANGE.1);
        let speed = rng.next_in_range(SPEED_RANGE.0, SPEED_RANGE.1);
        Self {
            hp: hp + bonus.hp,
            attack: attack + bonus.attack,
            defense: defense + bonus.defense,
            speed: speed + bonus.speed,
        }
    }
}

/// Generate the pet for `seed` on a fresh pet-stream RNG.
pub fn generate_pet(seed: &str) -> PetDescriptor {
    let mut rng = SeedRng::for_seed(seed, StreamSlot::Pet);
    build_pet(seed, &mut rng)
}

/// Compose a pet from an arbitrary draw source, in the documented order.
pub fn build_pet(seed: &str, rng: &mut impl UnitSource) -> PetDescriptor {
    let species = Species::sample(rng);
    let palette_key = PaletteKey::sample(rng);
    let body_shape = BodyShape::sample(rng);
    let pattern = Pattern::sample(rng);
    let eyes = Eyes::sample(rng);
    let mouth = Mouth::sample(rng);
    let accessory = Accessory::sample(rng);
    let special_effect = SpecialEffect::sample(rng);

    let rarity = RarityContext {
        species,
        palette: palette_key,
        pattern,
        eyes,
        mouth,
        accessory,
        effect: special_effect,
        luck: rng.next_f64(),
    };
    let rarity_tier = compute_rarity(&rarity);

    let personality = Personality::sample(rng);
    let stats = Stats::sample(rng, rarity_tier);
    let name = NameGenerator::generate_pet_name(rng);

    log::debug!(
        "seed={seed:?} pet: {species} {palette_key} tier={rarity_tier} score={} tone={}",
        rarity.score(),
        personality.dominant_tone
    );

    PetDescriptor {
        seed: seed.to_string(),
        name,
        species,
        body_shape,
        palette_key,
        palette: palette_key.colors().iter().map(|c| c.to_string()).collect(),
        pattern,
        eyes,
        mouth,
        accessory,
        special_effect,
        rarity_tier,
        rarity_score: rarity.score(),
        personality,
        stats,
        created_at: None,
    }
}
