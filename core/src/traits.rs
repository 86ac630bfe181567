//! Pet trait dimensions.
//!
//! Each dimension is a closed enum carrying its own weight table.
//! RULE: Never reorder a POOL table or change a weight without
//! accepting that every existing seed produces a different pet.

use crate::{
    rng::UnitSource,
    sampler::{pick, w, WeightEntry},
    types::Color,
};
use serde::{Deserialize, Serialize};

/// A categorical trait dimension sampled from a fixed weight table.
pub trait TraitPool: Sized + Copy + 'static {
    /// The sampling table. Order is part of the contract.
    const POOL: &'static [WeightEntry<Self>];

    /// Human-readable label, used in narrative text and CLI output.
    fn label(&self) -> &'static str;

    /// Points this variant contributes to the composite rarity score.
    fn rarity_points(&self) -> u32 {
        0
    }

    /// Draw one variant. Consumes exactly one draw.
    fn sample(src: &mut impl UnitSource) -> Self {
        *pick(Self::POOL, src)
    }

    /// Every variant, in pool order.
    fn variants() -> impl Iterator<Item = Self> {
        Self::POOL.iter().map(|e| e.key)
    }
}

macro_rules! display_via_label {
    ($($ty:ty),* $(,)?) => {
        $(impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}
pub(crate) use display_via_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Cat,
    Dog,
    Fox,
    Bunny,
    Frog,
    Owl,
    Axolotl,
    Dragon,
}

impl TraitPool for Species {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Cat, 16.0),
        w(Self::Dog, 16.0),
        w(Self::Fox, 15.0),
        w(Self::Bunny, 14.0),
        w(Self::Frog, 14.0),
        w(Self::Owl, 13.0),
        w(Self::Axolotl, 8.0),
        w(Self::Dragon, 4.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Fox => "fox",
            Self::Bunny => "bunny",
            Self::Frog => "frog",
            Self::Owl => "owl",
            Self::Axolotl => "axolotl",
            Self::Dragon => "dragon",
        }
    }

    fn rarity_points(&self) -> u32 {
        match self {
            Self::Dragon => 40,
            Self::Axolotl => 10,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKey {
    Classic,
    Pastel,
    Forest,
    Ocean,
    Sunset,
    Candy,
    Midnight,
    Holo,
}

impl PaletteKey {
    /// The fixed, ordered colors bound to this palette family:
    /// base, shade, accent, highlight. No randomness inside a palette.
    pub fn colors(&self) -> [Color; 4] {
        match self {
            Self::Classic => ["#F4A261", "#E76F51", "#2A9D8F", "#FFF3E0"],
            Self::Pastel => ["#FFD1DC", "#C9B6E4", "#B5EAD7", "#FFFFFF"],
            Self::Forest => ["#6A994E", "#386641", "#BC4749", "#F2E8CF"],
            Self::Ocean => ["#48CAE4", "#0077B6", "#F9C74F", "#CAF0F8"],
            Self::Sunset => ["#FF9E00", "#FF4800", "#9D4EDD", "#FFEA00"],
            Self::Candy => ["#FF70A6", "#FF9770", "#70D6FF", "#FFD670"],
            Self::Midnight => ["#3D348B", "#191D32", "#F7B801", "#A9A9FF"],
            Self::Holo => ["#A0FFE6", "#FFA0F5", "#A0C4FF", "#FFFFFF"],
        }
    }
}

impl TraitPool for PaletteKey {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Classic, 18.0),
        w(Self::Pastel, 16.0),
        w(Self::Forest, 15.0),
        w(Self::Ocean, 15.0),
        w(Self::Sunset, 14.0),
        w(Self::Candy, 10.0),
        w(Self::Midnight, 8.0),
        w(Self::Holo, 4.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Pastel => "pastel",
            Self::Forest => "forest",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Candy => "candy",
            Self::Midnight => "midnight",
            Self::Holo => "holo",
        }
    }

    fn rarity_points(&self) -> u32 {
        match self {
            Self::Holo => 15,
            Self::Midnight => 5,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    Round,
    Tall,
    Squat,
    Long,
    Blob,
}

impl TraitPool for BodyShape {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Round, 24.0),
        w(Self::Tall, 20.0),
        w(Self::Squat, 20.0),
        w(Self::Long, 18.0),
        w(Self::Blob, 18.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Tall => "tall",
            Self::Squat => "squat",
            Self::Long => "long",
            Self::Blob => "blob",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    None,
    Stripes,
    Spots,
    Patches,
    Circuit,
    Starfield,
}

impl TraitPool for Pattern {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::None, 60.0),
        w(Self::Stripes, 15.0),
        w(Self::Spots, 15.0),
        w(Self::Patches, 5.0),
        w(Self::Circuit, 3.0),
        w(Self::Starfield, 2.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::None => "plain",
            Self::Stripes => "striped",
            Self::Spots => "spotted",
            Self::Patches => "patchwork",
            Self::Circuit => "circuit-marked",
            Self::Starfield => "starfield",
        }
    }

    fn rarity_points(&self) -> u32 {
        match self {
            Self::Starfield => 12,
            Self::Circuit => 10,
            Self::Patches => 3,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eyes {
    Dot,
    Round,
    Sleepy,
    Wink,
    Sparkle,
    Glow,
}

impl TraitPool for Eyes {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Dot, 25.0),
        w(Self::Round, 25.0),
        w(Self::Sleepy, 15.0),
        w(Self::Wink, 12.0),
        w(Self::Sparkle, 15.0),
        w(Self::Glow, 8.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Dot => "dot-eyed",
            Self::Round => "round-eyed",
            Self::Sleepy => "sleepy-eyed",
            Self::Wink => "winking",
            Self::Sparkle => "sparkle-eyed",
            Self::Glow => "glow-eyed",
        }
    }

    fn rarity_points(&self) -> u32 {
        match self {
            Self::Glow => 15,
            Self::Sparkle => 5,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mouth {
    Smile,
    Flat,
    Open,
    Tongue,
    Fang,
}

impl TraitPool for Mouth {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Smile, 30.0),
        w(Self::Flat, 20.0),
        w(Self::Open, 20.0),
        w(Self::Tongue, 18.0),
        w(Self::Fang, 12.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Smile => "smiling",
            Self::Flat => "deadpan",
            Self::Open => "open-mouthed",
            Self::Tongue => "tongue-out",
            Self::Fang => "fanged",
        }
    }

    fn rarity_points(&self) -> u32 {
        match self {
            Self::Fang => 3,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessory {
    None,
    Bow,
    Hat,
    Scarf,
    Glasses,
    Headphones,
    Crown,
}

impl TraitPool for Accessory {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::None, 50.0),
        w(Self::Bow, 11.0),
        w(Self::Hat, 10.0),
        w(Self::Scarf, 10.0),
        w(Self::Glasses, 9.0),
        w(Self::Headphones, 7.0),
        w(Self::Crown, 3.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bow => "bow",
            Self::Hat => "hat",
            Self::Scarf => "scarf",
            Self::Glasses => "glasses",
            Self::Headphones => "headphones",
            Self::Crown => "crown",
        }
    }

    fn rarity_points(&self) -> u32 {
        match self {
            Self::Crown => 20,
            Self::Headphones => 3,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffect {
    None,
    Sparkles,
    Hearts,
    Flames,
    PrismaticAura,
}

impl TraitPool for SpecialEffect {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::None, 80.0),
        w(Self::Sparkles, 8.0),
        w(Self::Hearts, 5.0),
        w(Self::Flames, 4.0),
        w(Self::PrismaticAura, 3.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sparkles => "sparkles",
            Self::Hearts => "hearts",
            Self::Flames => "flames",
            Self::PrismaticAura => "prismatic aura",
        }
    }

    fn rarity_points(&self) -> u32 {
        match self {
            Self::PrismaticAura => 30,
            Self::Flames => 8,
            Self::Sparkles => 4,
            _ => 0,
        }
    }
}

display_via_label!(
    Species,
    PaletteKey,
    BodyShape,
    Pattern,
    Eyes,
    Mouth,
    Accessory,
    SpecialEffect,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::total_weight;

    fn assert_pool_sane<T: TraitPool + PartialEq + std::fmt::Debug>() {
        assert!(total_weight(T::POOL) > 0.0);
        let keys: Vec<T> = T::variants().collect();
        for (i, k) in keys.iter().enumerate() {
            assert!(
                !keys[i + 1..].contains(k),
                "{k:?} appears twice in its pool"
            );
        }
    }

    #[test]
    fn every_pool_is_positive_and_duplicate_free() {
        assert_pool_sane::<Species>();
        assert_pool_sane::<PaletteKey>();
        assert_pool_sane::<BodyShape>();
        assert_pool_sane::<Pattern>();
        assert_pool_sane::<Eyes>();
        assert_pool_sane::<Mouth>();
        assert_pool_sane::<Accessory>();
        assert_pool_sane::<SpecialEffect>();
    }

    #[test]
    fn eight_species() {
        assert_eq!(Species::POOL.len(), 8);
    }

    #[test]
    fn pattern_weights_match_design_shares() {
        let total = total_weight(Pattern::POOL);
        let share = |p: Pattern| {
            Pattern::POOL.iter().find(|e| e.key == p).map(|e| e.weight).unwrap_or(0.0) / total
        };
        assert!((share(Pattern::None) - 0.60).abs() < 1e-9);
        assert!((share(Pattern::Stripes) - 0.15).abs() < 1e-9);
        assert!((share(Pattern::Spots) - 0.15).abs() < 1e-9);
        for rare in [Pattern::Patches, Pattern::Circuit, Pattern::Starfield] {
            assert!(share(rare) <= 0.06, "{rare:?} too common");
        }
    }

    #[test]
    fn accessory_and_effect_none_shares() {
        let acc_none = Accessory::POOL[0];
        assert_eq!(acc_none.key, Accessory::None);
        assert!((acc_none.weight / total_weight(Accessory::POOL) - 0.5).abs() < 1e-9);

        let fx_none = SpecialEffect::POOL[0];
        assert_eq!(fx_none.key, SpecialEffect::None);
        assert!((fx_none.weight / total_weight(SpecialEffect::POOL) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn palettes_are_four_hex_colors() {
        for key in PaletteKey::variants() {
            for c in key.colors() {
                assert!(c.starts_with('#') && c.len() == 7, "{key}: bad color {c}");
            }
        }
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&SpecialEffect::PrismaticAura).unwrap();
        assert_eq!(json, "\"prismatic_aura\"");
    }
}
