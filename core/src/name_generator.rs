//! Deterministic pet name generation using curated syllable lists.
//!
//! A name is a prefix syllable plus a suffix syllable, capitalized.
//! Two draws, always in that order (same RNG state = same name).

use crate::{rng::UnitSource, sampler::pick_uniform};

/// Deterministic name generator using curated syllable lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a pet name deterministically
    pub fn generate_pet_name(rng: &mut impl UnitSource) -> String {
        let prefix = *pick_uniform(Self::prefixes(), rng);
        let suffix = *pick_uniform(Self::suffixes(), rng);
        capitalize(&format!("{prefix}{suffix}"))
    }

    /// Curated list of 48 opening syllables
    fn prefixes() -> &'static [&'static str] {
        &[
            "pip", "mo", "bun", "zu", "ki", "lo", "fen", "taf",
            "nim", "bo", "sor", "whis", "cle", "dru", "mar", "pik",
            "tu", "ru", "quin", "ja", "mi", "hob", "gri", "ash",
            "fizz", "ta", "co", "blu", "sku", "wren", "pep", "ozz",
            "chi", "bram", "lu", "nox", "pud", "yu", "kel", "fro",
            "bis", "dax", "el", "spro", "mun", "rai", "tik", "vel",
        ]
    }

    /// Curated list of 32 closing syllables
    fn suffixes() -> &'static [&'static str] {
        &[
            "py", "chi", "bles", "zo", "ko", "lette", "nik", "fy",
            "ble", "ster", "mo", "kins", "let", "rin", "ka", "bit",
            "do", "ny", "boo", "roo", "mi", "ra", "tto", "sy",
            "wick", "belle", "pop", "nugget", "dle", "lo", "nie", "x",
        ]
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedDraws, SeedRng, StreamSlot};

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = SeedRng::for_seed("name-seed", StreamSlot::Pet);
        let mut rng2 = SeedRng::for_seed("name-seed", StreamSlot::Pet);

        let name1 = NameGenerator::generate_pet_name(&mut rng1);
        let name2 = NameGenerator::generate_pet_name(&mut rng2);

        assert_eq!(name1, name2, "Same seed should produce same name");
    }

    #[test]
    fn generates_capitalized_single_word_names() {
        let mut rng = SeedRng::for_seed("names", StreamSlot::Pet);

        for _ in 0..100 {
            let name = NameGenerator::generate_pet_name(&mut rng);
            assert!(!name.is_empty());
            assert!(!name.contains(' '), "Name should be one word: {name}");
            assert!(
                name.chars().next().is_some_and(|c| c.is_ascii_uppercase()),
                "Name should be capitalized: {name}"
            );
        }
    }

    #[test]
    fn consumes_exactly_two_draws() {
        let mut src = ScriptedDraws::new(vec![0.0, 0.0]);
        let name = NameGenerator::generate_pet_name(&mut src);
        assert_eq!(name, "Pippy");
        assert_eq!(src.consumed(), 2);
    }
}
