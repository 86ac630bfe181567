//! The built-in narrative vocabulary.
//!
//! Every token family the adventure templates may reference is listed in
//! FAMILIES. Entries may themselves contain tokens; the template engine
//! expands them recursively.
//!
//! RULE: Appending to a list changes what existing seeds produce for
//! adventures that reach that list. Treat edits like pool reorders.

use crate::{
    sampler::{w, WeightEntry},
    template::{Resolver, TokenRegistry},
};

// ── Creatures and monsters ─────────────────────────

const CREATURE: &[&str] = &[
    "glimmer moth", "mud crab", "lantern newt", "thornback boar", "cloud jelly",
    "rust beetle", "hollow owl", "ember salamander", "moss golem", "static eel",
    "puddle toad", "brass wasp",
];

const CREATURE_PLURAL: &[&str] = &[
    "glimmer moths", "mud crabs", "lantern newts", "thornback boars", "cloud jellies",
    "rust beetles", "hollow owls", "ember salamanders", "moss golems", "static eels",
    "puddle toads", "brass wasps",
];

const CREATURE_ADJ: &[WeightEntry<&str>] = &[
    w("grumpy", 3.0),
    w("tiny", 3.0),
    w("sleepy", 3.0),
    w("enormous", 2.0),
    w("glowing", 2.0),
    w("feral", 2.0),
    w("lost", 2.0),
    w("ancient", 1.0),
];

const MONSTER: &[&str] = &[
    "a ${creature_adj} ${creature}",
    "a swarm of ${creature_plural}",
    "${count_small} ${creature_adj} ${creature_plural}",
];

const BOSS: &[&str] = &["the ${boss_title} ${creature}", "${npc_name} the ${boss_title}"];

const BOSS_TITLE: &[&str] = &["Dread", "Elder", "Iron-Jawed", "Many-Eyed", "Howling", "Unblinking"];

const VILLAIN_GROUP: &[&str] = &[
    "sock goblins", "gearwork bandits", "pickpocket crows", "bog hags", "rogue automatons",
    "sneak-weasels",
];

const PET_SPECIES: &[&str] = &["cat", "dog", "fox", "bunny", "frog", "owl", "axolotl", "dragon"];

// ── Objects and places ─────────────────────────────

const MATERIAL: &[&str] = &[
    "brass", "moonstone", "driftwood", "obsidian", "silk", "amber", "copper", "glass",
    "bone", "crystal",
];

const TRINKET: &[&str] = &[
    "locket", "compass", "music box", "key", "lantern", "figurine", "medallion", "spyglass",
    "hourglass",
];

const LEGENDARY_ADJ: &[&str] = &["lost", "cursed", "forgotten", "singing", "shimmering", "sleeping"];

const TREASURE: &[WeightEntry<&str>] = &[
    w("a ${material} ${trinket}", 5.0),
    w("a chest of ${material} coins", 3.0),
    w("the ${legendary_adj} ${trinket} of ${npc_name}", 2.0),
];

const LOCATION: &[&str] = &[
    "the old lighthouse", "a sunken shrine", "the crooked bridge", "the abandoned mill",
    "a hollow tree", "the market square", "the clocktower", "a collapsed mine",
    "the ${material} gate",
];

const HIDING_SPOT: &[&str] = &[
    "under a loose floorboard", "behind a waterfall", "inside a hollow stump",
    "at the bottom of a well", "beneath a mossy statue",
];

const DIRECTION: &[&str] = &["north", "south", "east", "west", "over the hills", "downriver"];

const VEHICLE: &[&str] = &["a rickety raft", "a hot-air balloon", "a borrowed mine cart", "a snail-drawn wagon"];

const MACHINE: &[&str] = &[
    "the clockwork gate", "a steam lift", "an old signal tower", "the puzzle lock",
    "a rune-lamp array", "a ${material} automaton",
];

const MALFUNCTION: &[&str] = &[
    "jams solid", "sparks wildly", "starts running backwards", "hums a warning",
    "goes completely dark",
];

const FOOD: &[&str] = &[
    "honey cakes", "glowberry jam", "smoked fish", "acorn bread", "star-fruit", "pepper soup",
];

// ── People ─────────────────────────────────────────

const NPC: &[&str] = &["${npc_title} ${npc_name}", "${npc_name} the ${npc_role}"];

const NPC_TITLE: &[&str] = &["Old", "Captain", "Auntie", "Professor", "Little", "Sir", "Madame"];

const NPC_NAME: &[&str] = &[
    "Bramble", "Tansy", "Quill", "Maple", "Pemberton", "Juniper", "Fennick", "Oddsworth",
    "Marigold", "Tumble",
];

const NPC_ROLE: &[&str] = &[
    "merchant", "hermit", "cartographer", "baker", "tinkerer", "bard", "ferryman", "librarian",
];

const NPC_MOOD: &[&str] = &["nervous", "cheerful", "suspicious", "forgetful", "boastful", "weary"];

const NPC_ARCHETYPE: &[&str] = &["a ${npc_mood} ${npc_role}", "${npc}, a ${npc_mood} ${npc_role}"];

const LOST_ONE: &[&str] = &[
    "a baby ${creature}",
    "the apprentice of ${npc}",
    "a lost courier",
    "a stranded ${npc_role}",
    "a runaway kite-pup",
];

const CAPTOR: &[&str] = &["a band of ${villain_group}", "${monster}", "${boss}"];

const FACTION: &[&str] = &[
    "the River Guild", "the Owlbright Council", "the Tinkers' Union", "the Mossfolk",
    "the Lantern Keepers",
];

const RIVAL: &[&str] = &[
    "a smug rival ${pet_species}",
    "${npc} and their prize ${pet_species}",
    "a gang of ${villain_group}",
];

// ── Mystery and social ─────────────────────────────

const MYSTERY_SUBJECT: &[&str] = &[
    "the vanishing lanterns",
    "strange footprints that lead nowhere",
    "a melody with no source",
    "the missing ${trinket}",
    "a door that wasn't there yesterday",
];

const CLUE: &[&str] = &[
    "a torn map",
    "muddy pawprints",
    "a half-burnt letter",
    "a trail of ${material} shavings",
    "an echo that answers back",
];

const SOUND: &[&str] = &["a distant bell", "a low rumble", "muffled giggling", "a lonely whistle"];

const EVENT: &[&str] = &[
    "harvest festival", "lantern parade", "tea ceremony", "trade fair", "moonlight dance",
    "naming day",
];

const ARGUMENT_TOPIC: &[&str] = &[
    "who saw ${treasure} first",
    "the proper way to brew acorn tea",
    "a disputed map",
    "an unpaid debt of ${coins} coins",
];

const SECRET: &[&str] = &[
    "a hidden tunnel under ${location}",
    "that ${npc} is secretly a ${npc_role}",
    "where the ${legendary_adj} ${trinket} went",
];

// ── Environment ────────────────────────────────────

const WEATHER: &[&str] = &[
    "a sudden hailstorm", "thick fog", "a howling gale", "a sweltering heatwave",
    "sideways rain", "a surprise blizzard",
];

const HAZARD: &[&str] = &[
    "crumbling ledges", "sinking sand", "thorny brambles", "a flooded passage", "slick ice",
    "drifting spores",
];

const TERRAIN_FEATURE: &[&str] = &["rope bridge", "rockslide", "ravine", "whirlpool", "ice shelf"];

const TIME_OF_DAY: &[&str] = &["at dawn", "by moonlight", "just before dusk", "at high noon"];

// ── Rewards ────────────────────────────────────────

const CURRENCY: &[WeightEntry<&str>] = &[
    w("gold coins", 5.0),
    w("silver shells", 3.0),
    w("moon marks", 1.0),
];

const ABILITY: &[&str] = &[
    "Dash", "Lantern Sight", "Echo Sense", "Stone Skin", "Whisker Radar", "Quick Paws",
    "Charm Aura",
];

const HONORIFIC: &[&str] = &[
    "Friend of the Forest", "Keeper of Lanterns", "Bridge Mender", "Honorary Tinker",
    "Brave Little Paw",
];

/// Every built-in token family.
pub const FAMILIES: &[(&str, Resolver)] = &[
    ("creature", Resolver::Uniform(CREATURE)),
    ("creature_plural", Resolver::Uniform(CREATURE_PLURAL)),
    ("creature_adj", Resolver::Weighted(CREATURE_ADJ)),
    ("monster", Resolver::Uniform(MONSTER)),
    ("boss", Resolver::Uniform(BOSS)),
    ("boss_title", Resolver::Uniform(BOSS_TITLE)),
    ("villain_group", Resolver::Uniform(VILLAIN_GROUP)),
    ("pet_species", Resolver::Uniform(PET_SPECIES)),
    ("material", Resolver::Uniform(MATERIAL)),
    ("trinket", Resolver::Uniform(TRINKET)),
    ("legendary_adj", Resolver::Uniform(LEGENDARY_ADJ)),
    ("treasure", Resolver::Weighted(TREASURE)),
    ("location", Resolver::Uniform(LOCATION)),
    ("hiding_spot", Resolver::Uniform(HIDING_SPOT)),
    ("direction", Resolver::Uniform(DIRECTION)),
    ("vehicle", Resolver::Uniform(VEHICLE)),
    ("machine", Resolver::Uniform(MACHINE)),
    ("malfunction", Resolver::Uniform(MALFUNCTION)),
    ("food", Resolver::Uniform(FOOD)),
    ("npc", Resolver::Uniform(NPC)),
    ("npc_title", Resolver::Uniform(NPC_TITLE)),
    ("npc_name", Resolver::Uniform(NPC_NAME)),
    ("npc_role", Resolver::Uniform(NPC_ROLE)),
    ("npc_mood", Resolver::Uniform(NPC_MOOD)),
    ("npc_archetype", Resolver::Uniform(NPC_ARCHETYPE)),
    ("lost_one", Resolver::Uniform(LOST_ONE)),
    ("captor", Resolver::Uniform(CAPTOR)),
    ("faction", Resolver::Uniform(FACTION)),
    ("rival", Resolver::Uniform(RIVAL)),
    ("mystery_subject", Resolver::Uniform(MYSTERY_SUBJECT)),
    ("clue", Resolver::Uniform(CLUE)),
    ("sound", Resolver::Uniform(SOUND)),
    ("event", Resolver::Uniform(EVENT)),
    ("argument_topic", Resolver::Uniform(ARGUMENT_TOPIC)),
    ("secret", Resolver::Uniform(SECRET)),
    ("weather", Resolver::Uniform(WEATHER)),
    ("hazard", Resolver::Uniform(HAZARD)),
    ("terrain_feature", Resolver::Uniform(TERRAIN_FEATURE)),
    ("time_of_day", Resolver::Uniform(TIME_OF_DAY)),
    ("currency", Resolver::Weighted(CURRENCY)),
    ("ability", Resolver::Uniform(ABILITY)),
    ("honorific", Resolver::Uniform(HONORIFIC)),
    ("count_small", Resolver::Number { min: 2, max: 5 }),
    ("coins", Resolver::Number { min: 10, max: 250 }),
    ("gems", Resolver::Number { min: 1, max: 6 }),
    ("days", Resolver::Number { min: 2, max: 7 }),
    ("hours", Resolver::Number { min: 1, max: 12 }),
    ("leagues", Resolver::Number { min: 2, max: 20 }),
];

impl TokenRegistry {
    /// Registry holding every built-in token family.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (name, resolver) in FAMILIES {
            registry.register(*name, *resolver);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names_are_unique() {
        let mut names: Vec<&str> = FAMILIES.iter().map(|(n, _)| *n).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before, "duplicate token family name");
    }

    #[test]
    fn standard_registry_has_every_family() {
        let registry = TokenRegistry::standard();
        assert_eq!(registry.len(), FAMILIES.len());
        assert!(registry.len() >= 40, "vocabulary shrank to {}", registry.len());
    }

    #[test]
    fn vocabulary_is_self_contained() {
        let registry = TokenRegistry::standard();
        let missing = registry.missing_tokens(std::iter::empty(), &[]);
        assert!(missing.is_empty(), "vocabulary references unknown tokens: {missing:?}");
    }

    #[test]
    fn singular_and_plural_creatures_line_up() {
        assert_eq!(CREATURE.len(), CREATURE_PLURAL.len());
    }

    #[test]
    fn no_empty_vocabulary_lists() {
        for (name, resolver) in FAMILIES {
            if let Resolver::Number { min, max } = resolver {
                assert!(min <= max, "{name}: bad numeric range");
            } else {
                assert!(!resolver.vocabulary().is_empty(), "{name}: empty vocabulary");
            }
        }
    }
}
