//! Adventure generation — biome, objective, complication, rewards, narrative.
//!
//! DRAW ORDER (fixed, documented, never reordered):
//!   1. biome tier
//!   2. biome within the tier
//!   3. party roles, one per member (group adventures only)
//!   4. objective category, objective template, its tokens
//!   5. complication category, complication template, its tokens
//!   6. per reward: category, template, its tokens
//!   7. intro template, its tokens
//!
//! Difficulty and reward count are derived, not drawn.

use crate::{
    config::GeneratorConfig,
    error::GenResult,
    rng::{SeedRng, StreamSlot, UnitSource},
    sampler::{pick, pick_uniform, w, WeightEntry},
    template::{TemplateEngine, TokenRegistry},
    traits::{display_via_label, TraitPool},
    types::Difficulty,
};
use serde::{Deserialize, Serialize};

/// Tokens supplied per call rather than by the registry.
pub const BOUND_TOKENS: &[&str] = &["biome_name", "biome_mood", "party_size"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biome {
    pub name: String,
    pub mood: String,
    pub danger_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiomeDef {
    pub name: &'static str,
    pub mood: &'static str,
    pub danger_level: u8,
}

const fn biome(name: &'static str, mood: &'static str, danger_level: u8) -> BiomeDef {
    BiomeDef { name, mood, danger_level }
}

impl From<BiomeDef> for Biome {
    fn from(def: BiomeDef) -> Self {
        Self {
            name: def.name.to_string(),
            mood: def.mood.to_string(),
            danger_level: def.danger_level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeTier {
    Common,
    Medium,
    High,
}

const COMMON_BIOMES: &[WeightEntry<BiomeDef>] = &[
    w(biome("Whispering Meadow", "peaceful", 1), 1.0),
    w(biome("Mossy Woods", "calm", 1), 1.0),
    w(biome("Pebble Beach", "breezy", 1), 1.0),
    w(biome("Old Orchard", "cozy", 2), 1.0),
    w(biome("Foggy Marsh", "murky", 2), 1.0),
];

const MEDIUM_BIOMES: &[WeightEntry<BiomeDef>] = &[
    w(biome("Crystal Caverns", "glittering", 2), 1.0),
    w(biome("Thunder Plateau", "tense", 3), 1.0),
    w(biome("Sunken Library", "eerie", 3), 1.0),
    w(biome("Frostbite Pass", "bitter", 3), 1.0),
];

const HIGH_BIOMES: &[WeightEntry<BiomeDef>] = &[
    w(biome("Ember Wastes", "scorching", 4), 1.0),
    w(biome("Clockwork Ruins", "ominous", 4), 1.0),
    w(biome("Starfall Crater", "otherworldly", 4), 1.0),
];

impl BiomeTier {
    pub fn biomes(&self) -> &'static [WeightEntry<BiomeDef>] {
        match self {
            Self::Common => COMMON_BIOMES,
            Self::Medium => MEDIUM_BIOMES,
            Self::High => HIGH_BIOMES,
        }
    }
}

impl TraitPool for BiomeTier {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Common, 6.0),
        w(Self::Medium, 3.0),
        w(Self::High, 1.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    Treasure,
    Rescue,
    Mystery,
    Social,
}

impl ObjectiveType {
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Treasure => &[
                "recover ${treasure} hidden ${hiding_spot} near ${location}.",
                "dig up ${treasure} before ${rival} gets there first.",
                "follow ${clue} to ${treasure}, buried ${direction} of ${location}.",
                "trade ${food} with ${npc_archetype} for a map to ${treasure}.",
            ],
            Self::Rescue => &[
                "rescue ${lost_one} from ${captor}.",
                "find ${lost_one}, last seen near ${location} ${days} days ago.",
                "escort ${lost_one} safely home aboard ${vehicle}.",
                "free ${npc} from the clutches of ${captor}.",
            ],
            Self::Mystery => &[
                "uncover the truth behind ${mystery_subject}.",
                "figure out why ${sound} echoes from ${location} every night.",
                "piece together ${clue} and ${clue} to explain ${mystery_subject}.",
                "learn ${secret} before the ${event} begins.",
            ],
            Self::Social => &[
                "help ${npc} prepare for the ${event}.",
                "settle an argument between ${npc} and ${npc} about ${argument_topic}.",
                "win the trust of ${faction} by delivering ${food} to ${location}.",
                "convince ${npc_archetype} to join the ${event}.",
            ],
        }
    }
}

impl TraitPool for ObjectiveType {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Treasure, 30.0),
        w(Self::Rescue, 25.0),
        w(Self::Mystery, 25.0),
        w(Self::Social, 20.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Treasure => "treasure",
            Self::Rescue => "rescue",
            Self::Mystery => "mystery",
            Self::Social => "social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplicationType {
    Environmental,
    Social,
    Technical,
    Combat,
}

impl ComplicationType {
    /// Difficulty added on top of the biome's danger level.
    pub fn difficulty_bonus(&self) -> Difficulty {
        match self {
            Self::Environmental | Self::Social => 0,
            Self::Technical => 1,
            Self::Combat => 2,
        }
    }

    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Environmental => &[
                "${weather} rolls in without warning.",
                "the path is blocked by ${hazard} for ${leagues} leagues.",
                "a ${terrain_feature} has swallowed the only road ${direction}.",
                "every step is slowed by ${hazard}, and ${weather} makes it worse.",
            ],
            Self::Social => &[
                "${rival} insists on tagging along.",
                "${npc_archetype} spreads rumors that the quest is cursed.",
                "${faction} demands a toll of ${coins} ${currency}.",
                "${npc} and ${npc} will not stop arguing about ${argument_topic}.",
            ],
            Self::Technical => &[
                "${machine} ${malfunction} at the worst possible moment.",
                "the only map was drawn by ${npc}, and it is upside down.",
                "${machine} needs ${hours} hours of repairs before anyone can pass.",
                "the only way forward is ${machine}, and it ${malfunction}.",
            ],
            Self::Combat => &[
                "the way is guarded by ${monster}.",
                "${boss} awakens, furious.",
                "an ambush is sprung by ${captor} ${time_of_day}.",
                "both ${monster} and ${monster} attack at once.",
            ],
        }
    }
}

impl TraitPool for ComplicationType {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Environmental, 30.0),
        w(Self::Social, 25.0),
        w(Self::Technical, 20.0),
        w(Self::Combat, 25.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Environmental => "environmental",
            Self::Social => "social",
            Self::Technical => "technical",
            Self::Combat => "combat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Items,
    Currency,
    Abilities,
    Social,
}

impl RewardType {
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::Items => &[
                "a ${material} ${trinket}",
                "a satchel of ${food}",
                "${gems} polished gems",
                "a map to ${location}",
                "${treasure}",
            ],
            Self::Currency => &[
                "${coins} ${currency}",
                "a purse of ${coins} ${currency}",
                "an IOU from ${npc} worth ${coins} ${currency}",
            ],
            Self::Abilities => &[
                "the ${ability} technique",
                "a lesson in ${ability} from ${npc}",
                "a scroll teaching ${ability}",
            ],
            Self::Social => &[
                "the friendship of ${npc}",
                "honorary membership in ${faction}",
                "a song sung in your honor at the ${event}",
                "the title of ${honorific}",
            ],
        }
    }
}

impl TraitPool for RewardType {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Items, 35.0),
        w(Self::Currency, 30.0),
        w(Self::Abilities, 15.0),
        w(Self::Social, 20.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Currency => "currency",
            Self::Abilities => "abilities",
            Self::Social => "social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    Leader,
    Scout,
    Support,
    Specialist,
    Diplomat,
    Guardian,
}

impl TraitPool for PartyRole {
    const POOL: &'static [WeightEntry<Self>] = &[
        w(Self::Leader, 10.0),
        w(Self::Scout, 20.0),
        w(Self::Support, 20.0),
        w(Self::Specialist, 15.0),
        w(Self::Diplomat, 15.0),
        w(Self::Guardian, 20.0),
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Leader => "Leader",
            Self::Scout => "Scout",
            Self::Support => "Support",
            Self::Specialist => "Specialist",
            Self::Diplomat => "Diplomat",
            Self::Guardian => "Guardian",
        }
    }
}

display_via_label!(BiomeTier, ObjectiveType, ComplicationType, RewardType, PartyRole);

const SOLO_INTROS: &[&str] = &[
    "Your pet sets out for ${biome_name} ${time_of_day}, where the air feels ${biome_mood}.",
    "The air turns ${biome_mood} as your pet reaches ${biome_name}.",
    "Word arrives from ${biome_name}: ${npc} needs a hero.",
];

const GROUP_INTROS: &[&str] = &[
    "A party of ${party_size} pets sets out for ${biome_name} ${time_of_day}.",
    "${party_size} companions gather at the edge of ${biome_name}, where everything feels ${biome_mood}.",
];

/// One party member's role. Members are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub member: u8,
    pub role: PartyRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdventureDescriptor {
    pub seed: String,
    pub biome: Biome,
    pub objective_type: ObjectiveType,
    pub objective_text: String,
    pub complication_type: ComplicationType,
    pub complication_text: String,
    pub difficulty: Difficulty,
    pub rewards: Vec<String>,
    /// Empty for solo adventures.
    pub party: Vec<RoleAssignment>,
    pub narrative_text: String,
}

impl AdventureDescriptor {
    pub fn is_group(&self) -> bool {
        !self.party.is_empty()
    }
}

/// Smallest group adventure. Anything below is a solo run.
pub const MIN_PARTY_SIZE: u8 = 2;

/// Group size actually used for a request, or `None` for a solo run.
/// Requests below 2 are solo; requests above `max` are clamped, and a
/// group never shrinks below 2 even when `max` is misconfigured.
pub fn effective_party_size(requested: Option<u8>, max: u8) -> Option<u8> {
    match requested {
        Some(n) if n >= MIN_PARTY_SIZE => Some(n.min(max.max(MIN_PARTY_SIZE))),
        _ => None,
    }
}

/// 1 reward, plus one at difficulty 3 and another at difficulty 5.
pub fn reward_count(difficulty: Difficulty) -> usize {
    1 + usize::from(difficulty >= 3) + usize::from(difficulty >= 5)
}

/// Every template string the adventure pools can select, for coverage checks.
pub fn all_templates() -> Vec<&'static str> {
    let mut templates: Vec<&'static str> = Vec::new();
    for objective in ObjectiveType::variants() {
        templates.extend_from_slice(objective.templates());
    }
    for complication in ComplicationType::variants() {
        templates.extend_from_slice(complication.templates());
    }
    for reward in RewardType::variants() {
        templates.extend_from_slice(reward.templates());
    }
    templates.extend_from_slice(SOLO_INTROS);
    templates.extend_from_slice(GROUP_INTROS);
    templates
}

/// Generate the adventure for `seed` on a fresh adventure-stream RNG.
pub fn generate_adventure(
    seed: &str,
    party_size: Option<u8>,
    registry: &TokenRegistry,
    config: &GeneratorConfig,
) -> GenResult<AdventureDescriptor> {
    let mut rng = SeedRng::for_seed(seed, StreamSlot::Adventure);
    build_adventure(seed, party_size, &mut rng, registry, config)
}

/// Compose an adventure from an arbitrary draw source, in the documented order.
pub fn build_adventure<R: UnitSource + ?Sized>(
    seed: &str,
    party_size: Option<u8>,
    rng: &mut R,
    registry: &TokenRegistry,
    config: &GeneratorConfig,
) -> GenResult<AdventureDescriptor> {
    let tier = *pick(BiomeTier::POOL, rng);
    let biome: Biome = (*pick(tier.biomes(), rng)).into();

    let party: Vec<RoleAssignment> = match effective_party_size(party_size, config.max_party_size) {
        Some(n) => (1..=n)
            .map(|member| RoleAssignment { member, role: *pick(PartyRole::POOL, rng) })
            .collect(),
        None => Vec::new(),
    };

    let mut engine = TemplateEngine::new(registry, config.token_policy, config.max_template_depth);
    engine
        .bind("biome_name", biome.name.as_str())
        .bind("biome_mood", biome.mood.as_str());
    if !party.is_empty() {
        engine.bind("party_size", party.len().to_string());
    }

    let objective_type = *pick(ObjectiveType::POOL, rng);
    let objective_text = engine.expand(*pick_uniform(objective_type.templates(), rng), rng)?;

    let complication_type = *pick(ComplicationType::POOL, rng);
    let complication_text = engine.expand(*pick_uniform(complication_type.templates(), rng), rng)?;

    let difficulty = biome.danger_level + complication_type.difficulty_bonus();

    let mut rewards = Vec::with_capacity(reward_count(difficulty));
    for _ in 0..reward_count(difficulty) {
        let reward_type = *pick(RewardType::POOL, rng);
        rewards.push(engine.expand(*pick_uniform(reward_type.templates(), rng), rng)?);
    }

    let intros = if party.is_empty() { SOLO_INTROS } else { GROUP_INTROS };
    let intro = engine.expand(*pick_uniform(intros, rng), rng)?;

    let narrative_text = compose_narrative(&intro, &objective_text, &complication_text, &party, &rewards);

    log::debug!(
        "seed={seed:?} adventure: biome={} objective={objective_type} complication={complication_type} difficulty={difficulty} party={}",
        biome.name,
        party.len()
    );

    Ok(AdventureDescriptor {
        seed: seed.to_string(),
        biome,
        objective_type,
        objective_text,
        complication_type,
        complication_text,
        difficulty,
        rewards,
        party,
        narrative_text,
    })
}

fn compose_narrative(
    intro: &str,
    objective: &str,
    complication: &str,
    party: &[RoleAssignment],
    rewards: &[String],
) -> String {
    let mut text = format!("{intro} The quest: {objective} The catch: {complication}");
    if !party.is_empty() {
        let roles: Vec<&str> = party.iter().map(|a| a.role.label()).collect();
        text.push_str(&format!(" The party: {}.", roles.join(", ")));
    }
    let noun = if rewards.len() == 1 { "reward" } else { "rewards" };
    text.push_str(&format!(" The {noun}: {}.", join_list(rewards)));
    text
}

/// "a", "a and b", "a, b and c".
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
