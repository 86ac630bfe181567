//! The generator — the public entry point for pets and adventures.
//!
//! RULES:
//!   - Every call seeds a fresh RNG from its seed string. No state
//!     survives between calls.
//!   - No platform randomness inside generation. `fresh_seed` is the
//!     only unseeded path, and it only mints a seed string.

use crate::{
    adventure::{self, AdventureDescriptor},
    config::GeneratorConfig,
    error::GenResult,
    pet::{self, PetDescriptor},
    template::TokenRegistry,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Prefix for seeds minted by `fresh_seed`.
pub const GUEST_SEED_PREFIX: &str = "guest-";

/// Owns the configuration and token registry. Cheap to share:
/// generation takes `&self` and the type is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    registry: TokenRegistry,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_registry(config, TokenRegistry::standard())
    }

    /// Use a custom registry, e.g. the standard one with extra families.
    pub fn with_registry(config: GeneratorConfig, registry: TokenRegistry) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("generator config out of range, clamping where used: {e}");
        }
        Self { config, registry }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn generate_pet(&self, seed: &str) -> PetDescriptor {
        pet::generate_pet(seed)
    }

    /// Same pet as `generate_pet`, stamped with the caller's timestamp.
    pub fn generate_pet_at(&self, seed: &str, created_at: DateTime<Utc>) -> PetDescriptor {
        PetDescriptor {
            created_at: Some(created_at),
            ..self.generate_pet(seed)
        }
    }

    pub fn generate_adventure(
        &self,
        seed: &str,
        party_size: Option<u8>,
    ) -> GenResult<AdventureDescriptor> {
        adventure::generate_adventure(seed, party_size, &self.registry, &self.config)
    }

    /// Tokens referenced by the built-in templates that this generator
    /// cannot resolve. Empty for a healthy registry.
    pub fn missing_tokens(&self) -> Vec<String> {
        self.registry
            .missing_tokens(adventure::all_templates(), adventure::BOUND_TOKENS)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Mint a new random seed string for callers that have none.
///
/// The result is an ordinary seed: feed it to `generate_pet` or
/// `generate_adventure` and keep it to reproduce the output later.
pub fn fresh_seed() -> String {
    format!("{GUEST_SEED_PREFIX}{}", Uuid::new_v4().simple())
}
