//! petforge-core: deterministic pets and adventures from seed strings.
//!
//! The same seed always yields the same descriptor, on every run and
//! every machine. Pets and adventures draw from separate streams, so
//! reusing one seed string for both is safe.

pub mod adventure;
pub mod config;
pub mod error;
pub mod generator;
pub mod hash;
pub mod name_generator;
pub mod pet;
pub mod rarity;
pub mod rng;
pub mod sampler;
pub mod template;
pub mod traits;
pub mod types;
pub mod vocabulary;

pub use adventure::AdventureDescriptor;
pub use error::{GenError, GenResult};
pub use generator::{fresh_seed, Generator};
pub use pet::PetDescriptor;
pub use rarity::RarityTier;

/// Generate the pet for `seed` with the default generator.
pub fn generate_pet(seed: &str) -> PetDescriptor {
    pet::generate_pet(seed)
}

/// Generate the adventure for `seed` with the default generator.
/// `Some(n)` with `n >= 2` requests a group adventure of `n` members.
pub fn generate_adventure(seed: &str, party_size: Option<u8>) -> GenResult<AdventureDescriptor> {
    Generator::default().generate_adventure(seed, party_size)
}
