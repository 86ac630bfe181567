//! Seed hashing — folds an arbitrary seed string into the RNG's initial state.
//!
//! FNV-1a over the UTF-8 bytes with wrapping 32-bit arithmetic.
//! The function is total: every string, including "", maps to a value.
//!
//! RULE: These constants are frozen. Changing either one changes what
//! every existing seed produces.

/// FNV-1a 32-bit offset basis. Also the hash of the empty string.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a seed string into a `u32`.
pub fn hash_seed(seed: &str) -> u32 {
    hash_bytes(seed.as_bytes())
}

/// Hash raw bytes. `hash_seed` is a thin wrapper over this.
pub fn hash_bytes(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |acc, &b| {
        (acc ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}
