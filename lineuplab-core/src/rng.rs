//! Deterministic RNG hierarchy.
//!
//! A master seed generates deterministic sub-seeds for each lineup ordinal.
//! Sub-seeds are derived via BLAKE3 hashing, independently of evaluation
//! order, so a parallel search scores every lineup with the same outcome
//! stream it would see sequentially.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG hierarchy.
///
/// Because derivation is hash-based rather than order-dependent, the same
/// master seed produces identical sub-seeds regardless of the order in
/// which lineups are evaluated or how many threads evaluate them.
#[derive(Debug, Clone, Copy)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> RngHierarchy {
        RngHierarchy { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the deterministic sub-seed for the lineup at enumeration
    /// position `ordinal`.
    pub fn sub_seed(&self, ordinal: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&ordinal.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Seeded series RNG for the lineup at `ordinal`.
    pub fn rng_for_lineup(&self, ordinal: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(ordinal))
    }
}
