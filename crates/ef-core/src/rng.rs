//! Deterministic per-agent and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! A run owns one `SimRng` (used for run-wide draws such as wait-time jitter)
//! and gives every sampled agent its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs across the seed space.  Agents never
//! share RNG state, so the walk produces the same zone tallies whether agents
//! are processed sequentially or on a thread pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a uniformly random index into a collection of `len` elements.
    /// Returns `None` if `len == 0`.
    #[inline]
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for draws that do not belong to a single agent.
pub struct SimRng {
    seed: u64,
    rng:  SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed, rng: SmallRng::seed_from_u64(seed) }
    }

    /// The seed this RNG was created from.  Agent RNGs derive from it.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build the RNG for one sampled agent of this run.
    #[inline]
    pub fn agent(&self, agent: AgentId) -> AgentRng {
        AgentRng::new(self.seed, agent)
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.rng.r#gen()
    }
}
