//! Seedable randomness for the generation pipeline.
//!
//! Every shuffle, direction choice, and probabilistic skip in the engine
//! draws from one `SimpleRng` owned by the [`crate::Generator`], so a fixed
//! seed makes puzzle generation fully deterministic for tests while
//! production runs seed from the OS.

/// Simple PCG-style PRNG, seedable and WASM-friendly.
pub(crate) struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub(crate) fn new() -> Self {
        // Use getrandom for WASM-compatible random seeding.
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        let seed = u64::from_le_bytes(seed_bytes);
        Self::with_seed(seed)
    }

    pub(crate) fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    pub(crate) fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Bernoulli draw: `true` with probability `p`.
    ///
    /// The generator emits 32 bits per step, so the draw is scaled against
    /// the 32-bit range (half-open, so `p = 1.0` is always true).
    pub(crate) fn chance(&mut self, p: f64) -> bool {
        (self.next_u64() as f64 / (u32::MAX as f64 + 1.0)) < p
    }

    /// Shuffle a slice in place using Fisher-Yates.
    pub(crate) fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}
