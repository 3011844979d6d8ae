//! # Compression Function
//!
//! Message-schedule expansion (FIPS 180-4 §6.2.2 step 1) and the 64-round
//! register-mixing compression (steps 2–4).
//!
//! ## State Types
//!
//! - [`WordSchedule`]: 64 words, recreated for every block.
//! - [`WorkingState`]: registers `a..h`, reinitialised for every block and
//!   mutated across the 64 rounds.
//! - [`HashState`]: the running hash value. Initialised once, then only
//!   ever updated by modular addition in [`HashState::compress`].
//!
//! All arithmetic wraps modulo 2^32. Overflow is part of the algorithm.

use std::ops::{Index, IndexMut};

use crate::bitops::{bsig0, bsig1, ch, maj, ssig0, ssig1};
use crate::constants::{BLOCK_WORDS, INITIAL_HASH, ROUNDS, ROUND_CONSTANTS, STATE_WORDS};

// ---------------------------------------------------------------------------
// Message schedule
// ---------------------------------------------------------------------------

/// The 64-word message schedule `W` derived from one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSchedule([u32; ROUNDS]);

impl WordSchedule {
    /// Wrap a raw 64-word array.
    pub fn from_words(words: [u32; ROUNDS]) -> Self {
        Self(words)
    }

    /// Borrow all 64 words.
    pub fn as_words(&self) -> &[u32; ROUNDS] {
        &self.0
    }

    /// Fill words 16..64 from the first 16:
    ///
    /// `W[t] = W[t-16] + W[t-7] + SSIG0(W[t-15]) + SSIG1(W[t-2])`
    ///
    /// Each word depends on earlier ones, so the loop runs strictly in order.
    pub fn expand(&mut self) {
        let w = &mut self.0;
        for t in BLOCK_WORDS..ROUNDS {
            w[t] = w[t - 16]
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(ssig1(w[t - 2]));
        }
    }
}

impl Index<usize> for WordSchedule {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

// ---------------------------------------------------------------------------
// Working registers
// ---------------------------------------------------------------------------

/// Index of each working register inside [`WorkingState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

/// The eight working registers `a..h` used during one compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingState([u32; STATE_WORDS]);

impl WorkingState {
    /// Load the registers from the current hash state
    /// (`a = H[0]`, ..., `h = H[7]`).
    pub fn load(state: &HashState) -> Self {
        Self(state.0)
    }

    /// Borrow the registers in `a..h` order.
    pub fn registers(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Run one round with round constant `k` and schedule word `w`.
    ///
    /// ```text
    /// T1 = h + BSIG1(e) + CH(e,f,g) + k + w
    /// T2 = BSIG0(a) + MAJ(a,b,c)
    /// h=g; g=f; f=e; e=d+T1; d=c; c=b; b=a; a=T1+T2
    /// ```
    pub fn round(&mut self, k: u32, w: u32) {
        use Register::*;

        let t1 = self[H]
            .wrapping_add(bsig1(self[E]))
            .wrapping_add(ch(self[E], self[F], self[G]))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = bsig0(self[A]).wrapping_add(maj(self[A], self[B], self[C]));

        // Shift every register one slot towards H; the old H falls off.
        self.0.copy_within(0..STATE_WORDS - 1, 1);
        self[E] = self[E].wrapping_add(t1);
        self[A] = t1.wrapping_add(t2);
    }
}

impl Index<Register> for WorkingState {
    type Output = u32;

    fn index(&self, register: Register) -> &u32 {
        &self.0[register as usize]
    }
}

impl IndexMut<Register> for WorkingState {
    fn index_mut(&mut self, register: Register) -> &mut u32 {
        &mut self.0[register as usize]
    }
}

// ---------------------------------------------------------------------------
// Running hash state
// ---------------------------------------------------------------------------

/// The running hash value `H`, eight 32-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState([u32; STATE_WORDS]);

impl HashState {
    /// The FIPS 180-4 initial hash value `H(0)`.
    pub fn new() -> Self {
        Self(INITIAL_HASH)
    }

    /// Borrow the eight state words.
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Compress one fully expanded schedule into the state.
    ///
    /// Runs the 64 rounds on a fresh [`WorkingState`] and adds the final
    /// registers into the state word by word, modulo 2^32. This is the only
    /// method that mutates a `HashState`.
    pub fn compress(&mut self, schedule: &WordSchedule) {
        let mut working = WorkingState::load(self);
        for (k, w) in ROUND_CONSTANTS.iter().zip(schedule.as_words()) {
            working.round(*k, *w);
        }
        for (word, register) in self.0.iter_mut().zip(working.registers()) {
            *word = word.wrapping_add(*register);
        }
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}
