//! RNG module - where new jewels come from
//!
//! The engine never reaches for a global random source. Every board fill and
//! refill pulls from a [`SymbolSource`] handed to it, so a seed (or a scripted
//! sequence in tests) fully determines a game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{Symbol, SYMBOL_COUNT};

/// Supplier of freshly generated symbols.
pub trait SymbolSource {
    /// Draw the next symbol.
    fn next_symbol(&mut self) -> Symbol;
}

impl<T: SymbolSource + ?Sized> SymbolSource for &mut T {
    fn next_symbol(&mut self) -> Symbol {
        (**self).next_symbol()
    }
}

/// Seeded uniform symbol generator backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The chosen seed is still available through [`GameRng::seed`] so the
    /// game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..max)
    }
}

impl SymbolSource for GameRng {
    fn next_symbol(&mut self) -> Symbol {
        Symbol::from_index(self.next_range(SYMBOL_COUNT))
    }
}

/// Replays a fixed symbol sequence, wrapping around at the end.
///
/// Meant for fixtures that need to know exactly what a refill produces.
#[derive(Debug, Clone)]
pub struct ScriptedSymbols {
    script: Vec<Symbol>,
    cursor: usize,
}

impl ScriptedSymbols {
    /// Create a source from a non-empty sequence.
    ///
    /// An empty sequence falls back to the symbols in index order.
    pub fn new(script: impl Into<Vec<Symbol>>) -> Self {
        let mut script = script.into();
        if script.is_empty() {
            script = Symbol::ALL.to_vec();
        }
        Self { script, cursor: 0 }
    }

    /// Number of symbols handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl SymbolSource for ScriptedSymbols {
    fn next_symbol(&mut self) -> Symbol {
        let sym = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        sym
    }
}
