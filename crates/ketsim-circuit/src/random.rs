//! Deterministic pseudo-random source.
//!
//! A plain linear congruential generator. Every instance owns its state, so
//! two generators built from the same parameters produce the same stream
//! regardless of what else runs in the process.

use ketsim_core::{Arity, Matrix};
use ndarray::Array2;
use num_complex::Complex64;
use serde::Serialize;
use tracing::trace;

use crate::error::{CircuitError, CircuitResult};
use crate::expm::expm_i;

/// Default modulus.
pub const DEFAULT_M: u64 = 65537;
/// Default multiplier.
pub const DEFAULT_A: u64 = 75;
/// Default increment.
pub const DEFAULT_C: u64 = 74;
/// Default seed.
pub const DEFAULT_SEED: u64 = 27;

/// Draws discarded right after seeding.
const WARM_UP_DRAWS: usize = 99;

/// Scale of the entries drawn for random Hamiltonians.
const HAMILTONIAN_SCALE: f64 = 100.0;

/// Linear congruential generator with `state ← (a·state + c) mod m`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PseudoRandomGenerator {
    m: u64,
    a: u64,
    c: u64,
    seed: u64,
    state: u64,
}

impl PseudoRandomGenerator {
    /// Generator with the default parameters and the given seed.
    pub fn new(seed: u64) -> Self {
        Self::warmed_up(DEFAULT_M, DEFAULT_A, DEFAULT_C, seed)
    }

    /// Generator with explicit parameters.
    ///
    /// The state starts at `seed mod m` and is advanced 99 times before the
    /// first value is handed out. Fails when `m` is zero.
    pub fn with_params(m: u64, a: u64, c: u64, seed: u64) -> CircuitResult<Self> {
        if m == 0 {
            return Err(CircuitError::InvalidModulus);
        }
        Ok(Self::warmed_up(m, a, c, seed))
    }

    fn warmed_up(m: u64, a: u64, c: u64, seed: u64) -> Self {
        let mut rng = Self {
            m,
            a,
            c,
            seed,
            state: seed % m,
        };
        for _ in 0..WARM_UP_DRAWS {
            rng.rand_int();
        }
        trace!(seed, state = rng.state, "seeded generator");
        rng
    }

    /// Advance once and return the new state, in `[0, m)`.
    pub fn rand_int(&mut self) -> u64 {
        let next = (u128::from(self.a) * u128::from(self.state) + u128::from(self.c))
            % u128::from(self.m);
        // Reduced modulo a u64, so it fits.
        self.state = next as u64;
        self.state
    }

    /// Advance once and return a float.
    ///
    /// Without a scale the value is `state / m`, in `[0, 1)`. With scale `l`
    /// it is `(state / m - 0.5) · 2l`, in `[-l, l)`.
    pub fn rand(&mut self, scale: Option<f64>) -> f64 {
        let unit = self.rand_int() as f64 / self.m as f64;
        match scale {
            Some(l) => (unit - 0.5) * 2.0 * l,
            None => unit,
        }
    }

    /// Random unitary `exp(iH)` of the given arity.
    ///
    /// `H` is Hermitian and built from `4^k` consecutive draws of
    /// `rand(Some(100))`, filling the upper triangle row by row: each diagonal
    /// entry takes one draw, each off-diagonal entry takes two (real then
    /// imaginary part), and the lower triangle mirrors it conjugated.
    pub fn rand_unitary(&mut self, arity: Arity) -> Matrix {
        let dim = arity.dimension();
        let mut h: Matrix = Array2::zeros((dim, dim));
        for row in 0..dim {
            h[[row, row]] = Complex64::new(self.rand(Some(HAMILTONIAN_SCALE)), 0.0);
            for col in (row + 1)..dim {
                let re = self.rand(Some(HAMILTONIAN_SCALE));
                let im = self.rand(Some(HAMILTONIAN_SCALE));
                h[[row, col]] = Complex64::new(re, im);
                h[[col, row]] = Complex64::new(re, -im);
            }
        }
        expm_i(&h)
    }

    /// Modulus.
    pub fn m(&self) -> u64 {
        self.m
    }

    /// Multiplier.
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Increment.
    pub fn c(&self) -> u64 {
        self.c
    }

    /// Seed the generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current state (the last value returned by [`rand_int`](Self::rand_int)).
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for PseudoRandomGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
