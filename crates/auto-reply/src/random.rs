//! Uniform random draws, injected wherever a decision is probabilistic.

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

/// Source of values uniformly distributed in `[0, 1)`.
///
/// Dispatch and pool draws take this as an explicit argument so the exact
/// draw sequence can be replayed. A source is used by one caller at a time;
/// concurrent dispatchers each hold their own.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

/// OS- or seed-initialised generator used by the binary.
pub type StdRngSource = RngSource<StdRng>;

impl RngSource<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Reproducible generator, for replaying a session.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of values in order, wrapping around when exhausted.
///
/// An empty script yields `0.0`, which passes every gate above zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    consumed: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            consumed: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.0
        } else {
            self.values[self.consumed % self.values.len()]
        };
        self.consumed += 1;
        value
    }
}
