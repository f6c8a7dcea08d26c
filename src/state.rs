//! Shared, immutable application state.

use std::sync::Arc;

use crate::adapters::entropy::StdRandom;
use crate::design::Synthesizer;
use crate::latency::Latency;
use crate::ports::RandomSource;

/// Produces a fresh random source for each request.
pub type RandomFactory = Arc<dyn Fn() -> Box<dyn RandomSource> + Send + Sync>;

/// State handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    synthesizer: Arc<Synthesizer>,
    latency: Latency,
    random: RandomFactory,
}

impl AppState {
    /// Create state backed by OS-seeded randomness.
    #[must_use]
    pub fn new(synthesizer: Synthesizer, latency: Latency) -> Self {
        Self {
            synthesizer: Arc::new(synthesizer),
            latency,
            random: Arc::new(|| Box::new(StdRandom::from_os())),
        }
    }

    /// Replace the per-request random source.
    #[cfg(test)]
    #[must_use]
    pub fn with_random(
        mut self,
        factory: impl Fn() -> Box<dyn RandomSource> + Send + Sync + 'static,
    ) -> Self {
        self.random = Arc::new(factory);
        self
    }

    /// The design synthesizer.
    #[must_use]
    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Delay settings.
    #[must_use]
    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// A random source owned by the calling request.
    #[must_use]
    pub fn random(&self) -> Box<dyn RandomSource> {
        (self.random)()
    }
}
