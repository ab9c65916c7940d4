use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where per-request randomness comes from.
///
/// The estimator and diagnoser only take `&mut impl Rng`; this decides which
/// generator the surrounding service hands them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropySource {
    #[default]
    System,
    Seeded(u64),
}

impl EntropySource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::System, Self::Seeded)
    }

    pub fn rng(&self) -> StdRng {
        match self {
            EntropySource::System => StdRng::from_entropy(),
            EntropySource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}
