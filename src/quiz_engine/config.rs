use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Session settings a host can keep in its own config file.
///
/// `rng_seed: Some(u64)` makes question order fully reproducible, which is
/// what the tests rely on. `None` seeds from OS entropy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    pub fn seeded(seed: u64) -> Self {
        SessionConfig { rng_seed: Some(seed) }
    }

    pub fn build_rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}
