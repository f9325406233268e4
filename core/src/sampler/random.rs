use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Draws `size` distinct numbers in `1..=max`, keeping every member of `starting_set`.
///
/// A starting set that already has `size` members is returned as-is. Otherwise `size` must be
/// strictly less than `max`, and drawing stops with [`GameError::GenerationExhausted`] after
/// `size * 10` attempts.
pub fn generate_random_set_of_numbers<R: Rng>(
    rng: &mut R,
    size: CellCount,
    max: CellCount,
    starting_set: &MineIds,
) -> Result<MineIds> {
    let mut set = starting_set.clone();
    if set.len() == size as usize {
        return Ok(set);
    }

    if size >= max {
        return Err(GameError::InvalidConfiguration {
            mines: size,
            cells: max,
        });
    }

    let budget = size.saturating_mul(10);
    let mut attempts: CellCount = 0;
    while set.len() != size as usize {
        set.insert(rng.random_range(1..=max));
        attempts += 1;
        if attempts > budget {
            log::warn!(
                "Quitting after {} draws with size={} and max={}",
                budget,
                size,
                max
            );
            return Err(GameError::GenerationExhausted {
                attempts: budget,
                requested: size,
                max,
            });
        }
    }

    Ok(set)
}

/// Uniform placement from a seeded [`SmallRng`]; the same seed always yields the same boards.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineSampler for RandomSampler {
    fn sample(&mut self, count: CellCount, max: CellCount, forced: &MineIds) -> Result<MineIds> {
        generate_random_set_of_numbers(&mut self.rng, count, max, forced)
    }
}
