use super::*;

/// Always hands back the same preset ids, ignoring the requested count.
///
/// Replays a known board: forced ids are still merged in so the preset never drops a
/// caller-forced mine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedSampler {
    mines: MineIds,
}

impl FixedSampler {
    pub fn new(mines: impl IntoIterator<Item = CellId>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineSampler for FixedSampler {
    fn sample(&mut self, _count: CellCount, _max: CellCount, forced: &MineIds) -> Result<MineIds> {
        Ok(self.mines.union(forced).copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_preset_regardless_of_count() {
        let mut sampler = FixedSampler::new([1, 5, 3, 8]);

        let mines = sampler.sample(1, 9, &MineIds::new()).unwrap();

        assert_eq!(mines, MineIds::from([1, 3, 5, 8]));
    }

    #[test]
    fn merges_forced_ids() {
        let mut sampler = FixedSampler::new([2]);

        let mines = sampler.sample(2, 9, &MineIds::from([7])).unwrap();

        assert_eq!(mines, MineIds::from([2, 7]));
    }
}
