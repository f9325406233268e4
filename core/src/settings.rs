use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub size: Coord,
    pub mine_count: CellCount,
    #[serde(default)]
    pub forced_mine_positions: Vec<CellId>,
}

impl Settings {
    pub fn new(size: Coord, mine_count: CellCount) -> Self {
        Self {
            size,
            mine_count,
            forced_mine_positions: Vec::new(),
        }
    }

    pub fn with_forced_mines(mut self, ids: impl IntoIterator<Item = CellId>) -> Self {
        self.forced_mine_positions = ids.into_iter().collect();
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Overwrites the fields present in `patch`, keeping the rest.
    pub fn merge(&mut self, patch: SettingsPatch) {
        let SettingsPatch {
            size,
            mine_count,
            forced_mine_positions,
        } = patch;

        if let Some(size) = size {
            self.size = size;
        }
        if let Some(mine_count) = mine_count {
            self.mine_count = mine_count;
        }
        if let Some(forced_mine_positions) = forced_mine_positions {
            self.forced_mine_positions = forced_mine_positions;
        }
    }

    /// Parses settings from a URL query string such as
    /// `?size=5&mineCount=4&forcedMinePositions=3&forcedMinePositions=8`.
    ///
    /// `mines` and `mineFields` are accepted as aliases, positions may also be comma separated.
    /// Anything missing or unparseable yields `None` instead of half-filled settings, leaving
    /// the caller to apply its own defaults.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut size = None;
        let mut mine_count = None;
        let mut forced_mine_positions = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "size" => size = Some(value.trim().parse().ok()?),
                "mineCount" | "mines" => mine_count = Some(value.trim().parse().ok()?),
                "forcedMinePositions" | "mineFields" => {
                    for id in value.split(',').map(str::trim).filter(|id| !id.is_empty()) {
                        forced_mine_positions.push(id.parse().ok()?);
                    }
                }
                _ => log::debug!("Ignoring unknown settings key {:?}", key),
            }
        }

        Some(Self {
            size: size?,
            mine_count: mine_count?,
            forced_mine_positions,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

/// Partial [`Settings`]; only the fields that are `Some` get applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub size: Option<Coord>,
    pub mine_count: Option<CellCount>,
    pub forced_mine_positions: Option<Vec<CellId>>,
}

impl SettingsPatch {
    pub fn size(mut self, size: Coord) -> Self {
        self.size = Some(size);
        self
    }

    pub fn mine_count(mut self, mine_count: CellCount) -> Self {
        self.mine_count = Some(mine_count);
        self
    }

    pub fn forced_mine_positions(mut self, ids: impl IntoIterator<Item = CellId>) -> Self {
        self.forced_mine_positions = Some(ids.into_iter().collect());
        self
    }
}

impl From<Settings> for SettingsPatch {
    fn from(settings: Settings) -> Self {
        Self {
            size: Some(settings.size),
            mine_count: Some(settings.mine_count),
            forced_mine_positions: Some(settings.forced_mine_positions),
        }
    }
}
