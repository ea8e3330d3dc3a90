//! Fleet composition: how many vessels of each kind go on a board.

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use core::str::FromStr;

use crate::common::GameError;
use crate::vessel::VesselKind;

/// Validated mapping of vessel kind to count.
///
/// Iteration follows [`VesselKind`] order, which is also the order vessels are
/// placed in: submarines first, the general last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetCatalog {
    counts: BTreeMap<VesselKind, usize>,
}

impl FleetCatalog {
    /// Build a catalog from (kind, count) pairs. Repeated kinds are summed.
    pub fn new<I>(entries: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (VesselKind, usize)>,
    {
        let mut counts: BTreeMap<VesselKind, usize> = BTreeMap::new();
        for (kind, count) in entries {
            let total = counts.entry(kind).or_insert(0);
            *total = total
                .checked_add(count)
                .ok_or(GameError::FleetTooLarge(kind))?;
        }
        let generals = counts.get(&VesselKind::General).copied().unwrap_or(0);
        if generals != 1 {
            return Err(GameError::FlagshipCount(generals));
        }
        Ok(FleetCatalog { counts })
    }

    /// Build a catalog from vessel identifiers such as `"submarine"`.
    pub fn from_names<'a, I>(entries: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (&'a str, usize)>,
    {
        let mut kinds = alloc::vec::Vec::new();
        for (name, count) in entries {
            kinds.push((name.parse::<VesselKind>()?, count));
        }
        Self::new(kinds)
    }

    /// Load a catalog from a JSON object such as `{"submarine": 2, "general": 1}`.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let raw: BTreeMap<std::string::String, usize> = serde_json::from_str(json)
            .map_err(|e| GameError::InvalidFleetSpec(e.to_string()))?;
        Self::from_names(raw.iter().map(|(name, count)| (name.as_str(), *count)))
    }

    /// Required count of `kind`, zero when absent.
    pub fn count(&self, kind: VesselKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VesselKind, usize)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }

    /// Number of vessels in the fleet.
    pub fn vessel_count(&self) -> usize {
        self.counts.values().fold(0, |acc, c| acc.saturating_add(*c))
    }

    /// Number of cells the whole fleet occupies once placed.
    pub fn total_cells(&self) -> usize {
        self.iter().fold(0, |acc, (kind, count)| {
            acc.saturating_add(kind.shape().cell_count().saturating_mul(count))
        })
    }
}

impl Default for FleetCatalog {
    fn default() -> Self {
        FleetCatalog {
            counts: VesselKind::ALL.iter().map(|k| (*k, 1)).collect(),
        }
    }
}

/// Parses lists like `submarine=2,destroyer=1,jet=1,general=1`.
impl FromStr for FleetCatalog {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = alloc::vec::Vec::new();
        for item in s.split(',').map(str::trim).filter(|i| !i.is_empty()) {
            let (name, count) = item
                .split_once('=')
                .ok_or_else(|| GameError::InvalidFleetSpec(item.to_string()))?;
            let count = count
                .trim()
                .parse::<usize>()
                .map_err(|_| GameError::InvalidFleetSpec(item.to_string()))?;
            entries.push((name, count));
        }
        Self::from_names(entries)
    }
}
