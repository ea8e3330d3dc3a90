//! Vessel types and their placed, damageable instances.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use rand::Rng;

use crate::common::{GameError, Signal};
use crate::level::Level;
use crate::shape::Shape;

/// How a vessel reacts to being hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamagePolicy {
    /// Destroyed by the first hit.
    Sink,
    /// Destroyed once every cell of its mask has been hit.
    Cumulative,
    /// Destroyed by the first hit, and ends the game.
    Decisive,
}

/// Type of vessel: canonical mask, level and damage policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum VesselKind {
    Submarine,
    Destroyer,
    Jet,
    /// The flagship. There is exactly one per fleet.
    General,
}

impl VesselKind {
    /// All kinds in placement order.
    pub const ALL: [VesselKind; 4] = [
        VesselKind::Submarine,
        VesselKind::Destroyer,
        VesselKind::Jet,
        VesselKind::General,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VesselKind::Submarine => "submarine",
            VesselKind::Destroyer => "destroyer",
            VesselKind::Jet => "jet",
            VesselKind::General => "general",
        }
    }

    /// Level the kind always sails on, `None` when it is drawn at random.
    pub fn fixed_level(self) -> Option<Level> {
        match self {
            VesselKind::Submarine => Some(Level::Deep),
            VesselKind::Destroyer => Some(Level::SeaLevel),
            VesselKind::Jet => Some(Level::Air),
            VesselKind::General => None,
        }
    }

    pub fn damage_policy(self) -> DamagePolicy {
        match self {
            VesselKind::Destroyer => DamagePolicy::Cumulative,
            VesselKind::General => DamagePolicy::Decisive,
            VesselKind::Submarine | VesselKind::Jet => DamagePolicy::Sink,
        }
    }

    /// Unrotated occupancy mask.
    pub fn shape(self) -> Shape {
        match self {
            VesselKind::Submarine => Shape::from_rows(&[&[1, 1, 1]]),
            VesselKind::Destroyer => Shape::from_rows(&[&[1, 1, 1, 1]]),
            VesselKind::Jet => Shape::from_rows(&[
                &[0, 1, 0],
                &[1, 1, 1],
                &[0, 1, 0],
                &[0, 1, 0],
            ]),
            VesselKind::General => Shape::from_rows(&[&[1]]),
        }
    }

    pub fn is_flagship(self) -> bool {
        self == VesselKind::General
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VesselKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        VesselKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
            .or_else(|| name.eq_ignore_ascii_case("flagship").then_some(VesselKind::General))
            .ok_or_else(|| GameError::InvalidVesselType(name.to_string()))
    }
}

/// A vessel instance with its current orientation and damage.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    kind: VesselKind,
    ordinal: Option<usize>,
    level: Level,
    shape: Shape,
    hits: usize,
    destroyed: bool,
}

impl Vessel {
    /// Create the `ordinal`-th vessel (1-based) of `kind`.
    ///
    /// The flagship ignores the ordinal and draws its level at random. Every
    /// other kind is given a quarter turn with probability one half.
    pub fn new<R: Rng>(kind: VesselKind, ordinal: usize, rng: &mut R) -> Self {
        let level = kind.fixed_level().unwrap_or_else(|| Level::random(rng));
        let mut vessel = Self::with_level(kind, ordinal, level);
        if !kind.is_flagship() && rng.random_bool(0.5) {
            vessel.rotate();
        }
        vessel
    }

    /// Create an unrotated vessel on an explicit level.
    pub fn with_level(kind: VesselKind, ordinal: usize, level: Level) -> Self {
        Vessel {
            kind,
            ordinal: (!kind.is_flagship()).then_some(ordinal),
            level,
            shape: kind.shape(),
            hits: 0,
            destroyed: false,
        }
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn ordinal(&self) -> Option<usize> {
        self.ordinal
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Current (possibly rotated) mask.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Turn the mask a quarter clockwise.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }

    /// Apply one hit according to the kind's damage policy.
    pub fn under_fire(&mut self) -> Signal {
        self.hits += 1;
        match self.kind.damage_policy() {
            DamagePolicy::Sink => {
                self.destroyed = true;
                Signal::Kill
            }
            DamagePolicy::Cumulative => {
                self.destroyed = self.hits >= self.shape.cell_count();
                if self.destroyed {
                    Signal::Kill
                } else {
                    Signal::Hit
                }
            }
            DamagePolicy::Decisive => {
                self.destroyed = true;
                Signal::End
            }
        }
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordinal {
            Some(n) => write!(f, "{}{}", self.kind, n),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ name: \"{}\", level: {:?}, hits: {}, destroyed: {}, shape: {:?} }}",
            self, self.level, self.hits, self.destroyed, self.shape,
        )
    }
}
