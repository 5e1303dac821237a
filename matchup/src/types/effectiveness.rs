//! Calculator output: multipliers and the weakness/resistance lists

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::ResultError;
use crate::types::ElementalType;

/// A non-neutral damage multiplier.
///
/// Neutral (x1) damage has no variant; neutral attacking types are simply
/// absent from an [`EffectivenessResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Multiplier {
    Immune,
    Quarter,
    Half,
    Double,
    Quadruple,
}

impl Multiplier {
    pub const ALL: [Multiplier; 5] = [
        Multiplier::Immune,
        Multiplier::Quarter,
        Multiplier::Half,
        Multiplier::Double,
        Multiplier::Quadruple,
    ];

    pub fn as_f32(&self) -> f32 {
        match self {
            Multiplier::Immune => 0.0,
            Multiplier::Quarter => 0.25,
            Multiplier::Half => 0.5,
            Multiplier::Double => 2.0,
            Multiplier::Quadruple => 4.0,
        }
    }

    pub fn is_weakness(&self) -> bool {
        matches!(self, Multiplier::Double | Multiplier::Quadruple)
    }

    pub fn is_resistance(&self) -> bool {
        !self.is_weakness()
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Multiplier::Immune => "0",
            Multiplier::Quarter => "0.25",
            Multiplier::Half => "0.5",
            Multiplier::Double => "2",
            Multiplier::Quadruple => "4",
        };
        f.write_str(s)
    }
}

/// One attacking type and the multiplier it deals
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessEntry {
    pub attacking: ElementalType,
    pub multiplier: Multiplier,
}

impl EffectivenessEntry {
    pub fn new(attacking: impl Into<ElementalType>, multiplier: Multiplier) -> Self {
        Self {
            attacking: attacking.into(),
            multiplier,
        }
    }
}

/// Weaknesses (multiplier > 1) and resistances (multiplier < 1, immunities
/// included), each sorted by attacking type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectivenessResult {
    weaknesses: Vec<EffectivenessEntry>,
    resistances: Vec<EffectivenessEntry>,
}

impl EffectivenessResult {
    /// Split a per-type classification into the two ordered lists
    pub(crate) fn from_classified(classified: BTreeMap<ElementalType, Multiplier>) -> Self {
        let mut result = Self::default();
        for (attacking, multiplier) in classified {
            let entry = EffectivenessEntry {
                attacking,
                multiplier,
            };
            if multiplier.is_weakness() {
                result.weaknesses.push(entry);
            } else {
                result.resistances.push(entry);
            }
        }
        result
    }

    /// Rebuild a result from lists produced elsewhere.
    ///
    /// Each list must be sorted by attacking type, an attacking type may
    /// appear only once across both lists, and every entry must sit in the
    /// list its multiplier belongs to.
    pub fn from_lists(
        weaknesses: Vec<EffectivenessEntry>,
        resistances: Vec<EffectivenessEntry>,
    ) -> Result<Self, ResultError> {
        let mut seen = BTreeSet::new();
        for (list, entries) in [("weaknesses", &weaknesses), ("resistances", &resistances)] {
            for pair in entries.windows(2) {
                if pair[0].attacking == pair[1].attacking {
                    return Err(ResultError::Duplicate(pair[1].attacking.clone()));
                }
                if pair[0].attacking > pair[1].attacking {
                    return Err(ResultError::Unsorted { list });
                }
            }
            for entry in entries {
                let misplaced = match list {
                    "weaknesses" => !entry.multiplier.is_weakness(),
                    _ => !entry.multiplier.is_resistance(),
                };
                if misplaced {
                    return Err(ResultError::Misplaced {
                        attacking: entry.attacking.clone(),
                        multiplier: entry.multiplier,
                        list,
                    });
                }
                if !seen.insert(&entry.attacking) {
                    return Err(ResultError::Duplicate(entry.attacking.clone()));
                }
            }
        }

        Ok(Self {
            weaknesses,
            resistances,
        })
    }

    pub fn weaknesses(&self) -> &[EffectivenessEntry] {
        &self.weaknesses
    }

    pub fn resistances(&self) -> &[EffectivenessEntry] {
        &self.resistances
    }

    /// Attacking types that deal no damage at all
    pub fn immunities(&self) -> impl Iterator<Item = &ElementalType> {
        self.resistances
            .iter()
            .filter(|e| e.multiplier == Multiplier::Immune)
            .map(|e| &e.attacking)
    }

    /// Multiplier for an attacking type, `None` when it deals neutral damage
    pub fn get(&self, attacking: &str) -> Option<Multiplier> {
        self.weaknesses
            .iter()
            .chain(&self.resistances)
            .find(|e| e.attacking.as_str() == attacking)
            .map(|e| e.multiplier)
    }

    /// Numeric multiplier for an attacking type (1.0 when neutral)
    pub fn multiplier_for(&self, attacking: &str) -> f32 {
        self.get(attacking).map_or(1.0, |m| m.as_f32())
    }

    pub fn is_empty(&self) -> bool {
        self.weaknesses.is_empty() && self.resistances.is_empty()
    }

    pub fn into_parts(self) -> (Vec<EffectivenessEntry>, Vec<EffectivenessEntry>) {
        (self.weaknesses, self.resistances)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EffectivenessResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Lists {
            weaknesses: Vec<EffectivenessEntry>,
            resistances: Vec<EffectivenessEntry>,
        }

        let lists = Lists::deserialize(deserializer)?;
        Self::from_lists(lists.weaknesses, lists.resistances).map_err(serde::de::Error::custom)
    }
}
