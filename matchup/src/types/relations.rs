//! Raw damage relations for a single defending type

use std::collections::BTreeSet;
use std::fmt;

use crate::error::DataIntegrityError;
use crate::types::{ElementalType, Type};

/// Which of the three relation lists an attacking type was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RelationKind {
    DoubleFrom,
    HalfFrom,
    NoneFrom,
}

impl RelationKind {
    /// Damage factor this relation contributes on its own
    pub fn factor(&self) -> f32 {
        match self {
            RelationKind::DoubleFrom => 2.0,
            RelationKind::HalfFrom => 0.5,
            RelationKind::NoneFrom => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::DoubleFrom => "double_damage_from",
            RelationKind::HalfFrom => "half_damage_from",
            RelationKind::NoneFrom => "no_damage_from",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How overlapping relation lists are handled when a set is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum IntegrityPolicy {
    /// Refuse any attacking type listed in more than one relation list
    #[default]
    Reject,
    /// Settle overlaps: `none_from` beats everything, and a type listed as
    /// both double and half is dropped from both
    Resolve,
}

/// The three relation lists of one defending type.
///
/// The lists are pairwise disjoint; every constructor enforces this, so the
/// calculator never has to deal with contradictory input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageRelationSet {
    double_from: BTreeSet<ElementalType>,
    half_from: BTreeSet<ElementalType>,
    none_from: BTreeSet<ElementalType>,
}

impl DamageRelationSet {
    /// Build a relation set, rejecting overlapping lists
    pub fn new(
        double_from: impl IntoIterator<Item = impl Into<ElementalType>>,
        half_from: impl IntoIterator<Item = impl Into<ElementalType>>,
        none_from: impl IntoIterator<Item = impl Into<ElementalType>>,
    ) -> Result<Self, DataIntegrityError> {
        Self::with_policy(double_from, half_from, none_from, IntegrityPolicy::Reject)
    }

    /// Build a relation set, handling overlapping lists according to `policy`
    pub fn with_policy(
        double_from: impl IntoIterator<Item = impl Into<ElementalType>>,
        half_from: impl IntoIterator<Item = impl Into<ElementalType>>,
        none_from: impl IntoIterator<Item = impl Into<ElementalType>>,
        policy: IntegrityPolicy,
    ) -> Result<Self, DataIntegrityError> {
        let mut set = Self {
            double_from: double_from.into_iter().map(Into::into).collect(),
            half_from: half_from.into_iter().map(Into::into).collect(),
            none_from: none_from.into_iter().map(Into::into).collect(),
        };

        match policy {
            IntegrityPolicy::Reject => {
                if let Some(err) = set.first_overlap() {
                    return Err(err);
                }
            }
            IntegrityPolicy::Resolve => set.settle_overlaps(),
        }

        Ok(set)
    }

    /// Defensive relations of a known type, read off the static chart column
    pub(crate) fn from_chart(defender: Type) -> Self {
        let mut set = Self::default();
        for attacker in Type::all() {
            let factor = attacker.effectiveness(defender);
            let bucket = if factor == 0.0 {
                &mut set.none_from
            } else if factor < 1.0 {
                &mut set.half_from
            } else if factor > 1.0 {
                &mut set.double_from
            } else {
                continue;
            };
            bucket.insert(ElementalType::from(*attacker));
        }
        set
    }

    pub fn double_from(&self) -> &BTreeSet<ElementalType> {
        &self.double_from
    }

    pub fn half_from(&self) -> &BTreeSet<ElementalType> {
        &self.half_from
    }

    pub fn none_from(&self) -> &BTreeSet<ElementalType> {
        &self.none_from
    }

    /// Relation this type has towards an attacking type, `None` when neutral
    pub fn relation_to(&self, attacking: &str) -> Option<RelationKind> {
        if self.none_from.contains(attacking) {
            Some(RelationKind::NoneFrom)
        } else if self.double_from.contains(attacking) {
            Some(RelationKind::DoubleFrom)
        } else if self.half_from.contains(attacking) {
            Some(RelationKind::HalfFrom)
        } else {
            None
        }
    }

    /// Every attacking type with a non-neutral relation
    pub fn attacking_types(&self) -> impl Iterator<Item = &ElementalType> {
        self.double_from
            .iter()
            .chain(&self.half_from)
            .chain(&self.none_from)
    }

    pub fn is_empty(&self) -> bool {
        self.double_from.is_empty() && self.half_from.is_empty() && self.none_from.is_empty()
    }

    fn first_overlap(&self) -> Option<DataIntegrityError> {
        let pairs = [
            (&self.double_from, RelationKind::DoubleFrom, &self.half_from, RelationKind::HalfFrom),
            (&self.double_from, RelationKind::DoubleFrom, &self.none_from, RelationKind::NoneFrom),
            (&self.half_from, RelationKind::HalfFrom, &self.none_from, RelationKind::NoneFrom),
        ];

        pairs.into_iter().find_map(|(left, first, right, second)| {
            left.intersection(right)
                .next()
                .map(|attacking| DataIntegrityError::Overlap {
                    attacking: attacking.clone(),
                    first,
                    second,
                })
        })
    }

    fn settle_overlaps(&mut self) {
        for attacking in &self.none_from {
            let in_double = self.double_from.remove(attacking);
            let in_half = self.half_from.remove(attacking);
            if in_double || in_half {
                tracing::warn!(attacking = %attacking, "Immunity overrides conflicting relation");
            }
        }

        let cancelled: Vec<ElementalType> = self
            .double_from
            .intersection(&self.half_from)
            .cloned()
            .collect();
        for attacking in cancelled {
            tracing::warn!(attacking = %attacking, "Dropping type listed as both double and half");
            self.double_from.remove(&attacking);
            self.half_from.remove(&attacking);
        }
    }
}
