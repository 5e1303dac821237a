//! Immutable lookup of damage relations keyed by defending type name

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::{ChartError, DataIntegrityError};
use crate::types::{DamageRelationSet, ElementalType, IntegrityPolicy, Type};

/// Damage relations for every defending type a data source knows about.
///
/// A chart is populated once, either from external data through
/// [`TypeChart::builder`] or from the static table via
/// [`TypeChart::builtin`], and is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeChart {
    relations: BTreeMap<ElementalType, DamageRelationSet>,
}

impl TypeChart {
    pub fn builder() -> TypeChartBuilder {
        TypeChartBuilder::default()
    }

    /// Chart for the 19 known types, derived from [`TYPE_CHART`](crate::TYPE_CHART)
    pub fn builtin() -> Self {
        let relations = Type::all()
            .iter()
            .map(|t| (ElementalType::from(*t), DamageRelationSet::from_chart(*t)))
            .collect();
        Self { relations }
    }

    pub fn get(&self, defending: &str) -> Option<&DamageRelationSet> {
        self.relations.get(defending)
    }

    pub fn contains(&self, defending: &str) -> bool {
        self.relations.contains_key(defending)
    }

    /// Defending types in name order
    pub fn types(&self) -> impl Iterator<Item = &ElementalType> {
        self.relations.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementalType, &DamageRelationSet)> {
        self.relations.iter()
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

/// Collects relation sets for a [`TypeChart`], refusing duplicates
#[derive(Debug, Default)]
pub struct TypeChartBuilder {
    relations: BTreeMap<ElementalType, DamageRelationSet>,
}

impl TypeChartBuilder {
    pub fn insert(
        &mut self,
        defending: impl Into<ElementalType>,
        relations: DamageRelationSet,
    ) -> Result<&mut Self, ChartError> {
        match self.relations.entry(defending.into()) {
            Entry::Occupied(e) => Err(ChartError::DuplicateType(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(relations);
                Ok(self)
            }
        }
    }

    /// Build the relation set from raw lists and insert it
    pub fn insert_lists<D, H, N>(
        &mut self,
        defending: impl Into<ElementalType>,
        double_from: D,
        half_from: H,
        none_from: N,
        policy: IntegrityPolicy,
    ) -> Result<&mut Self, ChartError>
    where
        D: IntoIterator,
        D::Item: Into<ElementalType>,
        H: IntoIterator,
        H::Item: Into<ElementalType>,
        N: IntoIterator,
        N::Item: Into<ElementalType>,
    {
        let defending = defending.into();
        let relations = DamageRelationSet::with_policy(double_from, half_from, none_from, policy)
            .map_err(|source: DataIntegrityError| ChartError::Integrity {
                defending: defending.clone(),
                source,
            })?;
        self.insert(defending, relations)
    }

    pub fn build(self) -> TypeChart {
        tracing::debug!(count = self.relations.len(), "Type chart built");
        TypeChart {
            relations: self.relations,
        }
    }
}
