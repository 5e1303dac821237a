//! Error types for relation data, charts and creature resolution.

use thiserror::Error;

use crate::types::{ElementalType, Multiplier, RelationKind};

/// Relation data that contradicts itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// An attacking type is listed in two relation lists of the same
    /// defending type.
    #[error("{attacking} is listed in both {first} and {second}")]
    Overlap {
        attacking: ElementalType,
        first: RelationKind,
        second: RelationKind,
    },
}

/// Errors raised while assembling a [`TypeChart`](crate::TypeChart).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Relations for {0} were supplied more than once")]
    DuplicateType(ElementalType),

    #[error("Invalid relations for {defending}")]
    Integrity {
        defending: ElementalType,
        #[source]
        source: DataIntegrityError,
    },
}

/// Errors raised when resolving a creature's types against a chart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("A creature has one or two types, got {0}")]
    TypeCount(usize),

    #[error("No damage relations known for type: {0}")]
    UnknownType(ElementalType),
}

/// Weakness and resistance lists that break the ordering rules of an
/// [`EffectivenessResult`](crate::EffectivenessResult).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResultError {
    #[error("{attacking} with multiplier {multiplier} does not belong in {list}")]
    Misplaced {
        attacking: ElementalType,
        multiplier: Multiplier,
        list: &'static str,
    },

    #[error("{0} is listed more than once")]
    Duplicate(ElementalType),

    #[error("{list} are not sorted by attacking type")]
    Unsorted { list: &'static str },
}
