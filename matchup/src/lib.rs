//! Elemental type effectiveness for single and dual-typed Pokemon.
//!
//! Given the raw damage relations of a defending type (which attacking types
//! deal double, half or no damage to it), this crate works out the combined
//! multiplier every attacking type deals to a creature with one or two
//! types, including the stacking rules:
//!
//! - a weakness shared by both types becomes x4
//! - a resistance shared by both types becomes x0.25
//! - a weakness on one type and a resistance on the other cancel out
//! - an immunity on either type wins over everything
//!
//! # Overview
//!
//! ```text
//! relation data (PokeAPI documents, builtin table)
//!        │
//!        ▼
//! DamageRelationSet / TypeChart
//!        │
//!        ▼
//! query::{resolve_single, resolve_dual, resolve} ──> EffectivenessResult
//! ```
//!
//! # Main Types
//!
//! - [`ElementalType`] - type identifier, compared by name
//! - [`Type`] - the 19 known types and the static effectiveness table
//! - [`DamageRelationSet`] - the three relation lists of one defending type
//! - [`TypeChart`] - relation sets keyed by defending type
//! - [`EffectivenessResult`] - sorted weaknesses and resistances
//!
//! # Example Usage
//!
//! ```
//! use typedex_matchup::{resolve, Multiplier, TypeChart};
//!
//! let chart = TypeChart::builtin();
//! let swampert = resolve(&chart, &["water", "ground"]).unwrap();
//!
//! assert_eq!(swampert.get("grass"), Some(Multiplier::Quadruple));
//! assert_eq!(swampert.get("electric"), Some(Multiplier::Immune));
//! assert_eq!(swampert.get("water"), None);
//! ```

pub mod chart;
pub mod error;
pub mod query;
pub mod types;

pub use chart::{TypeChart, TypeChartBuilder};
pub use error::{ChartError, DataIntegrityError, ResolveError, ResultError};
pub use query::{resolve, resolve_dual, resolve_single};
pub use types::{
    DamageRelationSet, EffectivenessEntry, EffectivenessResult, ElementalType, IntegrityPolicy,
    Multiplier, RelationKind, TYPE_CHART, Type,
};
