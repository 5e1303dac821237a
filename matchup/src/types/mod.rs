//! Domain types for type matchups

mod effectiveness;
mod elemental_type;
mod relations;

pub use effectiveness::{EffectivenessEntry, EffectivenessResult, Multiplier};
pub use elemental_type::{ElementalType, TYPE_CHART, Type};
pub use relations::{DamageRelationSet, IntegrityPolicy, RelationKind};
