//! Effectiveness calculation for single and dual-typed defenders

use std::collections::{BTreeMap, BTreeSet};

use crate::chart::TypeChart;
use crate::error::ResolveError;
use crate::types::{
    DamageRelationSet, EffectivenessResult, ElementalType, Multiplier, RelationKind,
};

/// Relabel one type's relation lists as multipliers.
///
/// `double_from` becomes x2, `half_from` x0.5 and `none_from` x0.
pub fn resolve_single(relations: &DamageRelationSet) -> EffectivenessResult {
    let mut classified = BTreeMap::new();
    for attacking in relations.double_from() {
        classified.insert(attacking.clone(), Multiplier::Double);
    }
    for attacking in relations.half_from() {
        classified.insert(attacking.clone(), Multiplier::Half);
    }
    for attacking in relations.none_from() {
        classified.insert(attacking.clone(), Multiplier::Immune);
    }
    EffectivenessResult::from_classified(classified)
}

/// Combine the relations of both of a creature's types.
///
/// Every attacking type mentioned by either set is placed in exactly one
/// bucket. Immunity on either side wins outright; otherwise the two factors
/// multiply, and a weakness on one side cancels a resistance on the other.
/// The result does not depend on argument order.
pub fn resolve_dual(a: &DamageRelationSet, b: &DamageRelationSet) -> EffectivenessResult {
    let candidates: BTreeSet<&ElementalType> =
        a.attacking_types().chain(b.attacking_types()).collect();

    let mut classified = BTreeMap::new();
    for attacking in candidates {
        let relations = (
            a.relation_to(attacking.as_str()),
            b.relation_to(attacking.as_str()),
        );
        if let Some(multiplier) = combine(relations) {
            classified.insert(attacking.clone(), multiplier);
        } else {
            tracing::trace!(attacking = %attacking, "Relations cancel out");
        }
    }
    EffectivenessResult::from_classified(classified)
}

fn combine(relations: (Option<RelationKind>, Option<RelationKind>)) -> Option<Multiplier> {
    use RelationKind::{DoubleFrom, HalfFrom, NoneFrom};

    match relations {
        (Some(NoneFrom), _) | (_, Some(NoneFrom)) => Some(Multiplier::Immune),
        (Some(DoubleFrom), Some(DoubleFrom)) => Some(Multiplier::Quadruple),
        (Some(HalfFrom), Some(HalfFrom)) => Some(Multiplier::Quarter),
        (Some(DoubleFrom), Some(HalfFrom)) | (Some(HalfFrom), Some(DoubleFrom)) => None,
        (Some(DoubleFrom), None) | (None, Some(DoubleFrom)) => Some(Multiplier::Double),
        (Some(HalfFrom), None) | (None, Some(HalfFrom)) => Some(Multiplier::Half),
        (None, None) => None,
    }
}

/// Resolve a creature's types against a chart.
///
/// One type, or the same type named twice, takes the single-type path; two
/// distinct types take the dual-type path.
pub fn resolve<S: AsRef<str>>(
    chart: &TypeChart,
    types: &[S],
) -> Result<EffectivenessResult, ResolveError> {
    let lookup = |name: &S| {
        let name = name.as_ref();
        chart
            .get(name)
            .ok_or_else(|| ResolveError::UnknownType(ElementalType::new(name)))
    };

    let result = match types {
        [only] => resolve_single(lookup(only)?),
        [first, second] if first.as_ref() == second.as_ref() => resolve_single(lookup(first)?),
        [first, second] => resolve_dual(lookup(first)?, lookup(second)?),
        _ => return Err(ResolveError::TypeCount(types.len())),
    };

    tracing::debug!(
        types = ?types.iter().map(|t| t.as_ref()).collect::<Vec<&str>>(),
        weaknesses = result.weaknesses().len(),
        resistances = result.resistances().len(),
        "Resolved type matchups"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EffectivenessEntry;

    const NONE: [&str; 0] = [];

    fn relations(double: &[&str], half: &[&str], none: &[&str]) -> DamageRelationSet {
        DamageRelationSet::new(double.iter().copied(), half.iter().copied(), none.iter().copied())
            .unwrap()
    }

    fn entries(list: &[EffectivenessEntry]) -> Vec<(&str, f32)> {
        list.iter()
            .map(|e| (e.attacking.as_str(), e.multiplier.as_f32()))
            .collect()
    }

    #[test]
    fn test_single_relabels_lists() {
        let normal = relations(&["fighting"], &NONE, &["ghost"]);
        let result = resolve_single(&normal);
        assert_eq!(entries(result.weaknesses()), [("fighting", 2.0)]);
        assert_eq!(entries(result.resistances()), [("ghost", 0.0)]);
    }

    #[test]
    fn test_single_sorts_by_name() {
        let water = relations(&["grass", "electric"], &["water", "steel", "fire", "ice"], &NONE);
        let result = resolve_single(&water);
        assert_eq!(entries(result.weaknesses()), [("electric", 2.0), ("grass", 2.0)]);
        assert_eq!(
            entries(result.resistances()),
            [("fire", 0.5), ("ice", 0.5), ("steel", 0.5), ("water", 0.5)]
        );
    }

    #[test]
    fn test_single_empty() {
        assert!(resolve_single(&DamageRelationSet::default()).is_empty());
    }

    #[test]
    fn test_dual_worked_example() {
        let a = relations(&["fire", "rock"], &["grass"], &NONE);
        let b = relations(&["fire"], &["rock", "water"], &NONE);

        let result = resolve_dual(&a, &b);
        assert_eq!(entries(result.weaknesses()), [("fire", 4.0)]);
        assert_eq!(entries(result.resistances()), [("grass", 0.5), ("water", 0.5)]);
        assert_eq!(resolve_dual(&b, &a), result);
    }

    #[test]
    fn test_dual_immunity_beats_weakness() {
        let a = relations(&["ghost"], &NONE, &NONE);
        let b = relations(&NONE, &NONE, &["ghost"]);

        let result = resolve_dual(&a, &b);
        assert!(result.weaknesses().is_empty());
        assert_eq!(entries(result.resistances()), [("ghost", 0.0)]);
    }

    #[test]
    fn test_dual_immunity_beats_resistance() {
        let a = relations(&NONE, &["electric"], &NONE);
        let b = relations(&["water"], &NONE, &["electric"]);

        let result = resolve_dual(&a, &b);
        assert_eq!(result.get("electric"), Some(Multiplier::Immune));
        assert_eq!(result.get("water"), Some(Multiplier::Double));
    }

    #[test]
    fn test_dual_double_resistance() {
        let a = relations(&NONE, &["fire", "bug"], &NONE);
        let b = relations(&NONE, &["fire"], &NONE);

        let result = resolve_dual(&a, &b);
        assert_eq!(entries(result.resistances()), [("bug", 0.5), ("fire", 0.25)]);
    }

    #[test]
    fn test_dual_cancellation_omits_type() {
        let a = relations(&["rock"], &NONE, &NONE);
        let b = relations(&NONE, &["rock"], &NONE);

        let result = resolve_dual(&a, &b);
        assert!(result.is_empty());
        assert_eq!(result.multiplier_for("rock"), 1.0);
    }

    #[test]
    fn test_dual_never_double_counts() {
        // Fire is a double weakness and must not also show up as x2
        let a = relations(&["fire", "water"], &NONE, &NONE);
        let b = relations(&["fire"], &NONE, &NONE);

        let result = resolve_dual(&a, &b);
        assert_eq!(entries(result.weaknesses()), [("fire", 4.0), ("water", 2.0)]);
    }

    #[test]
    fn test_dual_passes_unknown_types_through() {
        let a = relations(&["shadow"], &NONE, &NONE);
        let b = DamageRelationSet::default();

        let result = resolve_dual(&a, &b);
        assert_eq!(entries(result.weaknesses()), [("shadow", 2.0)]);
    }

    #[test]
    fn test_resolve_swampert() {
        let chart = TypeChart::builtin();
        let result = resolve(&chart, &["water", "ground"]).unwrap();

        assert_eq!(entries(result.weaknesses()), [("grass", 4.0)]);
        assert_eq!(result.get("electric"), Some(Multiplier::Immune));
        assert_eq!(result.get("fire"), Some(Multiplier::Half));
        assert_eq!(result.get("steel"), Some(Multiplier::Half));
        assert_eq!(result.get("rock"), Some(Multiplier::Half));
        assert_eq!(result.get("poison"), Some(Multiplier::Half));
        assert_eq!(result.get("water"), None);
        assert_eq!(result.get("ice"), None);
    }

    #[test]
    fn test_resolve_double_resistance_from_chart() {
        let chart = TypeChart::builtin();
        let result = resolve(&chart, &["water", "rock"]).unwrap();
        assert_eq!(result.get("fire"), Some(Multiplier::Quarter));
        assert_eq!(result.get("grass"), Some(Multiplier::Quadruple));
    }

    #[test]
    fn test_resolve_single_type_creature() {
        let chart = TypeChart::builtin();
        let result = resolve(&chart, &["ghost"]).unwrap();
        assert_eq!(result, resolve_single(chart.get("ghost").unwrap()));
    }

    #[test]
    fn test_resolve_repeated_type_uses_single_path() {
        let chart = TypeChart::builtin();
        let result = resolve(&chart, &["fire", "fire"]).unwrap();
        assert_eq!(result.get("water"), Some(Multiplier::Double));
    }

    #[test]
    fn test_resolve_type_count() {
        let chart = TypeChart::builtin();
        let empty: [&str; 0] = [];
        assert_eq!(resolve(&chart, &empty), Err(ResolveError::TypeCount(0)));
        assert_eq!(
            resolve(&chart, &["fire", "water", "grass"]),
            Err(ResolveError::TypeCount(3))
        );
    }

    #[test]
    fn test_resolve_unknown_type() {
        let chart = TypeChart::builtin();
        assert_eq!(
            resolve(&chart, &["fire", "shadow"]),
            Err(ResolveError::UnknownType("shadow".into()))
        );
    }
}
