use proptest::prelude::*;
use typedex_matchup::{
    DamageRelationSet, EffectivenessResult, Multiplier, RelationKind, Type, TypeChart, resolve,
    resolve_dual, resolve_single,
};

const POOL: [&str; 20] = [
    "bug", "dark", "dragon", "electric", "fairy", "fighting", "fire", "flying", "ghost", "grass",
    "ground", "ice", "normal", "poison", "psychic", "rock", "shadow", "steel", "stellar", "water",
];

/// Assign each pool name at most one relation, so the lists stay disjoint
fn relation_set() -> impl Strategy<Value = DamageRelationSet> {
    proptest::collection::vec(0u8..4, POOL.len()).prop_map(|picks| {
        let mut double = Vec::new();
        let mut half = Vec::new();
        let mut none = Vec::new();
        for (name, pick) in POOL.iter().zip(picks) {
            match pick {
                1 => double.push(*name),
                2 => half.push(*name),
                3 => none.push(*name),
                _ => {}
            }
        }
        DamageRelationSet::new(double, half, none).unwrap()
    })
}

fn factor(relations: &DamageRelationSet, attacking: &str) -> f32 {
    relations
        .relation_to(attacking)
        .map_or(1.0, |kind| kind.factor())
}

fn assert_well_formed(result: &EffectivenessResult) {
    for list in [result.weaknesses(), result.resistances()] {
        for pair in list.windows(2) {
            assert!(pair[0].attacking < pair[1].attacking, "unsorted or duplicated: {:?}", pair);
        }
    }
    for entry in result.weaknesses() {
        assert!(entry.multiplier.as_f32() > 1.0);
        assert!(result.resistances().iter().all(|r| r.attacking != entry.attacking));
    }
    for entry in result.resistances() {
        assert!(entry.multiplier.as_f32() < 1.0);
    }
}

proptest! {
    #[test]
    fn single_relabels_every_list(set in relation_set()) {
        let result = resolve_single(&set);
        assert_well_formed(&result);

        let expected = set.double_from().len() + set.half_from().len() + set.none_from().len();
        prop_assert_eq!(result.weaknesses().len() + result.resistances().len(), expected);

        for name in set.double_from() {
            prop_assert_eq!(result.get(name.as_str()), Some(Multiplier::Double));
        }
        for name in set.half_from() {
            prop_assert_eq!(result.get(name.as_str()), Some(Multiplier::Half));
        }
        for name in set.none_from() {
            prop_assert_eq!(result.get(name.as_str()), Some(Multiplier::Immune));
        }
    }

    #[test]
    fn dual_is_symmetric(a in relation_set(), b in relation_set()) {
        prop_assert_eq!(resolve_dual(&a, &b), resolve_dual(&b, &a));
    }

    #[test]
    fn dual_matches_product_of_factors(a in relation_set(), b in relation_set()) {
        let result = resolve_dual(&a, &b);
        assert_well_formed(&result);

        for name in POOL {
            let product = factor(&a, name) * factor(&b, name);
            prop_assert_eq!(result.multiplier_for(name), product, "attacking type {}", name);
        }
    }

    #[test]
    fn dual_override_rules(a in relation_set(), b in relation_set()) {
        let result = resolve_dual(&a, &b);

        for name in POOL {
            let relations = (a.relation_to(name), b.relation_to(name));
            let immune = relations.0 == Some(RelationKind::NoneFrom)
                || relations.1 == Some(RelationKind::NoneFrom);
            let entry = result.get(name);

            if immune {
                prop_assert_eq!(entry, Some(Multiplier::Immune));
                prop_assert!(result.weaknesses().iter().all(|e| e.attacking.as_str() != name));
                continue;
            }
            match relations {
                (Some(RelationKind::DoubleFrom), Some(RelationKind::DoubleFrom)) => {
                    prop_assert_eq!(entry, Some(Multiplier::Quadruple));
                }
                (Some(RelationKind::HalfFrom), Some(RelationKind::HalfFrom)) => {
                    prop_assert_eq!(entry, Some(Multiplier::Quarter));
                }
                (Some(RelationKind::DoubleFrom), Some(RelationKind::HalfFrom))
                | (Some(RelationKind::HalfFrom), Some(RelationKind::DoubleFrom))
                | (None, None) => {
                    prop_assert_eq!(entry, None);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn dual_with_empty_set_matches_single(a in relation_set()) {
        prop_assert_eq!(resolve_dual(&a, &DamageRelationSet::default()), resolve_single(&a));
    }
}

#[test]
fn builtin_pairs_match_static_table() {
    let chart = TypeChart::builtin();

    for first in Type::all() {
        for second in Type::all() {
            if first == second {
                continue;
            }
            let result = resolve(&chart, &[first.as_str(), second.as_str()]).unwrap();
            assert_well_formed(&result);

            for attacking in Type::all() {
                let expected = attacking.effectiveness_multi(&[*first, *second]);
                assert_eq!(
                    result.multiplier_for(attacking.as_str()),
                    expected,
                    "{} attacking {}/{}",
                    attacking,
                    first,
                    second
                );
            }
        }
    }
}

#[test]
fn builtin_single_matches_static_table() {
    let chart = TypeChart::builtin();

    for defending in Type::all() {
        let result = resolve(&chart, &[defending.as_str()]).unwrap();
        for attacking in Type::all() {
            assert_eq!(
                result.multiplier_for(attacking.as_str()),
                attacking.effectiveness(*defending)
            );
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_as_json() {
    let chart = TypeChart::builtin();
    let result = resolve(&chart, &["normal"]).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["weaknesses"][0]["attacking"], "fighting");
    assert_eq!(json["weaknesses"][0]["multiplier"], "double");
    assert_eq!(json["resistances"][0]["attacking"], "ghost");
    assert_eq!(json["resistances"][0]["multiplier"], "immune");

    let back: EffectivenessResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[cfg(feature = "serde")]
#[test]
fn result_json_must_keep_list_rules() {
    let misplaced = r#"{
        "weaknesses": [
            { "attacking": "fire", "multiplier": "double" },
            { "attacking": "water", "multiplier": "half" }
        ],
        "resistances": []
    }"#;
    let err = serde_json::from_str::<EffectivenessResult>(misplaced).unwrap_err();
    assert!(err.to_string().contains("does not belong in weaknesses"));

    let duplicated = r#"{
        "weaknesses": [
            { "attacking": "fire", "multiplier": "double" },
            { "attacking": "fire", "multiplier": "quadruple" }
        ],
        "resistances": []
    }"#;
    let err = serde_json::from_str::<EffectivenessResult>(duplicated).unwrap_err();
    assert!(err.to_string().contains("fire is listed more than once"));

    let in_both = r#"{
        "weaknesses": [{ "attacking": "fire", "multiplier": "double" }],
        "resistances": [{ "attacking": "fire", "multiplier": "half" }]
    }"#;
    assert!(serde_json::from_str::<EffectivenessResult>(in_both).is_err());

    let unsorted = r#"{
        "weaknesses": [],
        "resistances": [
            { "attacking": "water", "multiplier": "half" },
            { "attacking": "fire", "multiplier": "half" }
        ]
    }"#;
    let err = serde_json::from_str::<EffectivenessResult>(unsorted).unwrap_err();
    assert!(err.to_string().contains("not sorted"));
}
