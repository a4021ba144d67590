//! Property tests over randomly shaped inheritance lattices.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use typegraph_codegen::{generate, GeneratorOptions, TypeAlgebra};
use typegraph_model::builtins::register_standard;
use typegraph_model::{EntityId, Fact, Identifier, Property, Registry, RegistryBuilder};

/// One generated class: parents among earlier classes (or `Text`), flags, props.
#[derive(Debug, Clone)]
struct ClassPlan {
    parents: Vec<usize>,
    text_parent: bool,
    allow_string: bool,
    superseded_by: Vec<usize>,
    props: usize,
}

fn arb_plans() -> impl Strategy<Value = Vec<ClassPlan>> {
    prop::collection::vec(
        (
            prop::collection::vec(any::<prop::sample::Index>(), 0..3),
            prop::bool::weighted(0.15),
            prop::bool::weighted(0.2),
            prop::collection::vec(any::<prop::sample::Index>(), 0..2),
            0usize..3,
        ),
        1..10,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (parents, text_parent, allow_string, superseded, props))| {
                let pick = |idx: Vec<prop::sample::Index>| -> Vec<usize> {
                    if i == 0 {
                        return Vec::new();
                    }
                    let mut v: Vec<usize> = idx.iter().map(|x| x.index(i)).collect();
                    v.sort_unstable();
                    v.dedup();
                    v
                };
                ClassPlan {
                    parents: pick(parents),
                    text_parent,
                    allow_string,
                    superseded_by: pick(superseded),
                    props,
                }
            })
            .collect()
    })
}

fn name(i: usize) -> Identifier {
    Identifier::from_url(format!("https://example.com/C{i}"))
}

fn build(plans: &[ClassPlan]) -> (Registry, Vec<EntityId>) {
    let mut b = RegistryBuilder::new();
    register_standard(&mut b).unwrap();
    let mut ids = Vec::new();
    for (i, plan) in plans.iter().enumerate() {
        let id = b.register_class(name(i), plan.allow_string).unwrap();
        for &p in &plan.parents {
            b.add(id, &Fact::subclass_of(name(p))).unwrap();
        }
        if plan.text_parent {
            b.add(
                id,
                &Fact::subclass_of(Identifier::from_url("https://schema.org/Text")),
            )
            .unwrap();
        }
        for &s in &plan.superseded_by {
            b.add(id, &Fact::superseded_by(name(s))).unwrap();
        }
        for k in 0..plan.props {
            b.add_prop(
                id,
                Property::new(
                    Identifier::from_url(format!("https://example.com/p{i}_{k}")),
                    vec![Identifier::from_url("https://schema.org/Text")],
                ),
            );
        }
        ids.push(id);
    }
    (b.freeze(), ids)
}

fn ancestors_allow_string(plans: &[ClassPlan], i: usize) -> bool {
    plans[i].allow_string || plans[i].parents.iter().any(|&p| ancestors_allow_string(plans, p))
}

fn ancestors_have_text(plans: &[ClassPlan], i: usize) -> bool {
    plans[i].text_parent || plans[i].parents.iter().any(|&p| ancestors_have_text(plans, p))
}

proptest! {
    #[test]
    fn deprecated_iff_superseded(plans in arb_plans()) {
        let (registry, ids) = build(&plans);
        for (i, id) in ids.iter().enumerate() {
            let class = &registry.get(*id).class;
            prop_assert_eq!(class.deprecated(), !plans[i].superseded_by.is_empty());
        }
    }

    #[test]
    fn primitive_backed_leaves_are_untagged(plans in arb_plans()) {
        let (registry, ids) = build(&plans);
        let opts = GeneratorOptions::default();
        let alg = TypeAlgebra::new(&registry, &opts);
        for (i, &id) in ids.iter().enumerate() {
            prop_assert_eq!(alg.inherits_data_type(id), ancestors_have_text(&plans, i));
            if alg.inherits_data_type(id) {
                prop_assert!(!alg.leaf_type(id).has_field("@type"));
                prop_assert_eq!(alg.leaf_type(id).to_string(), alg.base_name(id));
            } else {
                prop_assert!(alg.leaf_type(id).has_field("@type"));
            }
        }
    }

    #[test]
    fn only_roots_carry_the_id_field(plans in arb_plans()) {
        let (registry, ids) = build(&plans);
        let opts = GeneratorOptions::default();
        let alg = TypeAlgebra::new(&registry, &opts);
        for &id in &ids {
            let is_root = registry.get(id).class.is_root();
            prop_assert_eq!(alg.base_type(id).has_field("@id"), is_root);
        }
    }

    #[test]
    fn allow_string_is_inherited_or(plans in arb_plans()) {
        let (registry, ids) = build(&plans);
        let opts = GeneratorOptions::default();
        let alg = TypeAlgebra::new(&registry, &opts);
        for (i, &id) in ids.iter().enumerate() {
            prop_assert_eq!(alg.allow_string(id), ancestors_allow_string(&plans, i));
        }
    }

    #[test]
    fn children_mirror_parents(plans in arb_plans()) {
        let (registry, _) = build(&plans);
        for (id, entity) in registry.iter() {
            for &child in &entity.class.children {
                prop_assert!(registry.get(child).class.parents.contains(&id));
            }
            for &parent in &entity.class.parents {
                prop_assert!(registry.get(parent).class.children.contains(&id));
            }
        }
    }

    #[test]
    fn generation_is_deterministic(plans in arb_plans()) {
        let (registry, _) = build(&plans);
        let opts = GeneratorOptions::default();
        let first = generate(&registry, &opts);
        let second = generate(&registry, &opts);
        prop_assert_eq!(first.declarations, second.declarations);
    }
}
