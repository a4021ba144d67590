//! Entity variants: the general `Class` and its three builtin flavors.
//!
//! Every entity carries the shared [`Class`] fields. [`EntityKind`] says which
//! flavor it is and holds the per-flavor data the emitter needs.

use crate::identifier::Identifier;
use crate::property::{EnumValue, Property};

/// Index of an entity inside the registry that created it.
///
/// Edges between entities (`parents`, `children`, `superseded_by`, union
/// members) are stored as ids, so none of them owns its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) usize);

impl EntityId {
    /// Position of the entity in registration order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fields shared by every entity.
#[derive(Debug, Clone)]
pub struct Class {
    /// The entity's identifier. Fixed at construction.
    pub subject: Identifier,
    /// Documentation string.
    pub comment: Option<String>,
    /// Instances may also be written as a bare string.
    pub allow_string_type: bool,
    /// Direct parents, in the order their facts arrived.
    pub parents: Vec<EntityId>,
    /// Direct children; the inverse of `parents`, maintained by the registry.
    pub children: Vec<EntityId>,
    /// Replacements for this entity. Non-empty means deprecated.
    pub superseded_by: Vec<EntityId>,
    pub(crate) properties: Vec<Property>,
    pub(crate) enum_values: Vec<EnumValue>,
}

impl Class {
    pub(crate) fn new(subject: Identifier, allow_string_type: bool) -> Self {
        Self {
            subject,
            comment: None,
            allow_string_type,
            parents: Vec::new(),
            children: Vec::new(),
            superseded_by: Vec::new(),
            properties: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    /// Whether any replacement has been recorded for this entity.
    #[must_use]
    pub fn deprecated(&self) -> bool {
        !self.superseded_by.is_empty()
    }

    /// Whether the entity has no parents.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Enum values in insertion order.
    pub fn enum_values(&self) -> &[EnumValue] {
        &self.enum_values
    }

    /// Properties sorted by `(name, href)`.
    ///
    /// The sort is stable, so calling this repeatedly yields the same order.
    pub fn sorted_properties(&self) -> Vec<&Property> {
        let mut props: Vec<&Property> = self.properties.iter().collect();
        props.sort_by(|a, b| a.key().cmp(b.key()));
        props
    }

    /// Enum values sorted by `(name, href)`.
    pub fn sorted_enum_values(&self) -> Vec<&EnumValue> {
        let mut values: Vec<&EnumValue> = self.enum_values.iter().collect();
        values.sort_by(|a, b| a.key().cmp(b.key()));
        values
    }
}

/// A primitive-equivalent leaf (e.g. `Text` ↦ `string`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builtin {
    /// Target-language type the entity aliases.
    pub equivalent_type_name: String,
    /// Documentation string.
    pub doc: String,
}

/// A two-valued builtin whose members are literal resource locators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanEnum {
    /// Href emitted for the `True` member.
    pub true_value: String,
    /// Href emitted for the `False` member.
    pub false_value: String,
    /// Documentation string.
    pub doc: String,
}

/// The union of all builtins (e.g. `DataType`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeUnion {
    /// Constituent builtins, in emission order.
    pub members: Vec<EntityId>,
    /// Documentation string.
    pub doc: String,
}

/// Which flavor an entity is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// A general class.
    Class,
    /// A plain builtin.
    Builtin(Builtin),
    /// A builtin enumerating two literal values.
    BooleanEnum(BooleanEnum),
    /// The union over all builtins.
    DataTypeUnion(DataTypeUnion),
}

/// Priority group of an entity in the global declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupRank {
    /// Plain builtins and boolean enums.
    Builtin,
    /// The data-type union.
    DataTypeUnion,
    /// Everything else.
    Class,
}

/// A registered node of the domain graph.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Shared fields.
    pub class: Class,
    /// Flavor-specific data.
    pub kind: EntityKind,
}

impl Entity {
    /// The entity's identifier.
    pub fn subject(&self) -> &Identifier {
        &self.class.subject
    }

    /// The entity's display name.
    pub fn name(&self) -> &str {
        &self.class.subject.name
    }

    /// Whether this is any builtin flavor.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        !matches!(self.kind, EntityKind::Class)
    }

    /// Priority group for the global declaration order.
    #[must_use]
    pub fn group_rank(&self) -> GroupRank {
        match self.kind {
            EntityKind::Builtin(_) | EntityKind::BooleanEnum(_) => GroupRank::Builtin,
            EntityKind::DataTypeUnion(_) => GroupRank::DataTypeUnion,
            EntityKind::Class => GroupRank::Class,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn id(name: &str) -> Identifier {
        Identifier::new(name, format!("https://schema.org/{name}"))
    }

    #[test]
    fn deprecated_tracks_superseded_by() {
        let mut class = Class::new(id("Foo"), false);
        assert!(!class.deprecated());
        class.superseded_by.push(EntityId(3));
        assert!(class.deprecated());
    }

    #[test]
    fn sorting_does_not_touch_insertion_order() {
        let mut class = Class::new(id("Thing"), false);
        class.properties.push(Property::new(id("url"), vec![]));
        class.properties.push(Property::new(id("name"), vec![]));
        class.properties.push(Property::new(id("alternateName"), vec![]));

        let sorted: Vec<&str> = class
            .sorted_properties()
            .iter()
            .map(|p| p.id.name.as_str())
            .collect();
        assert_eq!(sorted, ["alternateName", "name", "url"]);
        assert_eq!(class.properties()[0].id.name, "url");
    }

    #[test]
    fn group_rank_orders_builtins_first() {
        assert!(GroupRank::Builtin < GroupRank::DataTypeUnion);
        assert!(GroupRank::DataTypeUnion < GroupRank::Class);
    }

    /// Identifiers drawn from a tiny pool so equal `(name, href)` keys are common.
    fn arb_ids() -> impl Strategy<Value = Vec<Identifier>> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["name", "url", "Name", "author"]),
                prop::sample::select(vec!["https://schema.org/", "https://example.com/"]),
            )
                .prop_map(|(name, ns)| Identifier::new(name, format!("{ns}{name}"))),
            0..16,
        )
    }

    /// Tags each item with its insertion index so ties stay observable.
    fn class_with(ids: &[Identifier]) -> Class {
        let mut class = Class::new(id("Thing"), false);
        for (i, ident) in ids.iter().enumerate() {
            class
                .properties
                .push(Property::new(ident.clone(), vec![]).with_comment(i.to_string()));
            class
                .enum_values
                .push(EnumValue::new(ident.clone()).with_comment(i.to_string()));
        }
        class
    }

    fn inserted_at(comment: &Option<String>) -> usize {
        comment
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or_default()
    }

    proptest! {
        #[test]
        fn sorting_properties_twice_matches_once(ids in arb_ids()) {
            let class = class_with(&ids);
            let once: Vec<Property> = class.sorted_properties().into_iter().cloned().collect();

            let mut resorted = Class::new(id("Thing"), false);
            resorted.properties = once.clone();
            let twice: Vec<Property> = resorted.sorted_properties().into_iter().cloned().collect();
            prop_assert_eq!(&once, &twice);

            for pair in once.windows(2) {
                prop_assert!(pair[0].key() <= pair[1].key());
                if pair[0].key() == pair[1].key() {
                    prop_assert!(inserted_at(&pair[0].comment) < inserted_at(&pair[1].comment));
                }
            }
        }

        #[test]
        fn sorting_enum_values_twice_matches_once(ids in arb_ids()) {
            let class = class_with(&ids);
            let once: Vec<EnumValue> = class.sorted_enum_values().into_iter().cloned().collect();

            let mut resorted = Class::new(id("Thing"), false);
            resorted.enum_values = once.clone();
            let twice: Vec<EnumValue> = resorted.sorted_enum_values().into_iter().cloned().collect();
            prop_assert_eq!(&once, &twice);

            for pair in once.windows(2) {
                prop_assert!(pair[0].key() <= pair[1].key());
                if pair[0].key() == pair[1].key() {
                    prop_assert!(inserted_at(&pair[0].comment) < inserted_at(&pair[1].comment));
                }
            }
        }
    }
}
