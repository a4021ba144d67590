//! Type algebra over a frozen class graph.
//!
//! For every class this computes four shapes:
//!
//! - **base type**: own fields intersected with the parents' base types;
//! - **leaf type**: the base type tagged with the class's own discriminant,
//!   or untagged when an ancestor is a builtin;
//! - **non-enum type**: the leaf type united with references to each child
//!   (and `string` when bare strings are allowed);
//! - **total type**: the non-enum type, united with the class's enum when it
//!   enumerates values.
//!
//! Nothing here is cached. `deprecated`, `inherits_data_type` and
//! `allow_string` are recomputed from the graph on every query.

use typegraph_model::{Entity, EntityId, EntityKind, Property, Registry};

use crate::options::GeneratorOptions;
use crate::ts::{Field, TypeExpr};

/// Type computations for the entities of one registry.
#[derive(Debug, Clone, Copy)]
pub struct TypeAlgebra<'a> {
    registry: &'a Registry,
    options: &'a GeneratorOptions,
}

impl<'a> TypeAlgebra<'a> {
    /// Creates the algebra for `registry`.
    pub fn new(registry: &'a Registry, options: &'a GeneratorOptions) -> Self {
        Self { registry, options }
    }

    /// The registry being read.
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// The options in effect.
    pub fn options(&self) -> &'a GeneratorOptions {
        self.options
    }

    fn entity(&self, id: EntityId) -> &'a Entity {
        self.registry.get(id)
    }

    /// Whether any transitive parent of `id` is a builtin of any flavor.
    #[must_use]
    pub fn inherits_data_type(&self, id: EntityId) -> bool {
        self.entity(id)
            .class
            .parents
            .iter()
            .any(|&parent| self.entity(parent).is_builtin() || self.inherits_data_type(parent))
    }

    /// Whether `id` or any transitive parent allows a bare string.
    #[must_use]
    pub fn allow_string(&self, id: EntityId) -> bool {
        let class = &self.entity(id).class;
        class.allow_string_type || class.parents.iter().any(|&p| self.allow_string(p))
    }

    /// Name of the public declaration for `id`.
    pub fn class_name(&self, id: EntityId) -> String {
        self.entity(id).name().to_string()
    }

    /// Name of the structural declaration for `id`.
    ///
    /// Builtins have no separate structure, so their base name is their own.
    pub fn base_name(&self, id: EntityId) -> String {
        let entity = self.entity(id);
        match entity.kind {
            EntityKind::Class => format!("{}Base", entity.name()),
            _ => entity.name().to_string(),
        }
    }

    /// Name of the enum declaration for `id`.
    pub fn enum_name(&self, id: EntityId) -> String {
        format!("{}Enum", self.entity(id).name())
    }

    /// The structural shape: inherited base types intersected with own fields.
    pub fn base_type(&self, id: EntityId) -> TypeExpr {
        let class = &self.entity(id).class;

        let parent_base = match class.parents.as_slice() {
            [] => None,
            [parent] => Some(TypeExpr::reference(self.base_name(*parent))),
            parents => Some(TypeExpr::Intersection(
                parents
                    .iter()
                    .map(|&p| TypeExpr::reference(self.base_name(p)))
                    .collect(),
            )),
        };

        let mut fields = Vec::new();
        if class.is_root() {
            fields.push(self.id_field());
        }
        fields.extend(
            class
                .sorted_properties()
                .into_iter()
                .filter(|p| !(self.options.skip_deprecated_properties && p.deprecated))
                .map(|p| self.property_field(p)),
        );
        let own_fields = (!fields.is_empty()).then_some(TypeExpr::Record(fields));

        match (parent_base, own_fields) {
            (Some(parent), Some(own)) => TypeExpr::Intersection(vec![parent, own]),
            (Some(parent), None) => parent,
            (None, Some(own)) => own,
            (None, None) => TypeExpr::empty_record(),
        }
    }

    /// The base type, tagged with `id`'s discriminant unless it inherits a builtin.
    ///
    /// The base type is referenced through its declaration name.
    pub fn leaf_type(&self, id: EntityId) -> TypeExpr {
        let base = TypeExpr::reference(self.base_name(id));
        if self.inherits_data_type(id) {
            return base;
        }
        TypeExpr::Intersection(vec![TypeExpr::Record(vec![self.tag_field(id)]), base])
    }

    /// The leaf type united with `id`'s children and, if allowed, `string`.
    pub fn non_enum_type(&self, id: EntityId) -> TypeExpr {
        let mut children: Vec<&Entity> = self
            .entity(id)
            .class
            .children
            .iter()
            .map(|&child| self.entity(child))
            .collect();
        children.sort_by(|a, b| a.subject().cmp(b.subject()));

        let mut child_refs: Vec<TypeExpr> = children
            .iter()
            .map(|child| TypeExpr::reference(child.name()))
            .collect();
        if self.allow_string(id) {
            child_refs.push(TypeExpr::reference("string"));
        }

        let leaf = self.leaf_type(id);
        match child_refs.len() {
            0 => leaf,
            1 => {
                let mut union = vec![leaf];
                union.append(&mut child_refs);
                TypeExpr::Union(union)
            }
            _ => TypeExpr::Union(vec![
                leaf,
                TypeExpr::parenthesized(TypeExpr::Union(child_refs)),
            ]),
        }
    }

    /// The public type of `id`.
    pub fn total_type(&self, id: EntityId) -> TypeExpr {
        if self.entity(id).class.enum_values().is_empty() {
            return self.non_enum_type(id);
        }
        TypeExpr::Union(vec![
            TypeExpr::reference(self.enum_name(id)),
            TypeExpr::parenthesized(self.non_enum_type(id)),
        ])
    }

    /// Documentation for the public declaration of `id`.
    ///
    /// Deprecated entities get a trailing `@deprecated Use A or B instead.`
    /// line naming their replacements in the order they were recorded.
    pub fn public_comment(&self, id: EntityId) -> Option<String> {
        let class = &self.entity(id).class;
        if !class.deprecated() {
            return class.comment.clone();
        }

        let replacements: Vec<String> = class
            .superseded_by
            .iter()
            .map(|&target| self.class_name(target))
            .collect();
        let notice = format!("@deprecated Use {} instead.", replacements.join(" or "));
        Some(match &class.comment {
            Some(comment) => format!("{comment}\n{notice}"),
            None => notice,
        })
    }

    /// The optional identifier field carried by root classes.
    fn id_field(&self) -> Field {
        Field::optional(self.options.id_field.clone(), TypeExpr::reference("string"))
    }

    /// The discriminant field naming `id`.
    fn tag_field(&self, id: EntityId) -> Field {
        let name = self.options.context.scoped_name(self.entity(id).subject());
        Field::required(self.options.type_field.clone(), TypeExpr::literal(name))
    }

    /// Renders a property as an optional record field.
    ///
    /// The value type is the union of the property's ranges, sorted.
    pub fn property_field(&self, property: &Property) -> Field {
        let mut ranges: Vec<_> = property.ranges.iter().collect();
        ranges.sort();
        ranges.dedup();

        let ty = match ranges.as_slice() {
            [] => TypeExpr::reference("never"),
            [only] => TypeExpr::reference(only.name.clone()),
            many => TypeExpr::Union(
                many.iter()
                    .map(|range| TypeExpr::reference(range.name.clone()))
                    .collect(),
            ),
        };

        let comment = match (&property.comment, property.deprecated) {
            (Some(comment), true) => Some(format!("{comment}\n@deprecated")),
            (None, true) => Some("@deprecated".to_string()),
            (comment, false) => comment.clone(),
        };

        Field {
            name: self.options.context.scoped_name(&property.id),
            optional: true,
            ty,
            comment,
        }
    }
}
