//! The two-phase entity registry.
//!
//! [`RegistryBuilder`] is the build phase: entities are registered and facts
//! are ingested one at a time. [`RegistryBuilder::freeze`] ends it and returns
//! a [`Registry`], which has no mutating API and is what every type
//! computation reads from.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::entity::{
    BooleanEnum, Builtin, Class, DataTypeUnion, Entity, EntityId, EntityKind,
};
use crate::error::IngestError;
use crate::fact::{Fact, FactShape};
use crate::identifier::Identifier;
use crate::ordering::compare_entities;
use crate::property::{EnumValue, Property};

/// Severity of a non-fatal ingestion diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational; nothing was lost.
    Info,
    /// Data was overwritten or ignored.
    Warning,
}

/// A non-fatal anomaly noticed while building the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Href of the entity the diagnostic is about.
    pub entity: String,
    /// Severity of the anomaly.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates an informational diagnostic.
    pub fn info(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Build-phase registry. Owns every entity until it is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entities: Vec<Entity>,
    by_href: HashMap<String, EntityId>,
    diagnostics: Vec<Diagnostic>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a general class.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::DuplicateEntity`] if the href is already registered.
    pub fn register_class(
        &mut self,
        subject: Identifier,
        allow_string_type: bool,
    ) -> Result<EntityId, IngestError> {
        self.insert(Class::new(subject, allow_string_type), EntityKind::Class)
    }

    /// Registers a plain builtin aliasing `equivalent_type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::DuplicateEntity`] if the url is already registered.
    pub fn register_builtin(
        &mut self,
        url: &str,
        equivalent_type_name: &str,
        doc: &str,
    ) -> Result<EntityId, IngestError> {
        self.insert(
            Class::new(Identifier::from_url(url), false),
            EntityKind::Builtin(Builtin {
                equivalent_type_name: equivalent_type_name.to_string(),
                doc: doc.to_string(),
            }),
        )
    }

    /// Registers a boolean enum whose members are `true_url` and `false_url`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::DuplicateEntity`] if the url is already registered.
    pub fn register_boolean_enum(
        &mut self,
        url: &str,
        true_url: &str,
        false_url: &str,
        doc: &str,
    ) -> Result<EntityId, IngestError> {
        self.insert(
            Class::new(Identifier::from_url(url), false),
            EntityKind::BooleanEnum(BooleanEnum {
                true_value: true_url.to_string(),
                false_value: false_url.to_string(),
                doc: doc.to_string(),
            }),
        )
    }

    /// Registers the union over `members`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidDataTypeMember`] if a member is not a plain
    /// builtin or boolean enum of this builder,
    /// [`IngestError::DuplicateDataTypeUnion`] if a union is already
    /// registered, and [`IngestError::DuplicateEntity`] if the url is already
    /// registered.
    pub fn register_data_type_union(
        &mut self,
        url: &str,
        members: Vec<EntityId>,
        doc: &str,
    ) -> Result<EntityId, IngestError> {
        if let Some(existing) = self
            .entities
            .iter()
            .find(|e| matches!(e.kind, EntityKind::DataTypeUnion(_)))
        {
            return Err(IngestError::DuplicateDataTypeUnion {
                existing: existing.subject().href.clone(),
                href: url.to_string(),
            });
        }
        for member in &members {
            let valid = self.entities.get(member.0).is_some_and(|e| {
                matches!(e.kind, EntityKind::Builtin(_) | EntityKind::BooleanEnum(_))
            });
            if !valid {
                return Err(IngestError::InvalidDataTypeMember {
                    union: url.to_string(),
                    member: self
                        .entities
                        .get(member.0)
                        .map_or_else(|| format!("#{}", member.0), |e| e.subject().href.clone()),
                });
            }
        }
        self.insert(
            Class::new(Identifier::from_url(url), false),
            EntityKind::DataTypeUnion(DataTypeUnion {
                members,
                doc: doc.to_string(),
            }),
        )
    }

    fn insert(&mut self, class: Class, kind: EntityKind) -> Result<EntityId, IngestError> {
        if self.by_href.contains_key(&class.subject.href) {
            return Err(IngestError::DuplicateEntity {
                href: class.subject.href,
            });
        }
        let id = EntityId(self.entities.len());
        self.by_href.insert(class.subject.href.clone(), id);
        self.entities.push(Entity { class, kind });
        Ok(id)
    }

    /// Looks up an entity by href.
    pub fn lookup(&self, href: &str) -> Option<EntityId> {
        self.by_href.get(href).copied()
    }

    /// Borrows a registered entity.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this builder.
    pub fn get(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    /// Checks a fact about the entity `entity` (an href) without applying it.
    ///
    /// `entity` need not be registered yet. Returns whether [`add`] would
    /// consume the fact.
    ///
    /// [`add`]: RegistryBuilder::add
    ///
    /// # Errors
    ///
    /// Returns the error [`add`] would return for the same fact.
    pub fn check(&self, entity: &str, fact: &Fact) -> Result<bool, IngestError> {
        self.resolve(entity, fact).map(|resolved| resolved.is_some())
    }

    fn resolve<'f>(
        &self,
        entity: &str,
        fact: &'f Fact,
    ) -> Result<Option<Resolved<'f>>, IngestError> {
        let Some(shape) = fact.shape() else {
            return Ok(None);
        };

        let resolved = match shape {
            FactShape::Comment(text) => Resolved::Comment(text),
            FactShape::SubclassOf(parent) => {
                let Some(parent_id) = self.lookup(&parent.href) else {
                    return Err(IngestError::UnresolvedParent {
                        entity: entity.to_string(),
                        parent: parent.href.clone(),
                    });
                };
                // An entity that is not registered yet has no descendants.
                let cycle = self
                    .lookup(entity)
                    .is_some_and(|id| self.is_ancestor_or_self(id, parent_id));
                if cycle {
                    return Err(IngestError::InheritanceCycle {
                        entity: entity.to_string(),
                        parent: parent.href.clone(),
                    });
                }
                Resolved::Parent(parent_id)
            }
            FactShape::SupersededBy(target) => {
                let Some(target_id) = self.lookup(&target.href) else {
                    return Err(IngestError::UnresolvedSupersession {
                        entity: entity.to_string(),
                        target: target.href.clone(),
                    });
                };
                Resolved::Replacement(target_id)
            }
        };
        Ok(Some(resolved))
    }

    /// Ingests one fact about entity `id`.
    ///
    /// Returns `Ok(true)` if the fact was a comment, subclass-of or
    /// superseded-by fact and has been applied, `Ok(false)` if the fact is
    /// not one the class model consumes. A rejected fact leaves the builder
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnresolvedParent`] or
    /// [`IngestError::UnresolvedSupersession`] if the referenced entity is not
    /// registered yet, and [`IngestError::InheritanceCycle`] if the parent is
    /// the entity itself or one of its descendants.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this builder.
    pub fn add(&mut self, id: EntityId, fact: &Fact) -> Result<bool, IngestError> {
        let href = self.get(id).subject().href.clone();
        let Some(resolved) = self.resolve(&href, fact)? else {
            return Ok(false);
        };

        match resolved {
            Resolved::Comment(text) => {
                let class = &mut self.entities[id.0].class;
                if let Some(previous) = class.comment.replace(text.to_string()) {
                    warn!(entity = %href, previous = %previous, "duplicate comment overwritten");
                    self.diagnostics.push(Diagnostic::warning(
                        href,
                        "duplicate comment; previous value overwritten",
                    ));
                }
            }
            Resolved::Parent(parent_id) => {
                self.entities[id.0].class.parents.push(parent_id);
                self.entities[parent_id.0].class.children.push(id);
            }
            Resolved::Replacement(target_id) => {
                self.entities[id.0].class.superseded_by.push(target_id);
            }
        }
        Ok(true)
    }

    /// Appends a property to entity `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this builder.
    pub fn add_prop(&mut self, id: EntityId, property: Property) {
        self.entities[id.0].class.properties.push(property);
    }

    /// Appends an enum value to entity `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this builder.
    pub fn add_enum(&mut self, id: EntityId, value: EnumValue) {
        self.entities[id.0].class.enum_values.push(value);
    }

    /// Records a diagnostic produced outside fact ingestion.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Ends the build phase.
    #[must_use]
    pub fn freeze(self) -> Registry {
        Registry {
            entities: self.entities,
            by_href: self.by_href,
            diagnostics: self.diagnostics,
        }
    }

    /// Whether `ancestor` is `id` itself or one of its transitive parents.
    fn is_ancestor_or_self(&self, ancestor: EntityId, id: EntityId) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if next == ancestor {
                return true;
            }
            if seen.insert(next) {
                stack.extend(self.entities[next.0].class.parents.iter().copied());
            }
        }
        false
    }
}

/// A fact checked against the graph, with its target resolved.
enum Resolved<'f> {
    Comment(&'f str),
    Parent(EntityId),
    Replacement(EntityId),
}

/// Query-phase registry. Read-only.
#[derive(Debug)]
pub struct Registry {
    entities: Vec<Entity>,
    by_href: HashMap<String, EntityId>,
    diagnostics: Vec<Diagnostic>,
}

impl Registry {
    /// Borrows an entity.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by the builder this registry was frozen from.
    pub fn get(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    /// Looks up an entity by href.
    pub fn find(&self, href: &str) -> Option<EntityId> {
        self.by_href.get(href).copied()
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no entity is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (EntityId(index), entity))
    }

    /// Entity ids in global declaration order.
    pub fn sorted(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = (0..self.entities.len()).map(EntityId).collect();
        ids.sort_by(|a, b| compare_entities(self.get(*a), self.get(*b)));
        ids
    }

    /// Diagnostics recorded during the build phase.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
