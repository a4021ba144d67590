//! Global declaration order.
//!
//! Plain builtins come first, then the data-type union, then every other
//! entity. Within a group entities order by `(name, href)`.

use std::cmp::Ordering;

use crate::entity::Entity;

/// Compares two entities in global declaration order.
///
/// This is a total order: two entities compare equal only when they share a
/// group and an identical `(name, href)`.
#[must_use]
pub fn compare_entities(a: &Entity, b: &Entity) -> Ordering {
    a.group_rank()
        .cmp(&b.group_rank())
        .then_with(|| a.subject().cmp(b.subject()))
}
