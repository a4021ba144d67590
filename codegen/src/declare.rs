//! Per-entity declaration sets.
//!
//! A class yields up to three declarations (its enum, its `…Base` structure,
//! its public alias). Each builtin flavor yields exactly one.

use typegraph_model::{BooleanEnum, Builtin, DataTypeUnion, EntityId, EntityKind};

use crate::algebra::TypeAlgebra;
use crate::decl::{non_empty, Declaration, EnumDecl, EnumMember, TypeAlias};
use crate::ts::TypeExpr;

/// The declarations emitted for entity `id`, in order.
pub fn declarations(alg: &TypeAlgebra<'_>, id: EntityId) -> Vec<Declaration> {
    let entity = alg.registry().get(id);
    let name = entity.name().to_string();
    match &entity.kind {
        EntityKind::Class => class_declarations(alg, id),
        EntityKind::Builtin(builtin) => vec![builtin_alias(name, builtin)],
        EntityKind::BooleanEnum(boolean) => vec![boolean_enum(name, boolean)],
        EntityKind::DataTypeUnion(union) => vec![data_type_alias(alg, name, union)],
    }
}

fn class_declarations(alg: &TypeAlgebra<'_>, id: EntityId) -> Vec<Declaration> {
    let class = &alg.registry().get(id).class;
    let mut decls = Vec::with_capacity(3);

    if !class.enum_values().is_empty() {
        let members = class
            .sorted_enum_values()
            .into_iter()
            .map(|value| EnumMember {
                name: value.id.name.clone(),
                value: value.id.href.clone(),
                comment: value.comment.clone(),
            })
            .collect();
        decls.push(Declaration::Enum(EnumDecl {
            name: alg.enum_name(id),
            comment: None,
            members,
        }));
    }

    decls.push(Declaration::TypeAlias(TypeAlias {
        name: alg.base_name(id),
        comment: None,
        ty: alg.base_type(id),
    }));

    decls.push(Declaration::TypeAlias(TypeAlias {
        name: alg.class_name(id),
        comment: alg.public_comment(id),
        ty: alg.total_type(id),
    }));

    decls
}

fn builtin_alias(name: String, builtin: &Builtin) -> Declaration {
    Declaration::TypeAlias(TypeAlias {
        name,
        comment: non_empty(&builtin.doc),
        ty: TypeExpr::reference(builtin.equivalent_type_name.clone()),
    })
}

fn boolean_enum(name: String, boolean: &BooleanEnum) -> Declaration {
    Declaration::Enum(EnumDecl {
        name,
        comment: non_empty(&boolean.doc),
        members: vec![
            EnumMember {
                name: "True".to_string(),
                value: boolean.true_value.clone(),
                comment: None,
            },
            EnumMember {
                name: "False".to_string(),
                value: boolean.false_value.clone(),
                comment: None,
            },
        ],
    })
}

fn data_type_alias(alg: &TypeAlgebra<'_>, name: String, union: &DataTypeUnion) -> Declaration {
    Declaration::TypeAlias(TypeAlias {
        name,
        comment: non_empty(&union.doc),
        ty: TypeExpr::Union(
            union
                .members
                .iter()
                .map(|&member| TypeExpr::reference(alg.class_name(member)))
                .collect(),
        ),
    })
}
