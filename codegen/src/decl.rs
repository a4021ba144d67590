//! Declarations handed to the printer.

use serde::Serialize;

use crate::ts::TypeExpr;

/// A member of an enum declaration: `name = "value"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// Member name.
    pub name: String,
    /// Literal value (a resource locator).
    pub value: String,
    /// Documentation string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDecl {
    /// Declared name.
    pub name: String,
    /// Documentation string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Members in emission order.
    pub members: Vec<EnumMember>,
}

/// A type alias declaration: `name = ty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAlias {
    /// Declared name.
    pub name: String,
    /// Documentation string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// The aliased type.
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

/// One emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    /// An enum.
    Enum(EnumDecl),
    /// A type alias.
    TypeAlias(TypeAlias),
}

impl Declaration {
    /// The declared name.
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(e) => &e.name,
            Self::TypeAlias(a) => &a.name,
        }
    }

    /// The documentation string, if any.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => e.comment.as_deref(),
            Self::TypeAlias(a) => a.comment.as_deref(),
        }
    }

    /// The aliased type, for type aliases.
    pub fn ty(&self) -> Option<&TypeExpr> {
        match self {
            Self::Enum(_) => None,
            Self::TypeAlias(a) => Some(&a.ty),
        }
    }

    /// The enum declaration, for enums.
    pub fn as_enum(&self) -> Option<&EnumDecl> {
        match self {
            Self::Enum(e) => Some(e),
            Self::TypeAlias(_) => None,
        }
    }
}

/// Builds an optional comment, treating an empty string as absent.
pub(crate) fn non_empty(comment: &str) -> Option<String> {
    (!comment.is_empty()).then(|| comment.to_string())
}
