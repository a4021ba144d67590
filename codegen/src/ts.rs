//! Type-expression tree.
//!
//! A closed set of expression kinds: reference-by-name, string literal,
//! structural record, union, intersection and parenthesized grouping.

use std::fmt::{self, Write as _};

use serde::Serialize;

/// A field of a structural record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field key, printed quoted.
    pub name: String,
    /// Whether the field may be omitted.
    pub optional: bool,
    /// The field's type.
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Documentation string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Field {
    /// A required field without documentation.
    pub fn required(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty,
            comment: None,
        }
    }

    /// An optional field without documentation.
    pub fn optional(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            optional: true,
            ty,
            comment: None,
        }
    }
}

/// A right-hand-side type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeExpr {
    /// A type referenced by name (e.g. `ThingBase`, `string`).
    Reference(String),
    /// A string literal type (e.g. `"Thing"`).
    Literal(String),
    /// A structural record with fields in emission order.
    Record(Vec<Field>),
    /// `A | B | ...`
    Union(Vec<TypeExpr>),
    /// `A & B & ...`
    Intersection(Vec<TypeExpr>),
    /// `(A)`
    Parenthesized(Box<TypeExpr>),
}

impl TypeExpr {
    /// A reference to `name`.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// The string literal `value`.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// `(inner)`.
    #[must_use]
    pub fn parenthesized(inner: TypeExpr) -> Self {
        Self::Parenthesized(Box::new(inner))
    }

    /// The empty record `{}`.
    #[must_use]
    pub fn empty_record() -> Self {
        Self::Record(Vec::new())
    }

    /// The record's fields, if this is a record.
    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Whether a field named `name` appears anywhere in this expression.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        match self {
            Self::Reference(_) | Self::Literal(_) => false,
            Self::Record(fields) => fields.iter().any(|f| f.name == name),
            Self::Union(items) | Self::Intersection(items) => {
                items.iter().any(|item| item.has_field(name))
            }
            Self::Parenthesized(inner) => inner.has_field(name),
        }
    }
}

/// Writes `value` as a double-quoted, escaped string.
pub(crate) fn write_quoted(f: &mut impl fmt::Write, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{{{:x}}}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    items: &[TypeExpr],
    sep: &str,
    in_intersection: bool,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        // `&` binds tighter than `|`.
        if in_intersection && matches!(item, TypeExpr::Union(inner) if inner.len() > 1) {
            write!(f, "({item})")?;
        } else {
            write!(f, "{item}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, &self.name)?;
        if self.optional {
            f.write_char('?')?;
        }
        write!(f, ": {}", self.ty)
    }
}

/// Compact single-line rendering.
impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(name) => f.write_str(name),
            Self::Literal(value) => write_quoted(f, value),
            Self::Record(fields) if fields.is_empty() => f.write_str("{}"),
            Self::Record(fields) => {
                f.write_str("{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(" }")
            }
            Self::Union(items) => write_joined(f, items, " | ", false),
            Self::Intersection(items) => write_joined(f, items, " & ", true),
            Self::Parenthesized(inner) => write!(f, "({inner})"),
        }
    }
}
