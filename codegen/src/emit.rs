//! Source text emission.
//!
//! Prints a declaration list as TypeScript-style source. Records are laid out
//! one field per line; every other expression is printed inline.

use std::fmt::Write as FmtWrite;

use crate::decl::{Declaration, EnumDecl, TypeAlias};
use crate::ts::{write_quoted, Field, TypeExpr};

const INDENT: &str = "    ";

/// A source file being built line by line.
pub struct TsFile {
    /// Accumulated source text.
    pub buf: String,
}

impl TsFile {
    /// Starts a file with a generated-code header.
    pub fn new(header: &str) -> Self {
        let mut buf = String::with_capacity(4096);
        for line in header.lines() {
            let _ = writeln!(buf, "// {line}");
        }
        buf.push('\n');
        Self { buf }
    }

    /// Appends a line.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a JSDoc block at `depth` levels of indentation.
    pub fn doc_comment(&mut self, comment: &str, depth: usize) {
        let pad = INDENT.repeat(depth);
        let lines: Vec<&str> = comment.lines().collect();
        match lines.as_slice() {
            [] => {}
            [only] => {
                let _ = writeln!(self.buf, "{pad}/** {} */", escape_comment(only));
            }
            many => {
                let _ = writeln!(self.buf, "{pad}/**");
                for line in many {
                    if line.is_empty() {
                        let _ = writeln!(self.buf, "{pad} *");
                    } else {
                        let _ = writeln!(self.buf, "{pad} * {}", escape_comment(line));
                    }
                }
                let _ = writeln!(self.buf, "{pad} */");
            }
        }
    }

    /// Appends one declaration.
    pub fn declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Enum(e) => self.enum_decl(e),
            Declaration::TypeAlias(a) => self.type_alias(a),
        }
    }

    fn enum_decl(&mut self, e: &EnumDecl) {
        if let Some(comment) = &e.comment {
            self.doc_comment(comment, 0);
        }
        let _ = writeln!(self.buf, "export enum {} {{", e.name);
        for member in &e.members {
            if let Some(comment) = &member.comment {
                self.doc_comment(comment, 1);
            }
            let _ = write!(self.buf, "{INDENT}{} = ", member.name);
            let _ = write_quoted(&mut self.buf, &member.value);
            self.buf.push_str(",\n");
        }
        self.line("}");
    }

    fn type_alias(&mut self, a: &TypeAlias) {
        if let Some(comment) = &a.comment {
            self.doc_comment(comment, 0);
        }
        let _ = write!(self.buf, "export type {} = ", a.name);
        self.expr(&a.ty, 0);
        self.buf.push_str(";\n");
    }

    fn expr(&mut self, ty: &TypeExpr, depth: usize) {
        match ty {
            TypeExpr::Record(fields) if !fields.is_empty() => self.record(fields, depth),
            TypeExpr::Union(items) => self.joined(items, " | ", false, depth),
            TypeExpr::Intersection(items) => self.joined(items, " & ", true, depth),
            TypeExpr::Parenthesized(inner) => {
                self.buf.push('(');
                self.expr(inner, depth);
                self.buf.push(')');
            }
            other => {
                let _ = write!(self.buf, "{other}");
            }
        }
    }

    fn joined(&mut self, items: &[TypeExpr], sep: &str, in_intersection: bool, depth: usize) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(sep);
            }
            let group = in_intersection && matches!(item, TypeExpr::Union(inner) if inner.len() > 1);
            if group {
                self.buf.push('(');
            }
            self.expr(item, depth);
            if group {
                self.buf.push(')');
            }
        }
    }

    fn record(&mut self, fields: &[Field], depth: usize) {
        let pad = INDENT.repeat(depth + 1);
        self.buf.push_str("{\n");
        for field in fields {
            if let Some(comment) = &field.comment {
                self.doc_comment(comment, depth + 1);
            }
            self.buf.push_str(&pad);
            let _ = write_quoted(&mut self.buf, &field.name);
            if field.optional {
                self.buf.push('?');
            }
            self.buf.push_str(": ");
            self.expr(&field.ty, depth + 1);
            self.buf.push_str(";\n");
        }
        self.buf.push_str(&INDENT.repeat(depth));
        self.buf.push('}');
    }

    /// Returns the completed source.
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Keeps a comment line from closing its JSDoc block early.
fn escape_comment(line: &str) -> String {
    line.replace("*/", "*\\/")
}

/// Renders `declarations` as a complete source file.
pub fn render(declarations: &[Declaration]) -> String {
    let mut f = TsFile::new("Generated by typegraph. Do not edit.");
    for (i, decl) in declarations.iter().enumerate() {
        if i > 0 {
            f.blank();
        }
        f.declaration(decl);
    }
    f.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::EnumMember;

    #[test]
    fn renders_alias_with_record() {
        let decl = Declaration::TypeAlias(TypeAlias {
            name: "ThingBase".into(),
            comment: None,
            ty: TypeExpr::Record(vec![
                Field::optional("@id", TypeExpr::reference("string")),
                Field {
                    name: "name".into(),
                    optional: true,
                    ty: TypeExpr::reference("Text"),
                    comment: Some("The name of the item.".into()),
                },
            ]),
        });
        let mut f = TsFile { buf: String::new() };
        f.declaration(&decl);
        assert_eq!(
            f.finish(),
            "export type ThingBase = {\n    \"@id\"?: string;\n    /** The name of the item. */\n    \"name\"?: Text;\n};\n"
        );
    }

    #[test]
    fn renders_enum_and_multiline_comment() {
        let decl = Declaration::Enum(EnumDecl {
            name: "Boolean".into(),
            comment: Some("Boolean: True or False.\n@deprecated Use Flag instead.".into()),
            members: vec![EnumMember {
                name: "True".into(),
                value: "https://schema.org/True".into(),
                comment: None,
            }],
        });
        let mut f = TsFile { buf: String::new() };
        f.declaration(&decl);
        assert_eq!(
            f.finish(),
            "/**\n * Boolean: True or False.\n * @deprecated Use Flag instead.\n */\nexport enum Boolean {\n    True = \"https://schema.org/True\",\n}\n"
        );
    }

    #[test]
    fn comment_terminators_are_escaped() {
        let mut f = TsFile { buf: String::new() };
        f.doc_comment("a */ b", 0);
        assert_eq!(f.finish(), "/** a *\\/ b */\n");
    }

    #[test]
    fn render_separates_declarations() {
        let decls = vec![
            Declaration::TypeAlias(TypeAlias {
                name: "Text".into(),
                comment: None,
                ty: TypeExpr::reference("string"),
            }),
            Declaration::TypeAlias(TypeAlias {
                name: "Number".into(),
                comment: None,
                ty: TypeExpr::reference("number"),
            }),
        ];
        let out = render(&decls);
        assert!(out.starts_with("// Generated by typegraph. Do not edit.\n\n"));
        assert!(out.ends_with("export type Text = string;\n\nexport type Number = number;\n"));
    }
}
