//! Rendering GraphQL types as schema definition language.

use super::{EnumType, Field, Kind, ObjectType, TypeRef};
use crate::Value;
use heck::ToLowerCamelCase;
use std::{collections::HashSet, fmt::Write};

/// Prints `ty` followed by every type reachable from it, with camelCase
/// field names.
pub fn print(ty: &ObjectType) -> String {
    Printer::new().print(ty)
}

/// Prints types as SDL.
///
/// Definitions are emitted depth first in field order, each one once, and
/// separated by a blank line. Built-in scalars are never emitted.
#[derive(Debug, Clone)]
pub struct Printer {
    auto_camel_case: bool,
}

struct Output<'a> {
    printer: &'a Printer,
    seen: HashSet<String>,
    out: String,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            auto_camel_case: true,
        }
    }

    /// When `false`, field names are printed as declared.
    pub fn auto_camel_case(mut self, auto_camel_case: bool) -> Self {
        self.auto_camel_case = auto_camel_case;
        self
    }

    pub fn print(&self, ty: &ObjectType) -> String {
        let mut output = Output {
            printer: self,
            seen: HashSet::new(),
            out: String::new(),
        };
        output.visit_object(ty);
        output.out
    }

    fn field_name(&self, name: &str) -> String {
        if self.auto_camel_case {
            name.to_lower_camel_case()
        } else {
            name.to_string()
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Output<'_> {
    fn visit_object(&mut self, ty: &ObjectType) {
        if !self.seen.insert(ty.name.clone()) {
            return;
        }

        self.write_object(ty);

        for field in ty.fields.values() {
            self.visit_ref(&field.ty);
        }
    }

    fn visit_ref(&mut self, ty: &TypeRef) {
        match ty.leaf() {
            TypeRef::Scalar(scalar) => {
                if !scalar.is_builtin() && self.seen.insert(scalar.name().to_string()) {
                    self.separate();
                    let _ = writeln!(self.out, "scalar {}", scalar.name());
                }
            }
            TypeRef::Enum(enum_type) => {
                if self.seen.insert(enum_type.name.clone()) {
                    self.write_enum(enum_type);
                }
            }
            TypeRef::Object(object) => {
                if let Some(object) = object.get() {
                    self.visit_object(&object);
                }
            }
            TypeRef::List(_) | TypeRef::NonNull(_) => {}
        }
    }

    fn write_object(&mut self, ty: &ObjectType) {
        self.separate();
        let _ = writeln!(self.out, "{} {} {{", ty.kind.keyword(), ty.name);

        for (name, field) in &ty.fields {
            let _ = write!(
                self.out,
                "  {}: {}",
                self.printer.field_name(name),
                field.output_ty()
            );

            if ty.kind == Kind::InputObject {
                if let Some(default) = &field.default {
                    let _ = write!(self.out, " = {}", literal(field, default));
                }
            }

            self.out.push('\n');
        }

        self.out.push_str("}\n");
    }

    fn write_enum(&mut self, ty: &EnumType) {
        self.separate();
        let _ = writeln!(self.out, "enum {} {{", ty.name);

        for value in &ty.values {
            let _ = writeln!(self.out, "  {value}");
        }

        self.out.push_str("}\n");
    }

    fn separate(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }
}

/// Formats a default value as a GraphQL literal. String defaults of enum
/// fields are printed as bare enum values.
fn literal(field: &Field, value: &Value) -> String {
    match (field.ty.leaf(), value) {
        (TypeRef::Enum(_), Value::String(name)) => name.clone(),
        _ => value_literal(value),
    }
}

fn value_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::String(value) => Value::String(value.clone()).to_string(),
        Value::Array(items) => {
            let items: Vec<_> = items.iter().map(value_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(entries) => {
            let entries: Vec<_> = entries
                .iter()
                .map(|(key, value)| format!("{key}: {}", value_literal(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::gql::Scalar;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn object(name: &str, kind: Kind, fields: Vec<(&str, Field)>) -> ObjectType {
        let mut ty = ObjectType::new(name, kind);
        for (name, field) in fields {
            ty.fields.insert(name.to_string(), field);
        }
        ty
    }

    #[test]
    fn prints_nested_types_depth_first() {
        let specie = Arc::new(EnumType::new("SpecieEnum", ["DOG", "CAT"]));
        let pet = Arc::new(object(
            "PetGql",
            Kind::Object,
            vec![("specie", Field::new(specie).with_required(true))],
        ));
        let human = object(
            "HumanGql",
            Kind::Object,
            vec![
                ("birth_date", Field::new(Scalar::DateTime).with_required(true)),
                ("pets", Field::new(TypeRef::list(pet))),
            ],
        );

        assert_eq!(
            print(&human),
            "type HumanGql {\n  birthDate: DateTime!\n  pets: [PetGql]\n}\n\n\
             scalar DateTime\n\n\
             type PetGql {\n  specie: SpecieEnum!\n}\n\n\
             enum SpecieEnum {\n  DOG\n  CAT\n}\n"
        );
    }

    #[test]
    fn input_types_show_defaults() {
        let ty = object(
            "MyModelInputGql",
            Kind::InputObject,
            vec![
                ("field1", Field::new(Scalar::Boolean).with_required(true)),
                (
                    "field2",
                    Field::new(Scalar::String).with_default(Some(Value::from("abc"))),
                ),
                (
                    "tags",
                    Field::new(TypeRef::list(Scalar::Int))
                        .with_default(Some(serde_json::json!([1, 2]))),
                ),
            ],
        );

        assert_eq!(
            print(&ty),
            "input MyModelInputGql {\n  field1: Boolean!\n  field2: String = \"abc\"\n  tags: [Int] = [1, 2]\n}\n"
        );
    }

    #[test]
    fn object_types_hide_defaults() {
        let ty = object(
            "MyModelGql",
            Kind::Object,
            vec![(
                "field2",
                Field::new(Scalar::String).with_default(Some(Value::from("abc"))),
            )],
        );

        assert_eq!(print(&ty), "type MyModelGql {\n  field2: String\n}\n");
    }

    #[test]
    fn enum_defaults_are_bare() {
        let specie = Arc::new(EnumType::new("SpecieEnum", ["DOG", "CAT"]));
        let ty = object(
            "PetInputGql",
            Kind::InputObject,
            vec![(
                "specie",
                Field::new(specie).with_default(Some(Value::from("CAT"))),
            )],
        );

        assert!(print(&ty).contains("specie: SpecieEnum = CAT"));
    }

    #[test]
    fn camel_case_can_be_disabled() {
        let ty = object(
            "HumanGql",
            Kind::Interface,
            vec![("birth_date", Field::new(Scalar::String))],
        );

        let sdl = Printer::new().auto_camel_case(false).print(&ty);
        assert_eq!(sdl, "interface HumanGql {\n  birth_date: String\n}\n");
    }
}
