use modelgql::{
    gql::{self, Scalar, TypeRef},
    sdl, ConversionOptions, Context, Kind, Model, Value,
};
use pretty_assertions::assert_eq;

#[derive(Model)]
#[allow(dead_code)]
struct User {
    id: i64,
    name: String,
    email: String,
    password: String,
}

fn convert(options: ConversionOptions) -> modelgql::Result<std::sync::Arc<gql::ObjectType>> {
    Context::new().convert_model(User::model_ref(), Kind::Object, &options)
}

fn field_names(options: ConversionOptions) -> Vec<String> {
    convert(options)
        .unwrap()
        .field_names()
        .map(str::to_string)
        .collect()
}

#[test]
fn declared_order_is_kept() {
    assert_eq!(
        field_names(ConversionOptions::new()),
        ["id", "name", "email", "password"]
    );
}

#[test]
fn excluded_fields_are_dropped() {
    assert_eq!(
        field_names(ConversionOptions::new().exclude_fields(["password", "email"])),
        ["id", "name"]
    );
}

#[test]
fn extra_fields_come_after_model_fields() {
    let options = ConversionOptions::new()
        .extra_field("full_name", Scalar::String)
        .extra_field("age", gql::Field::new(Scalar::Int).with_required(true));

    let ty = convert(options).unwrap();
    assert_eq!(
        ty.field_names().collect::<Vec<_>>(),
        ["id", "name", "email", "password", "full_name", "age"]
    );
    assert_eq!(ty.field("age").unwrap().output_ty().to_string(), "Int!");
}

#[test]
fn extra_fields_replace_model_fields() {
    let options = ConversionOptions::new().extra_field("name", Scalar::Int);
    let ty = convert(options).unwrap();

    assert_eq!(
        ty.field_names().collect::<Vec<_>>(),
        ["id", "email", "password", "name"]
    );
    assert_eq!(ty.field("name").unwrap().output_ty().to_string(), "Int");
}

#[test]
fn extra_fields_win_over_exclusion() {
    let options = ConversionOptions::new()
        .extra_field("password", Scalar::Boolean)
        .exclude_field("password");

    let ty = convert(options).unwrap();
    assert_eq!(ty.field("password").unwrap().ty, TypeRef::from(Scalar::Boolean));
}

#[test]
fn id_field_is_appended_last() {
    let options = ConversionOptions::new()
        .id_field_name("uid")
        .extra_field("full_name", Scalar::String);

    let ty = convert(options).unwrap();
    assert_eq!(
        ty.field_names().collect::<Vec<_>>(),
        ["id", "name", "email", "password", "full_name", "uid"]
    );
    assert_eq!(ty.field("uid").unwrap().output_ty().to_string(), "ID!");
}

#[test]
fn id_field_replaces_a_model_field() {
    let ty = convert(ConversionOptions::new().id_field_name("id")).unwrap();

    assert_eq!(
        ty.field_names().collect::<Vec<_>>(),
        ["name", "email", "password", "id"]
    );
    assert_eq!(ty.field("id").unwrap().output_ty().to_string(), "ID!");
}

#[test]
fn class_name_overrides_the_generated_name() {
    let ty = convert(
        ConversionOptions::new()
            .class_name("Account")
            .exclude_fields(["email", "password"]),
    )
    .unwrap();

    assert_eq!(
        sdl::print(&ty),
        "type Account {\n  id: Int!\n  name: String!\n}\n"
    );
}

#[test]
fn plain_extra_values_are_rejected() {
    let options = ConversionOptions::new().extra_field("full_name", Value::from("Mr Bob"));
    let err = convert(options).unwrap_err();

    assert!(err.is_invalid_type());
    assert_eq!(err.field_name(), Some("full_name"));
}
