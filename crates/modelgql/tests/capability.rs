use modelgql::{
    gql::{Scalar, TypeRef},
    source::{Field, ModelRef, Primitive},
    Capability, Context, Kind,
};

fn convert(cx: &Context, primitive: Primitive) -> modelgql::Result<TypeRef> {
    cx.convert_field(&Field::new("value", primitive), Kind::Object)
        .map(|field| field.ty)
}

#[test]
fn legacy_servers_reject_date_and_time() {
    let cx = Context::with_capability(Capability::LEGACY);

    for primitive in [
        Primitive::Date,
        Primitive::Time,
        Primitive::Decimal,
        Primitive::Uuid,
    ] {
        let err = convert(&cx, primitive).unwrap_err();
        assert!(err.is_field_not_supported(), "{primitive:?}");
        assert!(!err.is_invalid_list_type(), "{primitive:?}");
    }

    assert_eq!(
        convert(&cx, Primitive::DateTime).unwrap(),
        TypeRef::from(Scalar::DateTime)
    );
}

#[test]
fn basic_servers_only_have_builtin_scalars() {
    let cx = Context::with_capability(Capability::BASIC);

    assert!(convert(&cx, Primitive::DateTime).is_err());
    assert!(convert(&cx, Primitive::Json).is_err());
    assert_eq!(
        convert(&cx, Primitive::Str).unwrap(),
        TypeRef::from(Scalar::String)
    );
}

#[test]
fn changing_the_capability_drops_cached_types() {
    let cx = Context::new();
    let model = ModelRef::dynamic("Event", [Field::new("on", Primitive::Date)]);

    assert!(cx
        .convert_model(&model, Kind::Object, &Default::default())
        .is_ok());

    cx.set_capability(Capability::LEGACY);
    assert!(cx.cached(&model, Kind::Object).is_none());

    let err = cx
        .convert_model(&model, Kind::Object, &Default::default())
        .unwrap_err();
    assert_eq!(err.field_name(), Some("on"));
}
