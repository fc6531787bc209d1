use modelgql::{
    source::{Field, ModelRef, Primitive},
    ConversionOptions, Context, Kind, Model,
};
use std::{sync::Arc, thread};

#[derive(Model)]
#[allow(dead_code)]
struct Human {
    name: String,
}

#[test]
fn same_model_and_kind_return_the_same_type() {
    let cx = Context::new();
    let a = cx.convert::<Human>(Kind::Object).unwrap();
    let b = cx.convert::<Human>(Kind::Object).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn kinds_are_cached_separately() {
    let cx = Context::new();
    let object = cx.convert::<Human>(Kind::Object).unwrap();
    let input = cx.convert::<Human>(Kind::InputObject).unwrap();

    assert!(!Arc::ptr_eq(&object, &input));
    assert_eq!(input.name, "HumanInputGql");
}

#[test]
fn instances_share_the_type_cache() {
    let cx = Context::new();
    let human = Human {
        name: "Bob".to_string(),
    };

    let from_instance = cx
        .convert_model(&human, Kind::Object, &ConversionOptions::default())
        .unwrap();
    let from_type = cx.convert::<Human>(Kind::Object).unwrap();

    assert!(Arc::ptr_eq(&from_instance, &from_type));
}

#[test]
fn use_cache_false_builds_a_new_type() {
    let cx = Context::new();
    let cached = cx.convert::<Human>(Kind::Object).unwrap();

    let fresh = cx
        .convert_model(
            Human::model_ref(),
            Kind::Object,
            &ConversionOptions::new().use_cache(false),
        )
        .unwrap();

    assert!(!Arc::ptr_eq(&cached, &fresh));
    assert_eq!(*cached, *fresh);

    // The fresh type replaces the cached one
    let again = cx.convert::<Human>(Kind::Object).unwrap();
    assert!(Arc::ptr_eq(&fresh, &again));
}

#[test]
fn clear_cache_forgets_converted_types() {
    let cx = Context::new();
    let before = cx.convert::<Human>(Kind::Object).unwrap();
    assert!(cx.cached(Human::model_ref(), Kind::Object).is_some());

    cx.clear_cache();
    assert!(cx.cached(Human::model_ref(), Kind::Object).is_none());

    let after = cx.convert::<Human>(Kind::Object).unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}

#[test]
fn dynamic_models_are_cached_by_identity() {
    let cx = Context::new();
    let fields = [Field::new("name", Primitive::Str)];
    let a = ModelRef::dynamic("Fake", fields.clone());
    let b = ModelRef::dynamic("Fake", fields);

    let ty_a = cx.convert_model(&a, Kind::Object, &Default::default()).unwrap();
    let ty_b = cx.convert_model(&b, Kind::Object, &Default::default()).unwrap();

    assert!(!Arc::ptr_eq(&ty_a, &ty_b));
    assert_eq!(ty_a.name, ty_b.name);
}

#[test]
fn contexts_are_isolated() {
    let a = Context::new().convert::<Human>(Kind::Object).unwrap();
    let b = Context::new().convert::<Human>(Kind::Object).unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn concurrent_conversions_agree() {
    let cx = Arc::new(Context::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cx = cx.clone();
            thread::spawn(move || cx.convert::<Human>(Kind::Object).unwrap())
        })
        .collect();

    let types: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    for ty in &types[1..] {
        assert!(Arc::ptr_eq(&types[0], ty));
    }
}

#[test]
fn global_context_backs_the_top_level_api() {
    #[derive(Model)]
    #[allow(dead_code)]
    struct GlobalOnly {
        value: bool,
    }

    let a = modelgql::to_graphql::<GlobalOnly>(Kind::Object).unwrap();
    let b = Context::global().convert::<GlobalOnly>(Kind::Object).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
}
