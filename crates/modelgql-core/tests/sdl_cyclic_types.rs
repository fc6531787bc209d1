use modelgql_core::schema::gql::{sdl, Field, Kind, ObjectRef, ObjectType, Scalar, TypeRef};
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// Schema:
///   Node { value: Int!, next: NodeGql }
fn self_referencing_node() -> Arc<ObjectType> {
    let pending = ObjectRef::pending("NodeGql");

    let mut node = ObjectType::new("NodeGql", Kind::Object);
    node.fields.insert(
        "value".to_string(),
        Field::new(Scalar::Int).with_required(true),
    );
    node.fields
        .insert("next".to_string(), Field::new(pending.clone()));

    let node = Arc::new(node);
    assert!(pending.resolve(&node));
    node
}

#[test]
fn cyclic_type_is_printed_once() {
    let node = self_referencing_node();

    assert_eq!(
        sdl::print(&node),
        "type NodeGql {\n  value: Int!\n  next: NodeGql\n}\n"
    );
}

#[test]
fn cyclic_type_debug_terminates() {
    let node = self_referencing_node();
    let debug = format!("{node:?}");
    assert!(debug.contains("NodeGql"));
}

#[test]
fn unresolved_reference_prints_name_only() {
    let mut ty = ObjectType::new("HolderGql", Kind::Object);
    ty.fields.insert(
        "item".to_string(),
        Field::new(TypeRef::list(ObjectRef::pending("ItemGql"))).with_required(true),
    );

    assert_eq!(sdl::print(&ty), "type HolderGql {\n  item: [ItemGql]!\n}\n");
}
