use modelgql::{gql::TypeRef, sdl, ConversionOptions, Context, Kind, Model};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[derive(Model)]
#[allow(dead_code)]
struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

#[derive(Model)]
#[allow(dead_code)]
struct Author {
    name: String,
    books: Vec<Book>,
}

#[derive(Model)]
#[allow(dead_code)]
struct Book {
    title: String,
    author: Option<Box<Author>>,
}

fn object_target(ty: &TypeRef) -> Arc<modelgql::ObjectType> {
    match ty.leaf() {
        TypeRef::Object(object) => object.get().expect("reference resolved"),
        other => panic!("expected an object reference, got {other:?}"),
    }
}

#[test]
fn self_reference() {
    let cx = Context::new();
    let node = cx.convert::<Node>(Kind::Object).unwrap();

    assert_eq!(
        sdl::print(&node),
        "type NodeGql {\n  value: Int!\n  next: NodeGql\n}\n"
    );

    let next = object_target(&node.field("next").unwrap().ty);
    assert!(Arc::ptr_eq(&next, &node));
}

#[test]
fn mutual_reference() {
    let cx = Context::new();
    let author = cx.convert::<Author>(Kind::Object).unwrap();

    assert_eq!(
        sdl::print(&author),
        "type AuthorGql {\n  name: String!\n  books: [BookGql!]!\n}\n\
         \n\
         type BookGql {\n  title: String!\n  author: AuthorGql\n}\n"
    );

    let book = object_target(&author.field("books").unwrap().ty);
    let back = object_target(&book.field("author").unwrap().ty);
    assert!(Arc::ptr_eq(&back, &author));

    // The nested conversion is cached too
    let direct = cx.convert::<Book>(Kind::Object).unwrap();
    assert!(Arc::ptr_eq(&direct, &book));
}

#[test]
fn cycles_in_input_types() {
    let cx = Context::new();
    let node = cx.convert::<Node>(Kind::InputObject).unwrap();

    assert_eq!(
        sdl::print(&node),
        "input NodeInputGql {\n  value: Int!\n  next: NodeInputGql\n}\n"
    );
}

#[test]
fn interface_cycles_go_through_objects() {
    let cx = Context::new();
    let node = cx.convert::<Node>(Kind::Interface).unwrap();

    assert_eq!(
        sdl::print(&node),
        "interface NodeInterfaceGql {\n  value: Int!\n  next: NodeGql\n}\n\
         \n\
         type NodeGql {\n  value: Int!\n  next: NodeGql\n}\n"
    );
}

#[test]
fn cyclic_types_are_freed_with_the_cache() {
    let cx = Context::new();
    let node = cx.convert::<Node>(Kind::Object).unwrap();
    let weak = Arc::downgrade(&node);

    cx.clear_cache();
    drop(node);
    assert!(weak.upgrade().is_none());
}

#[test]
fn mutually_referencing_types_are_freed_with_the_cache() {
    let cx = Context::new();
    let author = cx.convert::<Author>(Kind::Object).unwrap();
    let book = Arc::downgrade(&object_target(&author.field("books").unwrap().ty));
    let author_weak = Arc::downgrade(&author);

    cx.clear_cache();
    drop(author);
    assert!(author_weak.upgrade().is_none());
    assert!(book.upgrade().is_none());
}

#[test]
fn uncached_rebuilds_do_not_accumulate() {
    let cx = Context::new();
    let options = ConversionOptions::new().use_cache(false);

    let rebuilt: Vec<_> = (0..10)
        .map(|_| {
            let node = cx.convert_model(Node::model_ref(), Kind::Object, &options).unwrap();
            Arc::downgrade(&node)
        })
        .collect();

    // Only the latest rebuild is still owned, by the cache
    let alive = rebuilt.iter().filter(|weak| weak.upgrade().is_some()).count();
    assert_eq!(alive, 1);

    drop(cx);
    assert!(rebuilt.iter().all(|weak| weak.upgrade().is_none()));
}

#[test]
fn back_reference_does_not_keep_its_target_alive() {
    let cx = Context::new();
    let author = cx.convert::<Author>(Kind::Object).unwrap();
    let book = object_target(&author.field("books").unwrap().ty);

    cx.clear_cache();
    drop(author);

    // The back-edge keeps its name but no longer resolves
    let back = &book.field("author").unwrap().ty;
    assert_eq!(back.to_string(), "AuthorGql");
    match back.leaf() {
        TypeRef::Object(object) => assert!(object.get().is_none()),
        other => panic!("expected an object reference, got {other:?}"),
    }
}
