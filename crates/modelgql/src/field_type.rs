use modelgql_core::{
    schema::source::{Container, Descriptor, Primitive, Shape},
    Value,
};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    path::PathBuf,
    rc::Rc,
    sync::Arc,
    time::Duration,
};

/// A Rust type that can be used as the type of a model field.
///
/// The descriptor reports the type as the source framework would: its
/// element type, container shape and nullability.
pub trait FieldType {
    fn descriptor() -> Descriptor;
}

macro_rules! impl_primitive {
    ($($ty:ty => $primitive:ident,)*) => {
        $(
            impl FieldType for $ty {
                fn descriptor() -> Descriptor {
                    Descriptor::singleton(Primitive::$primitive)
                }
            }
        )*
    };
}

impl_primitive! {
    String => Str,
    &'static str => Str,
    char => Str,
    bool => Bool,
    f32 => Float,
    f64 => Float,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    i128 => Int,
    isize => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    u64 => Int,
    u128 => Int,
    usize => Int,
    Ipv4Addr => Ipv4Address,
    Ipv6Addr => Ipv6Address,
    IpAddr => IpvAnyAddress,
    PathBuf => Path,
    Duration => TimeDelta,
    Value => Json,
}

impl<T: FieldType> FieldType for Option<T> {
    fn descriptor() -> Descriptor {
        T::descriptor().nullable()
    }
}

impl<T: FieldType> FieldType for Box<T> {
    fn descriptor() -> Descriptor {
        T::descriptor()
    }
}

impl<T: FieldType> FieldType for Arc<T> {
    fn descriptor() -> Descriptor {
        T::descriptor()
    }
}

impl<T: FieldType> FieldType for Rc<T> {
    fn descriptor() -> Descriptor {
        T::descriptor()
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn descriptor() -> Descriptor {
        Descriptor::container(Shape::List, Container::List, [T::descriptor()])
    }
}

impl<T: FieldType, const N: usize> FieldType for [T; N] {
    fn descriptor() -> Descriptor {
        Descriptor::container(Shape::TupleEllipsis, Container::Tuple, [T::descriptor()])
    }
}

impl<T: FieldType> FieldType for VecDeque<T> {
    fn descriptor() -> Descriptor {
        Descriptor::container(Shape::Sequence, Container::Sequence, [T::descriptor()])
    }
}

impl<T: FieldType> FieldType for LinkedList<T> {
    fn descriptor() -> Descriptor {
        Descriptor::container(Shape::Sequence, Container::Sequence, [T::descriptor()])
    }
}

impl<T: FieldType, S> FieldType for HashSet<T, S> {
    fn descriptor() -> Descriptor {
        Descriptor::container(Shape::Set, Container::Set, [T::descriptor()])
    }
}

impl<T: FieldType> FieldType for BTreeSet<T> {
    fn descriptor() -> Descriptor {
        Descriptor::container(Shape::Set, Container::Set, [T::descriptor()])
    }
}

impl<K: FieldType, V: FieldType, S> FieldType for HashMap<K, V, S> {
    fn descriptor() -> Descriptor {
        Descriptor::container(
            Shape::Mapping,
            Container::Dict,
            [K::descriptor(), V::descriptor()],
        )
    }
}

impl<K: FieldType, V: FieldType> FieldType for BTreeMap<K, V> {
    fn descriptor() -> Descriptor {
        Descriptor::container(
            Shape::Mapping,
            Container::Dict,
            [K::descriptor(), V::descriptor()],
        )
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: FieldType),+> FieldType for ($($name,)+) {
            fn descriptor() -> Descriptor {
                Descriptor::container(
                    Shape::Tuple,
                    Container::Tuple,
                    [$($name::descriptor()),+],
                )
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;
    use modelgql_core::schema::source::Type;

    #[test]
    fn option_is_nullable() {
        let descriptor = <Option<i64>>::descriptor();
        assert!(descriptor.nullable);
        assert_eq!(descriptor.ty, Type::Primitive(Primitive::Int));
    }

    #[test]
    fn vec_of_options_has_nullable_items() {
        let descriptor = <Vec<Option<String>>>::descriptor();
        assert_eq!(descriptor.shape, Shape::List);
        assert!(!descriptor.nullable);
        assert!(descriptor.item_nullable);
        assert_eq!(descriptor.ty.args(), &[Type::Primitive(Primitive::Str)]);
    }

    #[test]
    fn maps_keep_both_arguments() {
        let descriptor = <HashMap<String, i32>>::descriptor();
        assert_eq!(descriptor.shape, Shape::Mapping);
        assert_eq!(descriptor.ty.args().len(), 2);
    }

    #[test]
    fn tuples_report_every_element() {
        let descriptor = <(String, i64, bool)>::descriptor();
        assert_eq!(descriptor.shape, Shape::Tuple);
        assert_eq!(
            descriptor.ty.args(),
            &[
                Type::Primitive(Primitive::Str),
                Type::Primitive(Primitive::Int),
                Type::Primitive(Primitive::Bool),
            ]
        );
    }
}
