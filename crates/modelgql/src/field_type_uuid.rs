use crate::FieldType;
use modelgql_core::schema::source::{Descriptor, Primitive};

impl FieldType for uuid::Uuid {
    fn descriptor() -> Descriptor {
        Descriptor::singleton(Primitive::Uuid)
    }
}
