use crate::FieldType;
use modelgql_core::schema::source::{Descriptor, Primitive};

impl FieldType for chrono::NaiveDate {
    fn descriptor() -> Descriptor {
        Descriptor::singleton(Primitive::Date)
    }
}

impl FieldType for chrono::NaiveDateTime {
    fn descriptor() -> Descriptor {
        Descriptor::singleton(Primitive::DateTime)
    }
}

impl<Tz: chrono::TimeZone> FieldType for chrono::DateTime<Tz> {
    fn descriptor() -> Descriptor {
        Descriptor::singleton(Primitive::DateTime)
    }
}

impl FieldType for chrono::NaiveTime {
    fn descriptor() -> Descriptor {
        Descriptor::singleton(Primitive::Time)
    }
}

impl FieldType for chrono::TimeDelta {
    fn descriptor() -> Descriptor {
        Descriptor::singleton(Primitive::TimeDelta)
    }
}
