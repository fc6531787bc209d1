use crate::schema::{gql::Scalar, source::Shape};

/// Features available on both sides of a conversion.
///
/// Optional GraphQL scalars and optional source shapes differ between the
/// frameworks a schema is served or declared with. They are resolved once
/// when a conversion context is built instead of being probed at every call
/// site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capability {
    /// Scalars the GraphQL server understands, beyond the built-in ones.
    pub scalars: Scalars,

    /// Container shapes the source framework can declare.
    pub shapes: Shapes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scalars {
    pub date: bool,
    pub date_time: bool,
    pub time: bool,
    pub decimal: bool,
    pub uuid: bool,
    pub json_string: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shapes {
    /// Iterable fields are converted as lists.
    pub iterable: bool,

    /// `dict`-like shapes are rejected alongside plain mappings.
    pub dict: bool,

    pub default_dict: bool,

    pub counter: bool,
}

impl Capability {
    /// Every optional scalar and shape is available.
    pub const LATEST: Self = Self {
        scalars: Scalars::LATEST,
        shapes: Shapes::LATEST,
    };

    /// Servers predating the date, time, decimal and UUID scalars.
    pub const LEGACY: Self = Self {
        scalars: Scalars::LEGACY,
        ..Self::LATEST
    };

    /// Only the scalars every GraphQL server must provide.
    pub const BASIC: Self = Self {
        scalars: Scalars::BASIC,
        shapes: Shapes::BASIC,
    };

    /// Returns `true` if `shape` exists in the source framework.
    pub fn has_shape(&self, shape: Shape) -> bool {
        match shape {
            Shape::Iterable => self.shapes.iterable,
            Shape::Dict => self.shapes.dict,
            Shape::DefaultDict => self.shapes.default_dict,
            Shape::Counter => self.shapes.counter,
            _ => true,
        }
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::LATEST
    }
}

impl Scalars {
    pub const LATEST: Scalars = Scalars {
        date: true,
        date_time: true,
        time: true,
        decimal: true,
        uuid: true,
        json_string: true,
    };

    pub const LEGACY: Scalars = Scalars {
        date: false,
        date_time: true,
        time: false,
        decimal: false,
        uuid: false,
        json_string: true,
    };

    pub const BASIC: Scalars = Scalars {
        date: false,
        date_time: false,
        time: false,
        decimal: false,
        uuid: false,
        json_string: false,
    };

    /// Returns `true` if the scalar can be used in a GraphQL schema.
    pub fn supports(&self, scalar: Scalar) -> bool {
        match scalar {
            Scalar::String | Scalar::Int | Scalar::Float | Scalar::Boolean | Scalar::Id => true,
            Scalar::Date => self.date,
            Scalar::DateTime => self.date_time,
            Scalar::Time => self.time,
            Scalar::Decimal => self.decimal,
            Scalar::Uuid => self.uuid,
            Scalar::JsonString => self.json_string,
        }
    }
}

impl Shapes {
    pub const LATEST: Shapes = Shapes {
        iterable: true,
        dict: true,
        default_dict: true,
        counter: true,
    };

    pub const BASIC: Shapes = Shapes {
        iterable: false,
        dict: false,
        default_dict: false,
        counter: false,
    };
}
