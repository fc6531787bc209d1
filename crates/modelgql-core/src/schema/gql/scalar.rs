use std::fmt;

/// GraphQL scalar types.
///
/// The first five are built into every GraphQL server; the rest are custom
/// scalars that may be missing, see [`Scalars`](crate::Scalars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    String,
    Int,
    Float,
    Boolean,
    Id,
    Date,
    DateTime,
    Time,
    Decimal,
    Uuid,
    JsonString,
}

impl Scalar {
    /// The scalar's name in SDL.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Id => "ID",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
            Self::Decimal => "Decimal",
            Self::Uuid => "UUID",
            Self::JsonString => "JSONString",
        }
    }

    /// Returns `true` for scalars defined by the GraphQL specification.
    pub fn is_builtin(self) -> bool {
        matches!(
            self,
            Self::String | Self::Int | Self::Float | Self::Boolean | Self::Id
        )
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
