use modelgql_core::{
    schema::{
        gql::Scalar,
        source::{Primitive, Type},
    },
    Capability,
};
use std::collections::HashMap;

/// Maps source primitives to GraphQL scalars.
///
/// Optional scalars missing from the capability are left out, so fields of
/// those types are reported as not supported.
#[derive(Debug, Clone)]
pub struct ScalarTable {
    map: HashMap<Primitive, Scalar>,
}

const ENTRIES: &[(Primitive, Scalar)] = {
    use Primitive::*;

    &[
        (Str, Scalar::String),
        (Bytes, Scalar::String),
        (Pattern, Scalar::String),
        (EmailStr, Scalar::String),
        (NameEmail, Scalar::String),
        (SecretStr, Scalar::String),
        (SecretBytes, Scalar::String),
        (AnyUrl, Scalar::String),
        (HttpUrl, Scalar::String),
        (FilePath, Scalar::String),
        (DirectoryPath, Scalar::String),
        (Path, Scalar::String),
        (ConStr, Scalar::String),
        (ConBytes, Scalar::String),
        (StrictStr, Scalar::String),
        (Ipv4Address, Scalar::String),
        (Ipv4Interface, Scalar::String),
        (Ipv4Network, Scalar::String),
        (Ipv6Address, Scalar::String),
        (Ipv6Interface, Scalar::String),
        (Ipv6Network, Scalar::String),
        (IpvAnyAddress, Scalar::String),
        (IpvAnyInterface, Scalar::String),
        (IpvAnyNetwork, Scalar::String),
        (Bool, Scalar::Boolean),
        (StrictBool, Scalar::Boolean),
        (Float, Scalar::Float),
        (ConFloat, Scalar::Float),
        (PositiveFloat, Scalar::Float),
        (NegativeFloat, Scalar::Float),
        (StrictFloat, Scalar::Float),
        (Int, Scalar::Int),
        (ConInt, Scalar::Int),
        (PositiveInt, Scalar::Int),
        (NegativeInt, Scalar::Int),
        (StrictInt, Scalar::Int),
        (DateTime, Scalar::DateTime),
        (Date, Scalar::Date),
        (Time, Scalar::Time),
        (Decimal, Scalar::Decimal),
        (ConDecimal, Scalar::Decimal),
        (Uuid, Scalar::Uuid),
        (Uuid1, Scalar::Uuid),
        (Uuid3, Scalar::Uuid),
        (Uuid4, Scalar::Uuid),
        (Uuid5, Scalar::Uuid),
        (Json, Scalar::JsonString),
    ]
};

impl ScalarTable {
    pub fn new(cap: &Capability) -> Self {
        let map = ENTRIES
            .iter()
            .filter(|(_, scalar)| cap.scalars.supports(*scalar))
            .copied()
            .collect();

        Self { map }
    }

    /// Looks up the scalar for a type. Classes resolve to their first
    /// ancestor with a scalar.
    pub fn get(&self, ty: &Type) -> Option<Scalar> {
        match ty {
            Type::Primitive(primitive) => self.map.get(primitive).copied(),
            Type::Class(class) => class.mro().into_iter().find_map(|ancestor| match ancestor {
                Type::Primitive(primitive) => self.map.get(primitive).copied(),
                _ => None,
            }),
            _ => None,
        }
    }

    pub fn contains(&self, primitive: Primitive) -> bool {
        self.map.contains_key(&primitive)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
