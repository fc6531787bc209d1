use super::Field;
use indexmap::IndexMap;

/// Which category of GraphQL type to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    /// `type`
    #[default]
    Object,

    /// `input`
    InputObject,

    /// `interface`
    Interface,
}

/// A named GraphQL type with an ordered set of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub kind: Kind,

    /// Fields in emission order.
    pub fields: IndexMap<String, Field>,
}

impl Kind {
    /// Suffix appended to a model name when no explicit name is given.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Object => "Gql",
            Self::InputObject => "InputGql",
            Self::Interface => "InterfaceGql",
        }
    }

    /// The SDL keyword introducing a definition of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Object => "type",
            Self::InputObject => "input",
            Self::Interface => "interface",
        }
    }

    pub fn is_input(self) -> bool {
        matches!(self, Self::InputObject)
    }
}

impl ObjectType {
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: IndexMap::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }
}
