use super::Type;

/// A user-defined type deriving from one or more other types.
///
/// Classes resolve to the scalar of their first supported ancestor, so a
/// custom string type converts to `String`.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,

    /// Direct ancestors, in declaration order.
    pub bases: Vec<Type>,
}

impl Class {
    pub fn new(name: impl Into<String>, bases: impl IntoIterator<Item = Type>) -> Self {
        Self {
            name: name.into(),
            bases: bases.into_iter().collect(),
        }
    }

    /// Ancestors in resolution order: depth first, left to right, each
    /// ancestor listed once.
    pub fn mro(&self) -> Vec<&Type> {
        let mut out = vec![];
        self.collect_ancestors(&mut out);
        out
    }

    fn collect_ancestors<'a>(&'a self, out: &mut Vec<&'a Type>) {
        for base in &self.bases {
            if !out.contains(&base) {
                out.push(base);
            }

            if let Type::Class(class) = base {
                class.collect_ancestors(out);
            }
        }
    }
}
