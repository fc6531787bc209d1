use super::ErrorSet;
use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Container attributes: `#[model(name = "...", rename_all = "...")]`.
#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Overrides the model or enum name
    pub(crate) name: Option<syn::LitStr>,

    /// Case applied to enum member names. Only valid on enums.
    pub(crate) rename_all: Option<RenameRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    SnakeCase,
    ScreamingSnakeCase,
    CamelCase,
    PascalCase,
}

impl ModelAttr {
    pub(crate) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();
        let mut model_attr = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("model") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if model_attr.name.is_some() {
                        errs.push(syn::Error::new_spanned(&lit, "duplicate `name` attribute"));
                    } else {
                        model_attr.name = Some(lit);
                    }
                } else if meta.path.is_ident("rename_all") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    let rule = RenameRule::from_lit(&lit)?;

                    if model_attr.rename_all.is_some() {
                        errs.push(syn::Error::new_spanned(
                            &lit,
                            "duplicate `rename_all` attribute",
                        ));
                    } else {
                        model_attr.rename_all = Some(rule);
                    }
                } else {
                    return Err(meta.error("expected `name` or `rename_all`"));
                }

                Ok(())
            })?;
        }

        errs.finish(model_attr)
    }
}

impl RenameRule {
    fn from_lit(lit: &syn::LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "snake_case" => Self::SnakeCase,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnakeCase,
            "camelCase" => Self::CamelCase,
            "PascalCase" => Self::PascalCase,
            _ => {
                return Err(syn::Error::new_spanned(
                    lit,
                    "unknown rename rule, expected one of `lowercase`, `UPPERCASE`, \
                     `snake_case`, `SCREAMING_SNAKE_CASE`, `camelCase`, `PascalCase`",
                ))
            }
        })
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::SnakeCase => name.to_snake_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
            Self::CamelCase => name.to_lower_camel_case(),
            Self::PascalCase => name.to_upper_camel_case(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_rules() {
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("GoldenRetriever"), "GOLDEN_RETRIEVER");
        assert_eq!(RenameRule::SnakeCase.apply("GoldenRetriever"), "golden_retriever");
        assert_eq!(RenameRule::CamelCase.apply("GoldenRetriever"), "goldenRetriever");
        assert_eq!(RenameRule::Upper.apply("Dog"), "DOG");
    }

    #[test]
    fn parses_name_and_rename_all() {
        let item: syn::ItemEnum = syn::parse_quote! {
            #[model(name = "Specie", rename_all = "SCREAMING_SNAKE_CASE")]
            enum Kind { Dog }
        };

        let attr = ModelAttr::from_ast(&item.attrs).unwrap();
        assert_eq!(attr.name.unwrap().value(), "Specie");
        assert_eq!(attr.rename_all, Some(RenameRule::ScreamingSnakeCase));
    }

    #[test]
    fn rejects_unknown_keys() {
        let item: syn::ItemStruct = syn::parse_quote! {
            #[model(table = "users")]
            struct User { name: String }
        };

        assert!(ModelAttr::from_ast(&item.attrs).is_err());
    }
}
