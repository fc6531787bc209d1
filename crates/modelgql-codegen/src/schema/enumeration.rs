use super::{ErrorSet, ModelAttr};

#[derive(Debug)]
pub(crate) struct Enumeration {
    /// Name reported to the converter
    pub(crate) name: String,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    pub(crate) members: Vec<Member>,
}

#[derive(Debug)]
pub(crate) struct Member {
    /// Rust identifier for this variant
    pub(crate) ident: syn::Ident,

    /// Member name as it appears in the GraphQL enum
    pub(crate) name: String,
}

impl Enumeration {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        let model_attr = ModelAttr::from_ast(&ast.attrs)?;
        let mut members: Vec<Member> = vec![];
        let mut errs = ErrorSet::new();

        for variant in &ast.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    "enum variants must not carry fields",
                ));
                continue;
            }

            let rename = match variant_rename(variant) {
                Ok(rename) => rename,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            let name = match (rename, model_attr.rename_all) {
                (Some(lit), _) => lit.value(),
                (None, Some(rule)) => rule.apply(&variant.ident.to_string()),
                (None, None) => variant.ident.to_string(),
            };

            if members.iter().any(|member| member.name == name) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    format!("duplicate member name `{name}`"),
                ));
            }

            members.push(Member {
                ident: variant.ident.clone(),
                name,
            });
        }

        errs.finish(Self {
            name: model_attr
                .name
                .map(|lit| lit.value())
                .unwrap_or_else(|| ast.ident.to_string()),
            ident: ast.ident.clone(),
            members,
        })
    }
}

fn variant_rename(variant: &syn::Variant) -> syn::Result<Option<syn::LitStr>> {
    let mut rename: Option<syn::LitStr> = None;

    for attr in &variant.attrs {
        if !attr.path().is_ident("model") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if rename.is_some() {
                    return Err(meta.error("duplicate `rename` attribute"));
                }

                rename = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `rename`"))
            }
        })?;
    }

    Ok(rename)
}
