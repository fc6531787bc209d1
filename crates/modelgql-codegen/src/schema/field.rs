use super::ErrorSet;

/// A struct field that becomes a model field.
#[derive(Debug)]
pub(crate) struct Field {
    /// Name reported to the converter
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Expression to use as default value: `#[model(default = <expr>)]`
    pub(crate) default: Option<syn::Expr>,
}

#[derive(Debug, Default)]
struct FieldAttr {
    rename: Option<syn::LitStr>,
    default: Option<syn::Expr>,
    skip: bool,
}

impl Field {
    /// Returns `None` for fields marked `#[model(skip)]`.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("model") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if attrs.rename.is_some() {
                        errs.push(syn::Error::new_spanned(&lit, "duplicate `rename` attribute"));
                    } else {
                        attrs.rename = Some(lit);
                    }
                } else if meta.path.is_ident("default") {
                    let expr: syn::Expr = meta.value()?.parse()?;

                    if attrs.default.is_some() {
                        errs.push(syn::Error::new_spanned(&expr, "duplicate `default` attribute"));
                    } else {
                        attrs.default = Some(expr);
                    }
                } else if meta.path.is_ident("skip") {
                    if attrs.skip {
                        errs.push(meta.error("duplicate `skip` attribute"));
                    }
                    attrs.skip = true;
                } else {
                    return Err(meta.error("expected `rename`, `default` or `skip`"));
                }

                Ok(())
            })?;
        }

        if attrs.skip && (attrs.rename.is_some() || attrs.default.is_some()) {
            errs.push(syn::Error::new_spanned(
                field,
                "`skip` cannot be combined with other field attributes",
            ));
        }

        errs.finish(())?;

        if attrs.skip {
            return Ok(None);
        }

        let name = match attrs.rename {
            Some(lit) => lit.value(),
            None => ident.to_string(),
        };

        Ok(Some(Self {
            name,
            ty: field.ty.clone(),
            default: attrs.default,
        }))
    }
}
