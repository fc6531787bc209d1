use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Name reported to the converter
    pub(crate) name: String,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let model_attr = ModelAttr::from_ast(&ast.attrs)?;

        if model_attr.rename_all.is_some() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`rename_all` is only supported on enums",
            ));
        }

        let nodes: Vec<&syn::Field> = match &ast.fields {
            syn::Fields::Named(node) => node.named.iter().collect(),
            syn::Fields::Unit => vec![],
            syn::Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.fields,
                    "model fields must be named",
                ))
            }
        };

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for node in nodes {
            match Field::from_ast(node) {
                Ok(Some(field)) => {
                    if fields.iter().any(|f: &Field| f.name == field.name) {
                        errs.push(syn::Error::new_spanned(
                            node,
                            format!("duplicate field name `{}`", field.name),
                        ));
                    }

                    fields.push(field);
                }
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        errs.finish(Self {
            name: model_attr
                .name
                .map(|lit| lit.value())
                .unwrap_or_else(|| ast.ident.to_string()),
            ident: ast.ident.clone(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_attributes() {
        let item: syn::ItemStruct = syn::parse_quote! {
            #[model(name = "Person")]
            struct Human {
                name: String,
                #[model(rename = "birthDate")]
                birth_date: String,
                #[model(default = true)]
                active: bool,
                #[model(skip)]
                cache: Vec<u8>,
            }
        };

        let model = Model::from_ast(&item).unwrap();
        assert_eq!(model.name, "Person");

        let names: Vec<_> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "birthDate", "active"]);
        assert!(model.fields[2].default.is_some());
    }

    #[test]
    fn rejects_tuple_structs() {
        let item: syn::ItemStruct = syn::parse_quote! {
            struct Pair(String, String);
        };

        let err = Model::from_ast(&item).unwrap_err();
        assert_eq!(err.to_string(), "model fields must be named");
    }

    #[test]
    fn rejects_renames_onto_existing_fields() {
        let item: syn::ItemStruct = syn::parse_quote! {
            struct Pet {
                name: String,
                #[model(rename = "name")]
                nickname: String,
            }
        };

        assert!(Model::from_ast(&item).is_err());
    }

    #[test]
    fn unit_structs_have_no_fields() {
        let item: syn::ItemStruct = syn::parse_quote! {
            struct Empty;
        };

        assert!(Model::from_ast(&item).unwrap().fields.is_empty());
    }
}
