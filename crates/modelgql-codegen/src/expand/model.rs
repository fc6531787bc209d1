use super::{default, wrap_in_const};
use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn model(model: &Model) -> TokenStream {
    let ident = &model.ident;
    let name = &model.name;

    let fields = model.fields.iter().map(|field| {
        let name = &field.name;
        let ty = &field.ty;
        let default = match &field.default {
            Some(expr) => {
                let value = default::value(expr);
                quote!(#value)
            }
            None => quote!(None),
        };

        quote! {
            _modelgql::codegen_support::Field::from_descriptor(
                #name,
                <#ty as _modelgql::codegen_support::FieldType>::descriptor(),
                #default,
            )
        }
    });

    wrap_in_const(quote! {
        impl _modelgql::codegen_support::Model for #ident {
            fn model_name() -> String {
                #name.to_string()
            }

            fn model_fields() -> Vec<_modelgql::codegen_support::Field> {
                vec![#(#fields),*]
            }
        }

        impl _modelgql::codegen_support::FieldType for #ident {
            fn descriptor() -> _modelgql::codegen_support::Descriptor {
                _modelgql::codegen_support::Descriptor::singleton(<Self as _modelgql::codegen_support::Model>::model_ref())
            }
        }
    })
}
