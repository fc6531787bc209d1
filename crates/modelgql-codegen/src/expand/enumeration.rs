use super::wrap_in_const;
use crate::schema::Enumeration;

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn enumeration(enumeration: &Enumeration) -> TokenStream {
    let ident = &enumeration.ident;
    let name = &enumeration.name;

    let members = enumeration.members.iter().map(|member| {
        let variant = &member.ident;
        let name = &member.name;

        quote! {
            _modelgql::codegen_support::EnumMember::new(#name, #ident::#variant as i64)
        }
    });

    wrap_in_const(quote! {
        impl _modelgql::codegen_support::Enum for #ident {
            fn enum_name() -> String {
                #name.to_string()
            }

            fn members() -> Vec<_modelgql::codegen_support::EnumMember> {
                vec![#(#members),*]
            }
        }

        impl _modelgql::codegen_support::FieldType for #ident {
            fn descriptor() -> _modelgql::codegen_support::Descriptor {
                _modelgql::codegen_support::Descriptor::singleton(<Self as _modelgql::codegen_support::Enum>::enum_ref())
            }
        }
    })
}
