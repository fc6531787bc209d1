mod default;
mod enumeration;
mod model;

pub(crate) use enumeration::enumeration;
pub(crate) use model::model;

use proc_macro2::TokenStream;
use quote::quote;

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use modelgql as _modelgql;
            #code
        };
    }
}
