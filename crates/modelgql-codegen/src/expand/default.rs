use proc_macro2::TokenStream;
use quote::quote;

/// Converts a `#[model(default = ...)]` expression into an
/// `Option<Value>` expression.
///
/// `None` means no default. Array literals are converted element-wise so
/// `[]` and `[1, 2]` need no type annotations.
pub(super) fn value(expr: &syn::Expr) -> TokenStream {
    if is_none(expr) {
        return quote!(None);
    }

    let value = element(expr);
    quote!(Some(#value))
}

fn element(expr: &syn::Expr) -> TokenStream {
    match expr {
        syn::Expr::Array(array) => {
            let items = array.elems.iter().map(element);
            quote!(_modelgql::codegen_support::Value::Array(vec![#(#items),*]))
        }
        _ if is_none(expr) => quote!(_modelgql::codegen_support::Value::Null),
        _ => quote!(_modelgql::codegen_support::Value::from(#expr)),
    }
}

fn is_none(expr: &syn::Expr) -> bool {
    matches!(expr, syn::Expr::Path(path) if path.qself.is_none() && path.path.is_ident("None"))
}
