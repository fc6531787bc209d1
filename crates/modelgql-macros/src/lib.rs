extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `Model` and `FieldType` for a struct with named fields.
///
/// Field attributes: `#[model(rename = "...")]`, `#[model(default = ...)]`
/// and `#[model(skip)]`. The model name can be set with
/// `#[model(name = "...")]`.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match modelgql_codegen::generate_model(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Implements `Enum` and `FieldType` for a fieldless enum.
#[proc_macro_derive(Enum, attributes(model))]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    match modelgql_codegen::generate_enum(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
