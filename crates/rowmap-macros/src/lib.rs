extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Row,
    attributes(
        table,
        join,
        column,
        expression,
        display_name,
        foreign_key,
        left_join,
        origin,
        min_select_level,
        natural_order,
        textual_field,
        manual,
        primary_key,
        identity,
        not_null,
        unique
    )
)]
pub fn derive_row(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
