//! `#[derive(IniRecord)]` for `ini-config`.
//!
//! Generates the field descriptor table that the decoder walks to build its
//! lookup model: one registration per named field, carrying the declared name,
//! the optional `#[ini(name = "...")]` tag and a projection to the field.

mod attrs;
mod record_gen;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(IniRecord, attributes(ini))]
pub fn derive_ini_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match record_gen::generate_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
