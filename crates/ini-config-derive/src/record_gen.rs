use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attrs::{parse_field_attrs, parse_struct_attrs};

/// One registered field of the record.
struct RecordField {
    ident: syn::Ident,
    ty: syn::Type,
    declared: String,
    tag: Option<String>,
}

pub fn generate_record_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "IniRecord can only be derived for structs with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "IniRecord can only be derived for structs, not enums or unions",
            ));
        }
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "IniRecord cannot be derived for types with lifetime parameters",
        ));
    }

    let struct_attrs = parse_struct_attrs(&input.attrs)?;

    let mut fields = Vec::new();
    for field in named {
        let attrs = parse_field_attrs(field)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let declared = struct_attrs.rename_all.apply(&ident.to_string());
        fields.push(RecordField {
            ident,
            ty: field.ty.clone(),
            declared,
            tag: attrs.tag,
        });
    }

    let registrations: Vec<TokenStream> = fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let declared = &field.declared;
            let tag = match &field.tag {
                Some(tag) => quote! { ::core::option::Option::Some(#tag) },
                None => quote! { ::core::option::Option::None },
            };
            quote! {
                builder.field::<__IniRoot, #ty>(
                    scope,
                    #declared,
                    #tag,
                    access.project::<#ty, _>(|record: &mut Self| &mut record.#ident),
                );
            }
        })
        .collect();

    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let type_params: Vec<syn::Ident> =
            generics.type_params().map(|param| param.ident.clone()).collect();
        let where_clause = generics.make_where_clause();
        for param in type_params {
            where_clause
                .predicates
                .push(syn::parse_quote! { #param: 'static });
        }
        for field in &fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(syn::parse_quote! { #ty: ::ini_config::IniField });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // an empty record registers nothing and leaves the parameters unused
    let (access, builder, scope) = if fields.is_empty() {
        (quote! { _access }, quote! { _builder }, quote! { _scope })
    } else {
        (quote! { access }, quote! { builder }, quote! { scope })
    };

    Ok(quote! {
        impl #impl_generics ::ini_config::IniField for #struct_name #ty_generics #where_clause {
            fn kind() -> ::ini_config::FieldKind {
                ::ini_config::FieldKind::Record
            }

            fn assign(&mut self, _raw: &str) -> ::core::result::Result<(), ::ini_config::ErrorKind> {
                ::core::result::Result::Err(::ini_config::ErrorKind::UnsupportedField { kind: "struct" })
            }

            fn describe<__IniRoot: 'static>(
                #access: &::ini_config::Access<__IniRoot, Self>,
                #builder: &mut ::ini_config::ModelBuilder<'_>,
                #scope: &mut ::ini_config::Model<__IniRoot>,
            ) {
                #(#registrations)*
            }
        }

        impl #impl_generics ::ini_config::IniRecord for #struct_name #ty_generics #where_clause {}
    })
}
