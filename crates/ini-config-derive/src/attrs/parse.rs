//! Attribute parsing functions.
//!
//! Uses `parse_nested_meta` for every `#[ini(...)]` attribute.

use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Field, Lit};

use super::container::StructAttrs;
use super::field::{FieldAttrs, RawFieldAttrs};
use super::types::RenameStrategy;

/// Parse struct-level attributes from `#[ini(...)]`.
///
/// `#[serde(rename_all = "...")]` is honored when `#[ini(rename_all)]` is absent.
pub fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let serde_rename_all = serde_rename_all_from_attrs(attrs)?;
    let mut result = StructAttrs::default();
    let mut explicit = false;

    for attr in attrs {
        if !attr.path().is_ident("ini") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            explicit |= meta.path.is_ident("rename_all");
            parse_struct_meta(&meta, &mut result)
        })?;
    }

    if !explicit {
        if let Some(strategy) = serde_rename_all {
            result.rename_all = strategy;
        }
    }

    Ok(result)
}

fn parse_struct_meta(meta: &ParseNestedMeta, result: &mut StructAttrs) -> syn::Result<()> {
    if meta.path.is_ident("rename_all") {
        let lit = parse_string_value(meta, "rename_all")?;
        result.rename_all = RenameStrategy::parse(&lit.value()).ok_or_else(|| {
            syn::Error::new_spanned(
                &lit,
                "invalid rename_all value, expected one of: kebab-case, snake_case, lowercase, UPPERCASE, none",
            )
        })?;
        Ok(())
    } else {
        Err(syn::Error::new(
            meta.path.span(),
            "unknown struct attribute for IniRecord",
        ))
    }
}

/// Parse field-level attributes from `#[ini(...)]`.
pub fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut raw = RawFieldAttrs::default();
    let mut span = field
        .ident
        .as_ref()
        .map(|i| i.span())
        .unwrap_or_else(proc_macro2::Span::call_site);

    for attr in &field.attrs {
        if !attr.path().is_ident("ini") {
            continue;
        }
        span = attr.span();
        attr.parse_nested_meta(|meta| parse_field_meta(&meta, &mut raw))?;
    }

    if raw.name.is_none() && raw.rename.is_none() && !raw.flatten {
        raw.name = serde_rename_from_attrs(&field.attrs)?;
    }

    raw.into_field_attrs(span)
}

fn parse_field_meta(meta: &ParseNestedMeta, raw: &mut RawFieldAttrs) -> syn::Result<()> {
    let ident = meta.path.get_ident().map(|i| i.to_string());

    match ident.as_deref() {
        Some("name") => raw.name = Some(parse_string_value(meta, "name")?.value()),
        Some("rename") => raw.rename = Some(parse_string_value(meta, "rename")?.value()),
        Some("flatten") => raw.flatten = true,
        Some("skip") => raw.skip = true,
        _ => {
            return Err(syn::Error::new(
                meta.path.span(),
                "unknown field attribute for IniRecord, expected one of: name, rename, flatten, skip",
            ));
        }
    }
    Ok(())
}

fn parse_string_value(meta: &ParseNestedMeta, key: &str) -> syn::Result<syn::LitStr> {
    let value: Expr = meta.value()?.parse()?;
    match value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s),
        other => Err(syn::Error::new_spanned(
            other,
            format!("expected string literal for `{key}`"),
        )),
    }
}

// Serde compatibility: `rename` and `rename_all` are read as fallbacks, every
// other serde key is skipped.

fn serde_rename_all_from_attrs(attrs: &[Attribute]) -> syn::Result<Option<RenameStrategy>> {
    let mut rename_all = None;

    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let is_rename_all = meta.path.is_ident("rename_all");
            match parse_serde_string_value(&meta)? {
                Some(value) if is_rename_all => {
                    if let Some(strategy) = RenameStrategy::parse(&value) {
                        rename_all = Some(strategy);
                    }
                }
                _ => {}
            }
            Ok(())
        })?;
    }

    Ok(rename_all)
}

fn serde_rename_from_attrs(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename: Option<String> = None;

    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let is_rename = meta.path.is_ident("rename");
            match parse_serde_string_value(&meta)? {
                Some(value) if is_rename => {
                    rename.get_or_insert(value);
                }
                _ => {}
            }
            Ok(())
        })?;
    }

    Ok(rename)
}

/// Consume the value of one serde meta item.
///
/// Returns the string for `key = "..."` and the `deserialize` half of
/// `key(serialize = "...", deserialize = "...")`; anything else yields `None`.
fn parse_serde_string_value(meta: &ParseNestedMeta) -> syn::Result<Option<String>> {
    if meta.input.peek(syn::Token![=]) {
        let value: Expr = meta.value()?.parse()?;
        if let Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) = value
        {
            return Ok(Some(lit.value()));
        }
        return Ok(None);
    }

    if !meta.input.peek(syn::token::Paren) {
        return Ok(None);
    }

    let mut value = None;
    meta.parse_nested_meta(|inner| {
        let is_deserialize = inner.path.is_ident("deserialize");
        match parse_serde_string_value(&inner)? {
            Some(rename) if is_deserialize => value = Some(rename),
            _ => {}
        }
        Ok(())
    })?;

    Ok(value)
}
