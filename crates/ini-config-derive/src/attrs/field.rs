//! Field-level attribute definitions.

use proc_macro2::Span;

/// Tag that merges a nested record into its parent's scope.
pub const FLATTEN_TAG: &str = "-";

/// Raw parsed field attributes.
///
/// Populated by `parse_nested_meta` in `parse.rs`, then validated by
/// `into_field_attrs()`.
#[derive(Debug, Default)]
pub struct RawFieldAttrs {
    pub name: Option<String>,
    pub rename: Option<String>, // alias for name
    pub flatten: bool,
    pub skip: bool,
}

/// Processed field attributes.
#[derive(Debug, Clone)]
pub struct FieldAttrs {
    /// Explicit tag; `Some("-")` for flattened fields.
    pub tag: Option<String>,
    pub skip: bool,
}

impl RawFieldAttrs {
    pub fn into_field_attrs(self, span: Span) -> syn::Result<FieldAttrs> {
        if self.name.is_some() && self.rename.is_some() {
            return Err(syn::Error::new(span, "use only one of `name` or `rename`"));
        }
        let name = self.name.or(self.rename);

        if self.flatten {
            if name.as_deref().is_some_and(|n| n.trim() != FLATTEN_TAG) {
                return Err(syn::Error::new(
                    span,
                    "`flatten` cannot be combined with an explicit name",
                ));
            }
            if self.skip {
                return Err(syn::Error::new(span, "`flatten` and `skip` are mutually exclusive"));
            }
        }

        let tag = if self.flatten {
            Some(FLATTEN_TAG.to_string())
        } else {
            name
        };

        Ok(FieldAttrs {
            tag,
            skip: self.skip,
        })
    }
}
