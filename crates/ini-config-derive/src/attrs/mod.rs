//! Attribute parsing for the `IniRecord` derive.
//!
//! - `types` - rename strategies
//! - `container` - struct-level attributes
//! - `field` - field-level attributes
//! - `parse` - `parse_nested_meta` entry points

mod container;
mod field;
mod parse;
mod types;

pub use container::StructAttrs;
pub use field::FieldAttrs;
pub use parse::{parse_field_attrs, parse_struct_attrs};
